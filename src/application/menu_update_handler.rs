//! メニュー更新ハンドラー
//!
//! リクエストボディのパース、再シリアライズ、S3へのアップロードを
//! 順次実行し、結果をUpdateOutcomeとして返す。
//! 設定とストレージ操作はコンストラクタで注入され、
//! ハンドラー自身は環境変数や具体的なSDKに依存しない。

use crate::domain::{MenuDocument, MenuParseError, UpdateOutcome};
use crate::infrastructure::{MenuBucketConfig, S3Ops};
use tracing::{info, warn};

/// メニュー更新ハンドラー
///
/// 1リクエストにつき1回のput_objectを実行する。
/// 同時実行間の調整は行わない（last-write-wins）。
pub struct MenuUpdateHandler<S: S3Ops> {
    /// アップロード先の設定
    config: MenuBucketConfig,
    /// ストレージ操作
    storage: S,
}

impl<S: S3Ops> MenuUpdateHandler<S> {
    /// 新しいハンドラーを作成
    ///
    /// # 引数
    /// * `config` - アップロード先バケット設定
    /// * `storage` - ストレージ操作の実装
    pub fn new(config: MenuBucketConfig, storage: S) -> Self {
        Self { config, storage }
    }

    /// メニュー更新リクエストを処理する
    ///
    /// # 処理フロー
    /// 1. リクエストボディをJSONとしてパース
    /// 2. 再シリアライズしてバケットのmenu.jsonへアップロード
    /// 3. 結果をUpdateOutcomeとして返す
    ///
    /// パース失敗・アップロード失敗はいずれもFailureに変換され、
    /// 呼び出し元へエラーとして伝播することはない。
    pub async fn handle(&self, body: Option<&str>) -> UpdateOutcome {
        // ボディが存在しない場合はパース不能として扱う
        let Some(body) = body else {
            let error = MenuParseError::EmptyBody;
            warn!(error = %error, "リクエストボディなし");
            return UpdateOutcome::failure(error.to_string());
        };

        // リクエストボディをJSONとしてパース
        let document = match MenuDocument::parse(body) {
            Ok(document) => document,
            Err(error) => {
                warn!(error = %error, "メニューJSONのパース失敗");
                return UpdateOutcome::failure(error.to_string());
            }
        };

        info!(
            bucket = self.config.bucket_name(),
            key = self.config.object_key(),
            "メニュー更新開始"
        );

        // 再シリアライズしてアップロード（既存オブジェクトは全上書き）
        let upload_result = self
            .storage
            .put_object(
                self.config.bucket_name(),
                self.config.object_key(),
                &document.to_json(),
                "application/json",
            )
            .await;

        match upload_result {
            Ok(()) => {
                info!(
                    bucket = self.config.bucket_name(),
                    key = self.config.object_key(),
                    "メニュー更新完了"
                );
                UpdateOutcome::Success
            }
            Err(error) => {
                warn!(error = %error, "メニューアップロード失敗");
                UpdateOutcome::failure(error.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::S3OpsError;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// テスト用のインメモリストレージ
    ///
    /// (bucket, key)ごとに最新のボディのみ保持する（上書きセマンティクス）。
    struct InMemoryS3Ops {
        objects: Mutex<Vec<(String, String, String, String)>>,
        call_count: AtomicUsize,
        fail_with: Option<String>,
    }

    impl InMemoryS3Ops {
        fn new() -> Self {
            Self {
                objects: Mutex::new(Vec::new()),
                call_count: AtomicUsize::new(0),
                fail_with: None,
            }
        }

        fn failing(message: impl Into<String>) -> Self {
            Self {
                objects: Mutex::new(Vec::new()),
                call_count: AtomicUsize::new(0),
                fail_with: Some(message.into()),
            }
        }

        fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }

        /// 指定バケット・キーの現在の内容を取得（最新の書き込みが勝つ）
        fn stored_body(&self, bucket: &str, key: &str) -> Option<String> {
            self.objects
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|(b, k, _, _)| b == bucket && k == key)
                .map(|(_, _, body, _)| body.clone())
        }

        fn last_content_type(&self) -> Option<String> {
            self.objects
                .lock()
                .unwrap()
                .last()
                .map(|(_, _, _, ct)| ct.clone())
        }
    }

    #[async_trait]
    impl S3Ops for InMemoryS3Ops {
        async fn put_object(
            &self,
            bucket: &str,
            key: &str,
            body: &str,
            content_type: &str,
        ) -> Result<(), S3OpsError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);

            if let Some(message) = &self.fail_with {
                return Err(S3OpsError::AwsSdkError(message.clone()));
            }

            self.objects.lock().unwrap().push((
                bucket.to_string(),
                key.to_string(),
                body.to_string(),
                content_type.to_string(),
            ));
            Ok(())
        }
    }

    fn handler_with(storage: InMemoryS3Ops) -> MenuUpdateHandler<InMemoryS3Ops> {
        MenuUpdateHandler::new(MenuBucketConfig::new("menu-bucket"), storage)
    }

    #[tokio::test]
    async fn test_valid_json_uploads_and_succeeds() {
        let handler = handler_with(InMemoryS3Ops::new());

        let outcome = handler
            .handle(Some(r#"{"items": ["pizza", "pasta"]}"#))
            .await;

        assert_eq!(outcome, UpdateOutcome::Success);
        assert_eq!(handler.storage.call_count(), 1);

        // 保存された内容をパースすると送信した値に等しい
        let stored = handler.storage.stored_body("menu-bucket", "menu.json").unwrap();
        let parsed: Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(parsed, json!({"items": ["pizza", "pasta"]}));

        // Content-Typeはapplication/json
        assert_eq!(
            handler.storage.last_content_type().unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_any_json_value_is_accepted() {
        // オブジェクト以外のJSON値もそのまま保存される
        for body in ["[1, 2, 3]", "42", "\"special\"", "null"] {
            let handler = handler_with(InMemoryS3Ops::new());

            let outcome = handler.handle(Some(body)).await;

            assert_eq!(outcome, UpdateOutcome::Success, "body: {}", body);
            let stored = handler.storage.stored_body("menu-bucket", "menu.json").unwrap();
            let expected: Value = serde_json::from_str(body).unwrap();
            let actual: Value = serde_json::from_str(&stored).unwrap();
            assert_eq!(actual, expected);
        }
    }

    #[tokio::test]
    async fn test_invalid_json_fails_without_upload() {
        let handler = handler_with(InMemoryS3Ops::new());

        let outcome = handler.handle(Some("not valid json")).await;

        match outcome {
            UpdateOutcome::Failure(description) => {
                assert!(!description.is_empty());
            }
            UpdateOutcome::Success => panic!("Expected Failure outcome"),
        }

        // ストレージ書き込みは発生しない
        assert_eq!(handler.storage.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_body_fails_without_upload() {
        let handler = handler_with(InMemoryS3Ops::new());

        let outcome = handler.handle(None).await;

        assert_eq!(outcome.status_code(), 500);
        assert_eq!(handler.storage.call_count(), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_description() {
        let handler = handler_with(InMemoryS3Ops::failing("access denied to menu-bucket"));

        let outcome = handler.handle(Some(r#"{"items": []}"#)).await;

        match outcome {
            UpdateOutcome::Failure(description) => {
                // 注入した失敗メッセージが説明に反映されている
                assert!(description.contains("access denied to menu-bucket"));
            }
            UpdateOutcome::Success => panic!("Expected Failure outcome"),
        }
        assert_eq!(handler.storage.call_count(), 1);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let handler = handler_with(InMemoryS3Ops::new());

        let first = handler.handle(Some(r#"{"items": ["pizza"]}"#)).await;
        let second = handler.handle(Some(r#"{"items": ["sushi"]}"#)).await;

        // 両方の呼び出しが個別に成功する
        assert_eq!(first, UpdateOutcome::Success);
        assert_eq!(second, UpdateOutcome::Success);

        // 保存内容は最後の送信のみを反映する
        let stored = handler.storage.stored_body("menu-bucket", "menu.json").unwrap();
        let parsed: Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(parsed, json!({"items": ["sushi"]}));
    }

    #[tokio::test]
    async fn test_uses_configured_bucket_name() {
        let storage = InMemoryS3Ops::new();
        let handler = MenuUpdateHandler::new(MenuBucketConfig::new("another-bucket"), storage);

        let outcome = handler.handle(Some("{}")).await;

        assert_eq!(outcome, UpdateOutcome::Success);
        assert!(handler.storage.stored_body("another-bucket", "menu.json").is_some());
        assert!(handler.storage.stored_body("menu-bucket", "menu.json").is_none());
    }
}
