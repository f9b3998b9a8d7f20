//! S3操作モジュール
//!
//! メニュー更新Lambdaで使用するS3アップロード操作を提供する。
//! - 指定バケット・キーへのオブジェクトPUT（全上書き）

use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::primitives::ByteStream;
use thiserror::Error;
use tracing::{info, warn};

/// S3操作のエラー型
#[derive(Debug, Error)]
pub enum S3OpsError {
    /// AWS SDK エラー
    #[error("AWS S3 APIエラー: {0}")]
    AwsSdkError(String),
}

/// S3操作トレイト（テスト用の抽象化）
#[async_trait]
pub trait S3Ops: Send + Sync {
    /// オブジェクトをバケットにアップロードする
    ///
    /// 同一キーの既存オブジェクトは全上書きされる（last-write-wins）。
    ///
    /// # 引数
    /// * `bucket` - アップロード先バケット名
    /// * `key` - オブジェクトキー
    /// * `body` - オブジェクト本体
    /// * `content_type` - Content-Typeヘッダー値
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: &str,
        content_type: &str,
    ) -> Result<(), S3OpsError>;
}

/// 実際のAWS S3 SDKを使用したS3操作実装
pub struct AwsS3Ops {
    client: S3Client,
}

impl AwsS3Ops {
    /// 新しいAwsS3Opsを作成
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }

    /// AWS設定からデフォルトのクライアントを作成
    pub async fn from_config() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = S3Client::new(&config);
        Self::new(client)
    }
}

#[async_trait]
impl S3Ops for AwsS3Ops {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: &str,
        content_type: &str,
    ) -> Result<(), S3OpsError> {
        info!(
            bucket = %bucket,
            key = %key,
            body_length = body.len(),
            "S3オブジェクトアップロード開始"
        );

        let result = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body.as_bytes().to_vec()))
            .content_type(content_type)
            .send()
            .await;

        match result {
            Ok(_) => {
                info!(bucket = %bucket, key = %key, "S3オブジェクトアップロード完了");
                Ok(())
            }
            Err(err) => {
                warn!(
                    bucket = %bucket,
                    key = %key,
                    error = %err,
                    "PutObjectエラー"
                );
                Err(S3OpsError::AwsSdkError(err.to_string()))
            }
        }
    }
}
