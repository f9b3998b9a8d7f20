/// メニュー保存先の設定
///
/// アップロード先バケット名とオブジェクトキーを保持する。
use thiserror::Error;

/// メニューオブジェクトの固定キー
pub const MENU_OBJECT_KEY: &str = "menu.json";

/// 設定のエラー型
#[derive(Debug, Error)]
pub enum MenuConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// アップロード先バケットを持つメニュー更新設定
///
/// バケット名は環境変数BUCKET_NAMEから読み込む。
/// キーは固定値（menu.json）でバージョニングは行わない。
#[derive(Debug, Clone)]
pub struct MenuBucketConfig {
    /// アップロード先バケット名
    bucket_name: String,
}

impl MenuBucketConfig {
    /// 環境変数からバケット名を読み取って新しいMenuBucketConfigを作成
    ///
    /// 環境変数:
    /// - BUCKET_NAME: メニュー保存先S3バケット名
    pub fn from_env() -> Result<Self, MenuConfigError> {
        let bucket_name = std::env::var("BUCKET_NAME")
            .map_err(|_| MenuConfigError::MissingEnvVar("BUCKET_NAME".to_string()))?;

        Ok(Self { bucket_name })
    }

    /// 明示的な値で新しいMenuBucketConfigを作成（テスト用）
    pub fn new(bucket_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
        }
    }

    /// バケット名を取得
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// オブジェクトキーを取得（常にmenu.json）
    pub fn object_key(&self) -> &'static str {
        MENU_OBJECT_KEY
    }
}
