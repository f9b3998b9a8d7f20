//! メニュードキュメントモジュール
//!
//! リクエストボディとして受信したJSON文字列をパースし、
//! S3へアップロードする形に再シリアライズする。
//! スキーマは強制しない（任意のJSON値を受け入れる）。

use serde_json::Value;
use thiserror::Error;

/// メニュードキュメントのパースエラー型
#[derive(Debug, Error)]
pub enum MenuParseError {
    /// リクエストボディが有効なJSONではない
    #[error("JSONパースエラー: {0}")]
    InvalidJson(String),
    /// リクエストボディが存在しない
    #[error("リクエストボディが空です")]
    EmptyBody,
}

/// 任意のJSON値を保持するメニュードキュメント
///
/// バリデーションはJSONとしてパース可能であることのみ。
/// オブジェクト・配列・スカラーのいずれも受け入れる。
#[derive(Debug, Clone, PartialEq)]
pub struct MenuDocument {
    value: Value,
}

impl MenuDocument {
    /// JSON文字列をパースしてMenuDocumentを作成
    pub fn parse(body: &str) -> Result<Self, MenuParseError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| MenuParseError::InvalidJson(e.to_string()))?;
        Ok(Self { value })
    }

    /// パース済みのJSON値からMenuDocumentを作成
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// 保持しているJSON値への参照を取得
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// アップロード用のJSON文字列に再シリアライズ
    pub fn to_json(&self) -> String {
        // Valueのシリアライズは失敗しない
        self.value.to_string()
    }
}
