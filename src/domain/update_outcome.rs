//! メニュー更新結果モジュール
//!
//! 更新処理の結果を成功/失敗の2値で表現する。
//! ステータスコードとレスポンスボディへの変換はこの型に集約し、
//! アプリケーション層はHTTPの詳細に関与しない。

use serde::Serialize;

/// 成功レスポンスのボディ
#[derive(Debug, Serialize)]
struct SuccessBody {
    message: String,
}

/// 失敗レスポンスのボディ
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// メニュー更新処理の結果
///
/// パース・設定解決・アップロードのいずれかが失敗した場合はFailure、
/// すべて成功した場合はSuccessとなる。失敗原因の種別は区別せず、
/// 説明文字列のみを保持する。
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// 更新成功
    Success,
    /// 更新失敗（原因の説明を保持）
    Failure(String),
}

impl UpdateOutcome {
    /// 失敗結果を作成
    pub fn failure(description: impl Into<String>) -> Self {
        Self::Failure(description.into())
    }

    /// HTTPステータスコードを取得（成功: 200、失敗: 500）
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Success => 200,
            Self::Failure(_) => 500,
        }
    }

    /// JSONエンコードされたレスポンスボディを生成
    ///
    /// - 成功: `{"message": "Menu updated successfully!"}`
    /// - 失敗: `{"error": "<説明>"}`
    pub fn body_json(&self) -> String {
        match self {
            Self::Success => serde_json::to_string(&SuccessBody {
                message: "Menu updated successfully!".to_string(),
            })
            .expect("SuccessBodyのシリアライズに失敗"),
            Self::Failure(description) => serde_json::to_string(&ErrorBody {
                error: description.clone(),
            })
            .expect("ErrorBodyのシリアライズに失敗"),
        }
    }
}
