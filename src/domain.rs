// ドメイン層モジュール
pub mod menu_document;
pub mod update_outcome;

// 再エクスポート
pub use menu_document::{MenuDocument, MenuParseError};
pub use update_outcome::UpdateOutcome;
