// アプリケーション層モジュール
pub mod menu_update_handler;

// 再エクスポート
pub use menu_update_handler::MenuUpdateHandler;
