// インフラストラクチャ層モジュール
pub mod config;
pub mod logging;
pub mod s3_ops;

// 再エクスポート
pub use config::{MenuBucketConfig, MenuConfigError};
pub use logging::init_logging;
pub use s3_ops::{AwsS3Ops, S3Ops, S3OpsError};
