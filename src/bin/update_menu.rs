/// メニュー更新HTTP Lambdaエントリポイント
///
/// Lambda Function URL経由のHTTPリクエストを処理し、
/// リクエストボディのJSONをS3バケットのmenu.jsonへアップロードする。
/// 成功時は200、失敗時は500のJSONレスポンスを返却する。
use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::{Body, Error, Request, Response, run, service_fn};
use menu_updater::application::MenuUpdateHandler;
use menu_updater::domain::UpdateOutcome;
use menu_updater::infrastructure::{AwsS3Ops, MenuBucketConfig, init_logging};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("メニュー更新Lambda関数を初期化");

    // Lambda関数を実行
    run(service_fn(handler)).await
}

/// HTTPリクエストハンドラー
///
/// リクエストボディを取り出し、設定とS3操作を注入した
/// MenuUpdateHandlerで処理して、結果をHTTPレスポンスに変換する。
///
/// パース失敗・設定不備・アップロード失敗はすべて500レスポンスに
/// 変換されるため、この関数がエラーを返すことはない。
async fn handler(request: Request) -> Result<Response<Body>, Error> {
    info!("メニュー更新リクエスト受信");

    // リクエストボディを文字列として取り出す
    let body = extract_body(&request);

    // 環境変数からバケット設定を読み込み
    let config = match MenuBucketConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            warn!(error = %error, "バケット設定の読み込み失敗");
            return Ok(build_response(UpdateOutcome::failure(error.to_string())));
        }
    };

    // S3クライアントを作成してハンドラーを実行
    let storage = AwsS3Ops::from_config().await;
    let update_handler = MenuUpdateHandler::new(config, storage);
    let outcome = update_handler.handle(body.as_deref()).await;

    info!(status_code = outcome.status_code(), "メニュー更新レスポンス送信");

    Ok(build_response(outcome))
}

/// リクエストボディを文字列として取り出す
///
/// ボディが存在しない場合、またはUTF-8として解釈できない場合はNone。
fn extract_body(request: &Request) -> Option<String> {
    match request.body() {
        Body::Text(text) => Some(text.clone()),
        Body::Binary(bytes) => String::from_utf8(bytes.clone()).ok(),
        Body::Empty => None,
        _ => None,
    }
}

/// UpdateOutcomeをHTTPレスポンスに変換
///
/// - Success: 200 / `{"message": "Menu updated successfully!"}`
/// - Failure: 500 / `{"error": "<説明>"}`
fn build_response(outcome: UpdateOutcome) -> Response<Body> {
    Response::builder()
        .status(outcome.status_code())
        .header(CONTENT_TYPE, "application/json")
        .body(Body::Text(outcome.body_json()))
        .expect("レスポンスの構築に失敗")
}
