mod check;
mod error;
mod reports;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use cysafe_classifier::{Classifier, GeminiClassifier, PatternClassifier};
use cysafe_common::error::{CysafeError, CysafeResult};
use cysafe_common::types::ServiceInfo;
use cysafe_config::env::{CLASSIFIER_GEMINI, CLASSIFIER_PATTERNS};
use cysafe_config::{init_tracing, AppConfig};
use cysafe_db::reports::sqlite_repository::SqliteReportRepository;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub report_repo: SqliteReportRepository,
    pub classifier: Classifier,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new("cysafe-api"))
}

async fn metrics() -> impl IntoResponse {
    let body = "\
# HELP cysafe_up Service up indicator\n\
# TYPE cysafe_up gauge\n\
cysafe_up 1\n\
# HELP cysafe_info Service info\n\
# TYPE cysafe_info gauge\n\
cysafe_info{service=\"cysafe-api\",version=\"0.1.0\"} 1\n";

    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
}

fn build_classifier(config: &AppConfig) -> CysafeResult<Classifier> {
    match config.classifier.as_str() {
        CLASSIFIER_GEMINI => {
            let api_key = config.gemini_api_key.clone().ok_or_else(|| {
                CysafeError::Config(
                    "GEMINI_API_KEY is required when CLASSIFIER=gemini".to_string(),
                )
            })?;
            let gemini = GeminiClassifier::new(api_key, config.gemini_model.clone())?;
            Ok(Classifier::Gemini(gemini))
        }
        CLASSIFIER_PATTERNS => Ok(Classifier::Patterns(PatternClassifier::new(
            &config.patterns_path,
        ))),
        other => Err(CysafeError::Config(format!("unknown classifier: {other}"))),
    }
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse::<HeaderValue>().unwrap(),
            "http://127.0.0.1:3000".parse::<HeaderValue>().unwrap(),
        ])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .route("/metrics", get(metrics))
        .merge(reports::router())
        .merge(check::router())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    init_tracing("info");

    let config = AppConfig::from_env().expect("failed to load config");
    tracing::info!(service = "cysafe-api", classifier = %config.classifier, "starting");

    let pool = cysafe_db::create_pool(&config.database_url)
        .await
        .expect("failed to open report database");
    cysafe_db::init_schema(&pool)
        .await
        .expect("failed to bootstrap schema");

    let state = AppState {
        report_repo: SqliteReportRepository::new(pool),
        classifier: build_classifier(&config).expect("failed to configure classifier"),
    };

    let app = build_router(state);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
