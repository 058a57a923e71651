pub mod formatters;
pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/reports",
            get(handlers::list_reports).post(handlers::submit_report),
        )
        .route("/reports/export", get(handlers::export_reports_csv))
        .route("/reports/table", get(handlers::render_reports_table))
}
