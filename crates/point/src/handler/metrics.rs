use crate::{metrics::Metrics, state::AppState};
use axum::{
    extract::Extension,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use shared::service::point::PointLockRegistry;
use std::sync::Arc;
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

pub async fn get_metrics(
    Extension(metrics): Extension<Arc<Metrics>>,
    Extension(locks): Extension<Arc<PointLockRegistry>>,
) -> impl IntoResponse {
    metrics.set_tracked_users(locks.tracked_users());

    match metrics.encode() {
        Ok(body) => (
            StatusCode::OK,
            [(
                header::CONTENT_TYPE,
                "application/openmetrics-text; version=1.0.0; charset=utf-8",
            )],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("❌ Failed to encode metrics: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub fn metrics_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/metrics", get(get_metrics))
        .layer(Extension(app_state.metrics.clone()))
        .layer(Extension(app_state.di_container.locks.clone()))
}
