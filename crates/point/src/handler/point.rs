use crate::{metrics::Metrics, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path},
    response::IntoResponse,
    routing::{get, patch},
};
use shared::{
    abstract_trait::point::service::{DynPointCommandService, DynPointQueryService},
    domain::{
        requests::{ChargePointRequest, UsePointRequest},
        responses::{ApiResponse, PointHistoryResponse, UserPointResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/point/{id}",
    tag = "Point",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Current point balance", body = ApiResponse<UserPointResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_point(
    Extension(service): Extension<DynPointQueryService>,
    Extension(metrics): Extension<Arc<Metrics>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.select(id).await;
    metrics.record("select", &response);
    Ok(Json(response?))
}

#[utoipa::path(
    get,
    path = "/point/{id}/histories",
    tag = "Point",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Charge and use history, oldest first", body = ApiResponse<Vec<PointHistoryResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_point_histories(
    Extension(service): Extension<DynPointQueryService>,
    Extension(metrics): Extension<Arc<Metrics>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.history(id).await;
    metrics.record("history", &response);
    Ok(Json(response?))
}

#[utoipa::path(
    patch,
    path = "/point/{id}/charge",
    tag = "Point",
    params(("id" = i64, Path, description = "User ID")),
    request_body(content = i64, description = "Amount to charge"),
    responses(
        (status = 200, description = "Point charged", body = ApiResponse<UserPointResponse>),
        (status = 400, description = "Amount is not positive", body = ErrorResponse),
        (status = 422, description = "Balance ceiling exceeded", body = ErrorResponse)
    )
)]
pub async fn charge_point(
    Extension(service): Extension<DynPointCommandService>,
    Extension(metrics): Extension<Arc<Metrics>>,
    Path(id): Path<i64>,
    Json(amount): Json<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service
        .charge(&ChargePointRequest {
            user_id: id,
            amount,
        })
        .await;
    metrics.record("charge", &response);
    Ok(Json(response?))
}

#[utoipa::path(
    patch,
    path = "/point/{id}/use",
    tag = "Point",
    params(("id" = i64, Path, description = "User ID")),
    request_body(content = i64, description = "Amount to use"),
    responses(
        (status = 200, description = "Point used", body = ApiResponse<UserPointResponse>),
        (status = 400, description = "Amount is not positive", body = ErrorResponse),
        (status = 409, description = "Insufficient balance", body = ErrorResponse)
    )
)]
pub async fn use_point(
    Extension(service): Extension<DynPointCommandService>,
    Extension(metrics): Extension<Arc<Metrics>>,
    Path(id): Path<i64>,
    Json(amount): Json<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service
        .use_point(&UsePointRequest {
            user_id: id,
            amount,
        })
        .await;
    metrics.record("use", &response);
    Ok(Json(response?))
}

pub fn point_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/point/{id}", get(get_point))
        .route("/point/{id}/histories", get(get_point_histories))
        .route("/point/{id}/charge", patch(charge_point))
        .route("/point/{id}/use", patch(use_point))
        .layer(Extension(app_state.di_container.point_command.service.clone()))
        .layer(Extension(app_state.di_container.point_query.service.clone()))
        .layer(Extension(app_state.metrics.clone()))
}
