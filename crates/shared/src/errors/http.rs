use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl AppErrorHttp {
    pub fn log(&self) {
        match &self.0 {
            ServiceError::InvalidArgument(_)
            | ServiceError::InsufficientBalance { .. }
            | ServiceError::LimitExceeded { .. } => warn!("⚠️ {}", self.0),
            _ => error!("🚨 {}", self.0),
        }
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        self.log();

        let (status, msg) = match self.0 {
            ServiceError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg),

            err @ ServiceError::InsufficientBalance { .. } => {
                (StatusCode::CONFLICT, err.to_string())
            }

            err @ ServiceError::LimitExceeded { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
                RepositoryError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            },
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}
