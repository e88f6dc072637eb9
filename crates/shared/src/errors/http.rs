use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg, log_level) = match self.0 {
            ServiceError::Validation(errors) => {
                warn!("📝 Validation failed: {errors:?}");
                let error_msg = format!("Validation failed: {errors:?}");
                (StatusCode::BAD_REQUEST, error_msg, "warn")
            }
            ServiceError::InvalidArgument(msg) => {
                warn!("📝 Invalid argument: {msg}");
                (StatusCode::BAD_REQUEST, msg, "warn")
            }
            ServiceError::InvalidTransition(msg) => {
                warn!("🔁 Invalid status transition: {msg}");
                (StatusCode::CONFLICT, msg, "warn")
            }
            ServiceError::Gateway(msg) => {
                error!("🏧 Payment gateway error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Payment gateway unavailable".to_string(),
                    "error",
                )
            }
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => {
                    info!("🔍 Resource not found");
                    (StatusCode::NOT_FOUND, "Not found".to_string(), "info")
                }
                RepositoryError::AlreadyExists(msg) => {
                    warn!("📦 Resource already exists: {}", msg);
                    (StatusCode::CONFLICT, msg, "warn")
                }
                RepositoryError::ForeignKey(msg) => {
                    warn!("🔗 Foreign key violation: {}", msg);
                    (
                        StatusCode::BAD_REQUEST,
                        format!("Foreign key violation: {msg}"),
                        "warn",
                    )
                }
                RepositoryError::Sqlx(err) => {
                    error!("💾 Database error: {}", err);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Database error".to_string(),
                        "error",
                    )
                }
                RepositoryError::Custom(msg) => {
                    error!("⚙️ Custom repository error: {}", msg);
                    (StatusCode::INTERNAL_SERVER_ERROR, msg, "error")
                }
            },
            ServiceError::NotFound(msg) => {
                info!("🔍 Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg, "info")
            }
            ServiceError::InternalServerError(msg) => {
                error!("🔥 Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg, "error")
            }
            ServiceError::Custom(msg) => {
                error!("⚙️ Custom service error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg, "error")
            }
        };

        match log_level {
            "error" => error!("🚨 HTTP Error {}: {}", status, msg),
            "warn" => warn!("⚠️ HTTP Warning {}: {}", status, msg),
            "info" => info!("ℹ️ HTTP Info {}: {}", status, msg),
            _ => error!("🚨 HTTP Error {}: {}", status, msg),
        }

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}

impl From<ServiceError> for AppErrorHttp {
    fn from(error: ServiceError) -> Self {
        AppErrorHttp(error)
    }
}

impl From<RepositoryError> for AppErrorHttp {
    fn from(error: RepositoryError) -> Self {
        AppErrorHttp(ServiceError::Repo(error))
    }
}
