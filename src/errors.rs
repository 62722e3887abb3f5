use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use thiserror::Error;

/// JSON body shared by every error response.
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Unified error type for all handlers and stores.
///
/// Every fallible operation returns `Result<_, ApiError>`; actix turns the
/// error into the matching HTTP status with a `{"message": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Conflict(String),

    /// Bad credentials. One message for unknown username and wrong
    /// password, so responses cannot be used to enumerate usernames.
    #[error("Invalid username or password")]
    Authentication,

    /// Missing, invalid or expired session.
    #[error("Unauthorized")]
    NotAuthenticated,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl ApiError {
    /// Client-visible message. Internal failures are collapsed to a generic
    /// string; the detail only goes to the server log.
    fn client_message(&self) -> String {
        match self {
            ApiError::Storage(_) | ApiError::Hash(_) => "Internal server error".into(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Authentication | ApiError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) | ApiError::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Storage(e) => error!("Storage failure: {}", e),
            ApiError::Hash(e) => error!("Password hash failure: {}", e),
            _ => {}
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.client_message(),
        })
    }
}

/// JSON extractor config mapping deserialization failures to the same
/// `{"message": ...}` shape as `ApiError`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let resp = HttpResponse::BadRequest().json(ErrorBody {
            message: "Invalid request data".into(),
        });
        InternalError::from_response(err, resp).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            ApiError::InvalidInput("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Conflict("dup".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Authentication.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotAuthenticated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Forbidden("no".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("gone".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Storage(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_detail_is_not_echoed() {
        let err = ApiError::Storage(sqlx::Error::PoolClosed);
        assert_eq!(err.client_message(), "Internal server error");

        let err = ApiError::NotFound("Task not found".into());
        assert_eq!(err.client_message(), "Task not found");
    }
}
