use axum::{Json, extract::rejection::JsonRejection, response::IntoResponse};
use bbs_common::{TokenError, views::ApiErrorResponse};
use bbs_db::storage::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error(transparent)]
    InternalAnyhow(#[from] anyhow::Error),
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidToken => Self::InvalidToken,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    fn status_code(&self) -> axum::http::StatusCode {
        match self {
            Self::NotFound => axum::http::StatusCode::NOT_FOUND,
            Self::InvalidToken => axum::http::StatusCode::FORBIDDEN,
            Self::BadRequest(_) => axum::http::StatusCode::BAD_REQUEST,
            Self::Storage(se) => match se {
                StoreError::NotFound => axum::http::StatusCode::NOT_FOUND,
                StoreError::Internal(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::InternalAnyhow(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(err: ApiError) -> Self {
        ApiErrorResponse {
            code: match &err {
                ApiError::NotFound => Some("NotFound".into()),
                ApiError::InvalidToken => Some("InvalidToken".into()),
                ApiError::BadRequest(_) => Some("BadRequest".into()),
                ApiError::Storage(se) => match se {
                    StoreError::NotFound => Some("NotFound".into()),
                    StoreError::Internal(_) => Some("InternalError".into()),
                },
                ApiError::InternalAnyhow(_) => Some("InternalError".into()),
            },

            message: match &err {
                ApiError::NotFound => "The requested resource was not found.".into(),
                ApiError::InvalidToken => "Invalid token.".into(),
                ApiError::BadRequest(reason) => reason.clone(),
                ApiError::Storage(se) => match se {
                    StoreError::NotFound => "The requested resource was not found.".into(),
                    StoreError::Internal(_) => {
                        "Something went wrong on our end. Please try again later.".into()
                    }
                },
                ApiError::InternalAnyhow(_) => {
                    "Something went wrong on our end. Please try again later.".into()
                }
            },

            #[cfg(debug_assertions)]
            details: Some(err.to_string()),

            #[cfg(not(debug_assertions))]
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Error returned by handler: {self}");

        let status_code = self.status_code();
        (status_code, Json(Into::<ApiErrorResponse>::into(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_token_is_forbidden() {
        let err: ApiError = TokenError::InvalidToken.into();
        assert_eq!(err.status_code(), axum::http::StatusCode::FORBIDDEN);

        let body: ApiErrorResponse = err.into();
        assert_eq!(body.code.as_deref(), Some("InvalidToken"));
        assert_eq!(body.message, "Invalid token.");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.status_code(), axum::http::StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::BadRequest("nope".into()).status_code(),
            axum::http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Storage(StoreError::NotFound).status_code(),
            axum::http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::InternalAnyhow(anyhow::anyhow!("boom")).status_code(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
