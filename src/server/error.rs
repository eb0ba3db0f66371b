use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Route-level failures. Bodies are plain text; successful responses are
/// the only JSON the API produces.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("required argument \"{0}\" was missing")]
    MissingArgument(&'static str),

    #[error("required argument \"{0}\" was invalid")]
    InvalidArgument(&'static str),

    #[error("no deck saved under \"{0}\"")]
    DeckNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingArgument(_) | ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::DeckNotFound(_) => StatusCode::NOT_FOUND,
        };

        (status, self.to_string()).into_response()
    }
}
