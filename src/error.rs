use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use common::ErrorResponse;
use predict::ValidationError;
use thiserror::Error;
use tracing::warn;

use crate::upstream::UpstreamError;

/// Failures the gateway answers itself, without a forecast.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Body permintaan harus berupa JSON")]
    InvalidBody,

    #[error("Parameter target_date diperlukan (format: YYYY-MM-DD)")]
    MissingTargetDate,

    #[error("Format tanggal tidak valid. Gunakan format: YYYY-MM-DD")]
    InvalidDateFormat,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody
            | ApiError::MissingTargetDate
            | ApiError::InvalidDateFormat
            | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Upstream(ref err) = self {
            warn!("Upstream failure: {:?}", err);
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
