use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Failures surfaced at the HTTP boundary.
///
/// The display text is what the client sees; the source of `Internal` is only
/// ever logged.
#[derive(Debug, Error)]
pub enum AnalysisError {
  #[error("Company name is required")]
  InvalidInput,

  #[error("Failed to generate analysis")]
  Internal(#[source] anyhow::Error),
}

impl ResponseError for AnalysisError {
  fn status_code(&self) -> StatusCode {
    match self {
      AnalysisError::InvalidInput => StatusCode::BAD_REQUEST,
      AnalysisError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    HttpResponse::build(self.status_code()).json(serde_json::json!({
      "error": self.to_string(),
    }))
  }
}
