//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  http::header,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use sarf::errors::SarfError;
use sarf::models::ResponseEnvelope;
use sarf::render::{ContentType, RenderEnv};

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Language outside the served set
  UnsupportedLanguage,
  /// Engine name never registered
  UnknownEngine,
  /// Engine name recognized but without an implementation
  EngineNotImplemented,
  /// Text endpoint given a non-plain-text mime type
  UnsupportedMimeType,
  /// Both or neither of text and text URI supplied
  AmbiguousOrMissingInput,
  /// Engine adapter raised
  EngineFailure,
  /// Remote document or text URI could not be fetched
  FetchFailure,
  /// Configuration error
  Config,
  /// Internal error
  Internal,
}

impl ApiErrorKind {
  /// Stable machine-readable code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::UnsupportedLanguage => "unsupported_language",
      Self::UnknownEngine => "unknown_engine",
      Self::EngineNotImplemented => "engine_not_implemented",
      Self::UnsupportedMimeType => "unsupported_mime_type",
      Self::AmbiguousOrMissingInput => "ambiguous_or_missing_input",
      Self::EngineFailure => "engine_failure",
      Self::FetchFailure => "fetch_failure",
      Self::Config => "config_error",
      Self::Internal => "internal_error",
    }
  }

  /// HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::UnsupportedLanguage | Self::UnknownEngine => StatusCode::NOT_FOUND,
      Self::EngineNotImplemented => StatusCode::NOT_IMPLEMENTED,
      Self::UnsupportedMimeType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
      Self::AmbiguousOrMissingInput => StatusCode::BAD_REQUEST,
      Self::FetchFailure => StatusCode::BAD_GATEWAY,
      Self::EngineFailure | Self::Config | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// Core taxonomy error, surfaced unmodified
  #[error(transparent)]
  Sarf(#[from] SarfError),

  /// Remote document or text URI could not be fetched
  #[error("failed to fetch {uri}: {reason}")]
  Fetch {
    /// URI that failed
    uri: String,
    /// What went wrong
    reason: String,
  },

  /// Configuration error
  #[error("configuration error: {0}")]
  Config(String),

  /// Internal error
  #[error("internal error: {0}")]
  Internal(String),
}

impl ApiError {
  /// Error classification
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::Sarf(err) => match err {
        SarfError::UnsupportedLanguage { .. } => ApiErrorKind::UnsupportedLanguage,
        SarfError::UnknownEngine { .. } => ApiErrorKind::UnknownEngine,
        SarfError::EngineNotImplemented { .. } => ApiErrorKind::EngineNotImplemented,
        SarfError::UnsupportedMimeType { .. } => ApiErrorKind::UnsupportedMimeType,
        SarfError::AmbiguousOrMissingInput => ApiErrorKind::AmbiguousOrMissingInput,
        SarfError::EngineFailure(_) => ApiErrorKind::EngineFailure,
        // #[non_exhaustive] enum; future variants surface as internal
        _ => ApiErrorKind::Internal,
      },
      Self::Fetch { .. } => ApiErrorKind::FetchFailure,
      Self::Config(_) => ApiErrorKind::Config,
      Self::Internal(_) => ApiErrorKind::Internal,
    }
  }

  /// Stable machine-readable code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates a fetch failure
  #[must_use]
  pub fn fetch(uri: impl Into<String>, reason: impl Into<String>) -> Self {
    Self::Fetch {
      uri: uri.into(),
      reason: reason.into(),
    }
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Renders the error through the content negotiator
  ///
  /// Failure bodies take the same envelope path as success bodies, so
  /// the client gets its requested content type either way. Falls back
  /// to the JSON shape if the error body itself fails to render.
  #[must_use]
  pub fn into_negotiated(self, env: &RenderEnv, content_type: ContentType) -> Response {
    let status = self.status();
    let envelope = ResponseEnvelope::error(self.code(), self.to_string());

    match sarf::render::render(&envelope, content_type, env) {
      Ok(rendered) => (
        status,
        [(header::CONTENT_TYPE, rendered.content_type)],
        rendered.body,
      )
        .into_response(),
      Err(_) => self.into_response(),
    }
  }
}

/// Error response JSON structure
///
/// Fallback shape for failures raised before content negotiation runs
/// (extractor errors, render failures).
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      error: ErrorBody {
        code: self.code(),
        message: self.to_string(),
      },
    };

    (status, Json(body)).into_response()
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{TimeZone, Utc};

  fn env() -> RenderEnv {
    RenderEnv::fixed("sarf", Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap())
  }

  #[test]
  fn taxonomy_status_mapping() {
    let err = ApiError::from(SarfError::UnsupportedLanguage {
      language: "fr".to_string(),
    });
    assert_eq!(err.kind(), ApiErrorKind::UnsupportedLanguage);
    assert_eq!(err.status(), StatusCode::NOT_FOUND);

    let err = ApiError::from(SarfError::UnknownEngine {
      name: "x".to_string(),
    });
    assert_eq!(err.status(), StatusCode::NOT_FOUND);

    let err = ApiError::from(SarfError::EngineNotImplemented {
      name: "casl".to_string(),
    });
    assert_eq!(err.status(), StatusCode::NOT_IMPLEMENTED);

    let err = ApiError::from(SarfError::UnsupportedMimeType {
      mime: "text/html".to_string(),
    });
    assert_eq!(err.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let err = ApiError::from(SarfError::AmbiguousOrMissingInput);
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);

    let err = ApiError::from(SarfError::EngineFailure("boom".to_string()));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn fetch_failure_is_bad_gateway() {
    let err = ApiError::fetch("http://example.org/doc", "timed out");
    assert_eq!(err.kind(), ApiErrorKind::FetchFailure);
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    assert!(err.to_string().contains("http://example.org/doc"));
  }

  #[test]
  fn negotiated_error_keeps_status_and_code() {
    let err = ApiError::from(SarfError::AmbiguousOrMissingInput);
    let response = err.into_negotiated(&env(), ContentType::Json);
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  }
}
