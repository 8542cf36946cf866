//! Router definition

use axum::{
  Router,
  routing::get,
};
use tower_http::trace::TraceLayer;

use super::handlers::{
  analyze_document, analyze_text, analyze_word, engine_descriptor, engine_list, health_check,
  legacy_word,
};
use super::state::AppState;
use crate::errors::ApiError;

/// Creates the API router
///
/// Analysis endpoints accept GET and POST with the same query-string
/// parameters; the legacy and capability endpoints are GET only.
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route(
      "/morphologyservice/analysis/word",
      get(analyze_word).post(analyze_word),
    )
    .route(
      "/morphologyservice/analysis/document",
      get(analyze_document).post(analyze_document),
    )
    .route(
      "/morphologyservice/analysis/text",
      get(analyze_text).post(analyze_text),
    )
    .route("/alpheiosservice/{engine}", get(legacy_word))
    .route("/morphologyservice/engine", get(engine_list))
    .route("/morphologyservice/engine/{id}", get(engine_descriptor))
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Starts the server
///
/// # Errors
/// Returns an error when binding or serving fails.
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = &state.config.bind_addr;
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {addr}: {e}")))?;

  tracing::info!("server listening on http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("server error: {e}")))?;

  Ok(())
}
