//! HTTP handler definitions
//!
//! Handlers never know about wire formats: they collect validated
//! parameters, run the analysis service, wrap the result in a
//! `ResponseEnvelope` and let the content negotiator pick the encoder
//! from the envelope's format family and the client's Accept header.

use axum::{
  extract::{Path, Query, State},
  http::{HeaderMap, StatusCode, header},
  response::{IntoResponse, Response},
};
use tracing::{debug, error, info};

use sarf::errors::SarfError;
use sarf::models::{Analysis, ResponseEnvelope};
use sarf::render::{ContentType, RenderEnv, render};

use crate::config::PLAIN_TEXT_MIME;
use crate::errors::ApiError;
use crate::models::{DocumentParams, LegacyParams, TextParams, WordParams, wait_requested};

use super::capabilities::engine_list_xml;
use super::state::AppState;

/// GET|POST /morphologyservice/analysis/word
///
/// Analyzes one word and returns the standard-format envelope with 201.
pub async fn analyze_word(
  State(state): State<AppState>,
  Query(params): Query<WordParams>,
  headers: HeaderMap,
) -> Response {
  let content_type = negotiated(&headers);
  debug!(word = %params.word, engine = %params.engine, "word analysis request");

  let result = run_analysis(&state, move |service| {
    service.analyze(
      &params.engine,
      &params.lang,
      &params.word,
      params.word_uri.as_deref(),
    )
  })
  .await;

  match result {
    Ok(analysis) => {
      info!(word_count = analysis.words.len(), "word analysis complete");
      respond(
        &state.render_env,
        ResponseEnvelope::standard(analysis),
        content_type,
        StatusCode::CREATED,
      )
    }
    Err(err) => err.into_negotiated(&state.render_env, content_type),
  }
}

/// GET|POST /morphologyservice/analysis/document
///
/// Fetches the document body, then analyzes it when `wait` is truthy
/// (201). A falsy or absent `wait` performs no analysis and returns 202.
pub async fn analyze_document(
  State(state): State<AppState>,
  Query(params): Query<DocumentParams>,
  headers: HeaderMap,
) -> Response {
  let content_type = negotiated(&headers);
  debug!(document_id = %params.document_id, engine = %params.engine, "document analysis request");

  // Bad language or engine is rejected even when no analysis runs
  if let Err(err) = state.analysis.validate(&params.engine, &params.lang) {
    return ApiError::from(err).into_negotiated(&state.render_env, content_type);
  }

  if !wait_requested(params.wait.as_deref()) {
    return StatusCode::ACCEPTED.into_response();
  }

  let result = async {
    let body = state.fetcher.fetch(&params.document_id).await?;
    run_analysis(&state, move |service| {
      service.analyze(&params.engine, &params.lang, &body, Some(&params.document_id))
    })
    .await
  }
  .await;

  match result {
    Ok(analysis) => {
      info!(word_count = analysis.words.len(), "document analysis complete");
      respond(
        &state.render_env,
        ResponseEnvelope::standard(analysis),
        content_type,
        StatusCode::CREATED,
      )
    }
    Err(err) => err.into_negotiated(&state.render_env, content_type),
  }
}

/// GET|POST /morphologyservice/analysis/text
///
/// Requires exactly one of `text`/`text_uri` and a plain-text mime
/// type; the engine defaults to the configured one.
pub async fn analyze_text(
  State(state): State<AppState>,
  Query(params): Query<TextParams>,
  headers: HeaderMap,
) -> Response {
  let content_type = negotiated(&headers);

  let result = run_text_analysis(&state, params).await;

  match result {
    Ok(analysis) => {
      info!(word_count = analysis.words.len(), "text analysis complete");
      respond(
        &state.render_env,
        ResponseEnvelope::standard(analysis),
        content_type,
        StatusCode::CREATED,
      )
    }
    Err(err) => err.into_negotiated(&state.render_env, content_type),
  }
}

async fn run_text_analysis(state: &AppState, params: TextParams) -> Result<Analysis, ApiError> {
  if params.mime_type != PLAIN_TEXT_MIME {
    return Err(ApiError::from(SarfError::UnsupportedMimeType {
      mime: params.mime_type,
    }));
  }

  let engine = params.engine.unwrap_or_else(|| state.config.default_engine.clone());

  let (text, target_uri) = match (params.text, params.text_uri) {
    (Some(text), None) => (text, None),
    (None, Some(uri)) => {
      let body = state.fetcher.fetch(&uri).await?;
      (body, Some(uri))
    }
    _ => return Err(ApiError::from(SarfError::AmbiguousOrMissingInput)),
  };

  let lang = params.lang;
  run_analysis(state, move |service| {
    service.analyze(&engine, &lang, &text, target_uri.as_deref())
  })
  .await
}

/// GET /alpheiosservice/{engine}
///
/// Legacy single-endpoint path: flat Alpheios XML, status 200,
/// regardless of the Accept header.
pub async fn legacy_word(
  State(state): State<AppState>,
  Path(engine): Path<String>,
  Query(params): Query<LegacyParams>,
) -> Response {
  debug!(word = %params.word, engine = %engine, "legacy analysis request");

  let lang = crate::config::SUPPORTED_LANGUAGE.to_string();
  let result = run_analysis(&state, move |service| {
    service.analyze(&engine, &lang, &params.word, None)
  })
  .await;

  match result {
    Ok(analysis) => respond(
      &state.render_env,
      ResponseEnvelope::legacy(analysis),
      ContentType::Xml,
      StatusCode::OK,
    ),
    Err(err) => err.into_negotiated(&state.render_env, ContentType::Xml),
  }
}

/// GET /morphologyservice/engine
pub async fn engine_list(State(state): State<AppState>) -> Response {
  match engine_list_xml(&state.analysis.engine_names()) {
    Ok(body) => xml_response(StatusCode::OK, body),
    Err(err) => err.into_response(),
  }
}

/// GET /morphologyservice/engine/{id}
pub async fn engine_descriptor(
  State(state): State<AppState>,
  Path(id): Path<String>,
) -> Response {
  if !state.analysis.engine_names().contains(&id) {
    return ApiError::from(SarfError::UnknownEngine { name: id })
      .into_negotiated(&state.render_env, ContentType::Xml);
  }

  match engine_list_xml(std::slice::from_ref(&id)) {
    Ok(body) => xml_response(StatusCode::OK, body),
    Err(err) => err.into_response(),
  }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
  "OK"
}

/// Negotiates the response content type from the Accept header
fn negotiated(headers: &HeaderMap) -> ContentType {
  ContentType::from_accept(headers.get(header::ACCEPT).and_then(|value| value.to_str().ok()))
}

/// Runs the blocking analysis pipeline off the async runtime
///
/// The engine adapter may shell out to a sidecar; spawn_blocking keeps
/// that off the event loop, following the same pattern as the rest of
/// the handlers' service calls.
async fn run_analysis<F>(state: &AppState, run: F) -> Result<Analysis, ApiError>
where
  F: FnOnce(&dyn crate::service::AnalysisService) -> sarf::errors::SarfResult<Analysis>
    + Send
    + 'static,
{
  let service = state.analysis.clone();

  let result = tokio::task::spawn_blocking(move || run(service.as_ref())).await.map_err(|e| {
    error!(error = %e, "spawn_blocking error");
    ApiError::internal("failed to execute analysis task")
  })?;

  result.map_err(ApiError::from)
}

/// Renders an envelope and wraps it in an HTTP response
fn respond(
  env: &RenderEnv,
  envelope: ResponseEnvelope,
  content_type: ContentType,
  status: StatusCode,
) -> Response {
  match render(&envelope, content_type, env) {
    Ok(rendered) => (
      status,
      [(header::CONTENT_TYPE, rendered.content_type)],
      rendered.body,
    )
      .into_response(),
    Err(err) => {
      error!(error = %err, "response rendering failed");
      ApiError::from(err).into_response()
    }
  }
}

fn xml_response(status: StatusCode, body: Vec<u8>) -> Response {
  (status, [(header::CONTENT_TYPE, ContentType::Xml.mime())], body).into_response()
}
