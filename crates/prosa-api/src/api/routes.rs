//! Router definition

use std::any::Any;

use axum::{
  Router,
  extract::DefaultBodyLimit,
  middleware,
  response::{IntoResponse, Response},
  routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::auth::require_api_key;
use super::handlers::{health_check, not_found, post_entities, post_sentences, post_tokens};
use super::state::AppState;
use crate::errors::ApiError;

/// Creates the API router
///
/// Layer order, outermost first: tracing, panic recovery, body limit, API key
/// gate, routes. The gate also covers the fallback, so unknown paths answer
/// 401 before 404.
pub fn create_router(state: AppState) -> Router {
  let routes = Router::new()
    .route("/health", get(health_check))
    .route("/tokens", post(post_tokens))
    .route("/entities", post(post_entities))
    .route("/sentences", post(post_sentences))
    .fallback(not_found);

  with_layers(routes, state)
}

/// Wraps `routes` in the middleware stack shared by every endpoint
fn with_layers(routes: Router<AppState>, state: AppState) -> Router {
  let max_body_bytes = state.config.max_body_bytes;

  routes
    .layer(middleware::from_fn_with_state(state.clone(), require_api_key))
    .layer(DefaultBodyLimit::max(max_body_bytes))
    .layer(CatchPanicLayer::custom(panic_response))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Answers a panicking handler with the usual JSON error body
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
  let detail = if let Some(message) = panic.downcast_ref::<&str>() {
    (*message).to_string()
  } else if let Some(message) = panic.downcast_ref::<String>() {
    message.clone()
  } else {
    "non-string panic payload".to_string()
  };
  tracing::error!(panic = %detail, "request handler panicked");

  ApiError::internal("request handler panicked").into_response()
}

/// Starts the server and serves until Ctrl-C or SIGTERM
///
/// # Errors
/// Returns an error if the listener cannot be bound or the server fails
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("failed to bind {addr}: {e}")))?;

  tracing::info!("listening on http://{}", addr);

  axum::serve(listener, create_router(state))
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| ApiError::internal(format!("server error: {e}")))?;

  tracing::info!("server stopped");
  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "failed to listen for Ctrl-C");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut signal) => {
        signal.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to listen for SIGTERM");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }

  tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use prosa::{AnalyzerResult, Document, DocumentAnalyzer, DocumentOptions};
  use tower::ServiceExt;

  use super::*;
  use crate::config::Config;

  /// Analyzer that is never expected to run
  struct DummyAnalyzer;

  impl DocumentAnalyzer for DummyAnalyzer {
    fn analyze(&self, _text: &str, _options: DocumentOptions) -> AnalyzerResult<Document> {
      Ok(Document::default())
    }
  }

  fn create_test_state() -> AppState {
    let config = Config::from_lookup(|key| (key == "API_KEY").then(|| "k".to_string())).unwrap();
    AppState::new(config, Arc::new(DummyAnalyzer))
  }

  async fn exploding_handler() -> &'static str {
    panic!("handler bug")
  }

  async fn error_body(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
  }

  #[test]
  fn test_router_creation() {
    let _router = create_router(create_test_state());
  }

  #[tokio::test]
  async fn handler_panic_becomes_json_500() {
    let routes = Router::new().route("/explode", get(exploding_handler));
    let app = with_layers(routes, create_test_state());

    let request =
      Request::builder().uri("/explode").header("x-api-key", "k").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = error_body(response.into_response()).await;
    assert_eq!(json["error"]["code"], "internal_error");
  }

  #[tokio::test]
  async fn panic_payloads_of_any_type_are_answered() {
    for payload in [
      Box::new("static message") as Box<dyn Any + Send>,
      Box::new(String::from("owned message")),
      Box::new(42_u32),
    ] {
      let response = panic_response(payload);
      assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
      let json = error_body(response).await;
      assert_eq!(json["error"]["message"], "internal error: request handler panicked");
    }
  }
}
