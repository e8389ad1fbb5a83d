//! prosa-api crate
//!
//! Authenticated HTTP API over the prosa document analyzer.
//!
//! ## Endpoints
//! - `GET /health` - Health check (no credential)
//! - `POST /tokens` - Tokens with POS tag and IOB entity label
//! - `POST /entities` - Named entities
//! - `POST /sentences` - Sentences
//!
//! Every endpoint except `/health` requires the `X-API-Key` header.
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8080/entities \
//!   -H "X-API-Key: $API_KEY" \
//!   -d '{"text": "Ian is Dutch. He lives in Utrecht."}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalysisRequest, EntityDto, HealthStatus, SentenceDto, TokenDto};
pub use service::AnalysisService;
