//! API module

mod auth;
mod handlers;
mod routes;
mod state;

pub use auth::{check_credential, require_api_key};
pub use handlers::{health_check, not_found, post_entities, post_sentences, post_tokens};
pub use routes::{create_router, run_server};
pub use state::AppState;
