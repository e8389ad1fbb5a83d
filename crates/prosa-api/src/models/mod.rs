//! Model module

mod request;
mod response;

pub use request::AnalysisRequest;
pub use response::{EntityDto, HealthStatus, SentenceDto, TokenDto, encode_json};
