//! sarf-api crate
//!
//! Web server exposing the sarf morphology annotation library over HTTP.
//!
//! ## Endpoints
//! - `GET|POST /morphologyservice/analysis/word` - analyze one word
//! - `GET|POST /morphologyservice/analysis/document` - analyze a remote document
//! - `GET|POST /morphologyservice/analysis/text` - analyze a literal text or text URI
//! - `GET /alpheiosservice/{engine}` - legacy Alpheios rendering, XML only
//! - `GET /morphologyservice/engine` - engine capability list
//! - `GET /morphologyservice/engine/{id}` - one engine's capabilities
//! - `GET /health` - health check
//!
//! ## Usage Example
//! ```bash
//! curl -H "Accept: application/json" \
//!   "http://127.0.0.1:5560/morphologyservice/analysis/word?lang=per&engine=hazm&word=کتابها"
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use service::{AnalysisService, AnalysisServiceFull, DocumentFetcher};
