//! API module

mod capabilities;
mod handlers;
mod routes;
mod state;

pub use handlers::{
  analyze_document, analyze_text, analyze_word, engine_descriptor, engine_list, health_check,
  legacy_word,
};
pub use routes::{create_router, run_server};
pub use state::AppState;
