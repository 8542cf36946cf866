//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, DEFAULT_ENGINE, DEFAULT_HAZM_CMD, DEFAULT_SERVICE_NAME, PLAIN_TEXT_MIME,
  SUPPORTED_LANGUAGE,
};
pub use env::Config;
