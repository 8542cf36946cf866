//! Config loading from environment variables

use super::constants::{
  DEFAULT_BIND_ADDR, DEFAULT_ENGINE, DEFAULT_HAZM_CMD, DEFAULT_SERVICE_NAME,
};
use crate::errors::ApiError;

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5560")
  pub bind_addr: String,
  /// Service name used in annotation identifiers
  pub service_name: String,
  /// Engine used by the text endpoint when the caller names none
  pub default_engine: String,
  /// hazm sidecar command line, program first
  pub hazm_cmd: Vec<String>,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if a set variable holds an unusable value.
  pub fn from_env() -> crate::errors::Result<Self> {
    let bind_addr =
      std::env::var("SARF_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let service_name =
      std::env::var("SARF_SERVICE_NAME").unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string());

    let default_engine =
      std::env::var("SARF_DEFAULT_ENGINE").unwrap_or_else(|_| DEFAULT_ENGINE.to_string());

    let hazm_cmd_str =
      std::env::var("SARF_HAZM_CMD").unwrap_or_else(|_| DEFAULT_HAZM_CMD.to_string());
    let hazm_cmd = Self::parse_command(&hazm_cmd_str)?;

    Ok(Self {
      bind_addr,
      service_name,
      default_engine,
      hazm_cmd,
    })
  }

  /// Splits a command line into program and arguments
  ///
  /// # Errors
  /// Returns a config error when the command line is empty.
  pub fn parse_command(command: &str) -> crate::errors::Result<Vec<String>> {
    let parts: Vec<String> = command.split_whitespace().map(String::from).collect();
    if parts.is_empty() {
      return Err(ApiError::config("engine command line must not be empty"));
    }
    Ok(parts)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_command_splits_program_and_args() {
    let parts = Config::parse_command("hazm-cli analyze --tagged").unwrap();
    assert_eq!(parts, vec!["hazm-cli", "analyze", "--tagged"]);
  }

  #[test]
  fn parse_command_rejects_empty() {
    assert!(Config::parse_command("").is_err());
    assert!(Config::parse_command("   ").is_err());
  }

  #[test]
  fn config_from_env_defaults() {
    // Note: remove_var became unsafe in Rust 2024, so this test assumes
    // the SARF_* variables are not set and only checks for usable values.
    let config = Config::from_env().unwrap();
    assert!(!config.bind_addr.is_empty());
    assert!(!config.service_name.is_empty());
    assert!(!config.hazm_cmd.is_empty());
  }
}
