//! API configuration constants

/// Default bind address
///
/// Localhost port for development use.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5560";

/// Default service name
///
/// Woven into annotation identifiers (`urn:<service>:…`) and creator
/// references (`org.<service>:tools.…`).
pub const DEFAULT_SERVICE_NAME: &str = "sarf";

/// Default engine for the text endpoint when the caller names none
pub const DEFAULT_ENGINE: &str = "hazm";

/// Default hazm sidecar command line
///
/// The adapter writes the input text to the command's stdin and reads
/// one TAB-separated `surface stem lemma tag` line per token.
pub const DEFAULT_HAZM_CMD: &str = "hazm-cli analyze";

/// The only language this deployment serves
pub const SUPPORTED_LANGUAGE: &str = "per";

/// The only mime type the text endpoint accepts
pub const PLAIN_TEXT_MIME: &str = "text/plain";
