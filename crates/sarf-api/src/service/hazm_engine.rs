//! hazm sidecar engine adapter
//!
//! The linguistic pipeline itself lives outside this service. This
//! adapter hands the input text to a configured sidecar command on
//! stdin and reads one TAB-separated `surface stem lemma tag` line per
//! token from stdout. The adapter holds no mutable state, so it is
//! safely callable from concurrent requests.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use sarf::engine::{MorphologyEngine, TokenAnalysis};
use sarf::errors::{SarfError, SarfResult};

/// Engine adapter for the hazm sidecar process
#[derive(Debug, Clone)]
pub struct HazmProcessEngine {
  command: Vec<String>,
}

impl HazmProcessEngine {
  /// Creates an adapter around the given command line, program first
  #[must_use]
  pub fn new(command: Vec<String>) -> Self {
    Self { command }
  }

  fn run_sidecar(&self, text: &str) -> SarfResult<String> {
    let (program, args) = self
      .command
      .split_first()
      .ok_or_else(|| SarfError::EngineFailure("empty engine command line".to_string()))?;

    let mut child = Command::new(program)
      .args(args)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .spawn()
      .map_err(|e| SarfError::EngineFailure(format!("failed to spawn {program}: {e}")))?;

    // The writer runs on its own thread so stdout keeps draining; with
    // a single thread an engine that streams output line-by-line would
    // deadlock once the input outgrows the pipe buffer.
    let mut stdin = child
      .stdin
      .take()
      .ok_or_else(|| SarfError::EngineFailure("engine stdin unavailable".to_string()))?;
    let input = text.as_bytes().to_vec();
    let writer = std::thread::spawn(move || stdin.write_all(&input));

    let output = child
      .wait_with_output()
      .map_err(|e| SarfError::EngineFailure(format!("engine did not finish: {e}")))?;

    writer
      .join()
      .map_err(|_| SarfError::EngineFailure("engine input writer panicked".to_string()))?
      .map_err(|e| SarfError::EngineFailure(format!("failed to write input: {e}")))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(SarfError::EngineFailure(format!(
        "engine exited with {}: {}",
        output.status,
        stderr.trim()
      )));
    }

    String::from_utf8(output.stdout)
      .map_err(|e| SarfError::EngineFailure(format!("engine emitted invalid UTF-8: {e}")))
  }

  /// Parses the sidecar's TSV output
  ///
  /// One line per token: `surface<TAB>stem<TAB>lemma<TAB>tag`. Blank
  /// lines are skipped; anything else malformed is an engine failure.
  fn parse_output(output: &str) -> SarfResult<Vec<TokenAnalysis>> {
    let mut tokens = Vec::new();

    for line in output.lines() {
      if line.trim().is_empty() {
        continue;
      }
      let fields: Vec<&str> = line.split('\t').collect();
      let [surface, stem, lemma, tag] = fields.as_slice() else {
        return Err(SarfError::EngineFailure(format!(
          "malformed engine output line (expected 4 TAB-separated fields): {line:?}"
        )));
      };
      tokens.push(TokenAnalysis {
        surface: (*surface).to_string(),
        stem: (*stem).to_string(),
        lemma: (*lemma).to_string(),
        tag: (*tag).to_string(),
      });
    }

    Ok(tokens)
  }
}

impl MorphologyEngine for HazmProcessEngine {
  fn name(&self) -> &str {
    "hazm"
  }

  fn analyze(&self, text: &str) -> SarfResult<Vec<TokenAnalysis>> {
    let output = self.run_sidecar(text)?;
    let tokens = Self::parse_output(&output)?;
    debug!(token_count = tokens.len(), "engine run complete");
    Ok(tokens)
  }
}
