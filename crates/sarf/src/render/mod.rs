//! Annotation encoders and content negotiation
//!
//! Three independent renderers consume the analysis model: the flat
//! legacy Alpheios schema, the Open Annotation XML schema, and its JSON
//! mirror. All are pure over the model; the two non-deterministic
//! inputs (render timestamp, body ids) are injected through `RenderEnv`
//! so tests can pin them.

mod legacy;
mod negotiate;
mod oa_json;
mod oa_xml;

pub use negotiate::{ContentType, Encoder, Rendered, render, select_encoder};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

/// Render-time clock
pub trait Clock: Send + Sync {
  /// Current wall-clock time in UTC
  fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}

/// Clock pinned to a single instant, for reproducible encoder output
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
  /// Clock pinned to the unix epoch
  #[must_use]
  pub fn epoch() -> Self {
    Self(Utc.timestamp_opt(0, 0).single().unwrap_or_default())
  }
}

impl Clock for FixedClock {
  fn now(&self) -> DateTime<Utc> {
    self.0
  }
}

/// Source of globally unique body identifiers
///
/// Process-wide and thread-safe; ids are never cached or reused across
/// requests.
pub trait IdSource: Send + Sync {
  /// A fresh unique URN, distinct from every previous one
  fn next_urn(&self) -> String;
}

/// Production id source emitting version-1 UUID URNs
#[derive(Debug, Clone, Copy)]
pub struct UuidSource {
  node_id: [u8; 6],
}

impl UuidSource {
  /// Creates a source with a per-process node id
  #[must_use]
  pub fn new() -> Self {
    let pid = std::process::id().to_be_bytes();
    let nanos = SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .unwrap_or_default()
      .subsec_nanos()
      .to_be_bytes();
    Self {
      node_id: [pid[0], pid[1], pid[2], pid[3], nanos[2], nanos[3]],
    }
  }
}

impl Default for UuidSource {
  fn default() -> Self {
    Self::new()
  }
}

impl IdSource for UuidSource {
  fn next_urn(&self) -> String {
    format!("urn:uuid:{}", Uuid::now_v1(&self.node_id))
  }
}

/// Deterministic id sequence for tests: `urn:body:1`, `urn:body:2`, …
#[derive(Debug, Default)]
pub struct SequentialIds {
  counter: AtomicU64,
}

impl SequentialIds {
  /// Creates a sequence starting at 1
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }
}

impl IdSource for SequentialIds {
  fn next_urn(&self) -> String {
    let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
    format!("urn:body:{n}")
  }
}

/// Everything an encoder needs besides the analysis itself
#[derive(Clone)]
pub struct RenderEnv {
  /// Service name woven into annotation and creator identifiers
  pub service: String,
  /// Render-time clock
  pub clock: Arc<dyn Clock>,
  /// Body id source
  pub ids: Arc<dyn IdSource>,
}

impl RenderEnv {
  /// Production environment: system clock, v1 UUID ids
  #[must_use]
  pub fn new(service: impl Into<String>) -> Self {
    Self {
      service: service.into(),
      clock: Arc::new(SystemClock),
      ids: Arc::new(UuidSource::new()),
    }
  }

  /// Reproducible environment: fixed clock, sequential ids
  #[must_use]
  pub fn fixed(service: impl Into<String>, instant: DateTime<Utc>) -> Self {
    Self {
      service: service.into(),
      clock: Arc::new(FixedClock(instant)),
      ids: Arc::new(SequentialIds::new()),
    }
  }
}
