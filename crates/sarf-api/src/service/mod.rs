//! Service module

mod analysis_service;
mod fetcher;
mod hazm_engine;

pub use analysis_service::{AnalysisService, AnalysisServiceFull};
pub use fetcher::{DocumentFetcher, HttpFetcher};
pub use hazm_engine::HazmProcessEngine;
