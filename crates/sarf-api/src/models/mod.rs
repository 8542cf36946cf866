//! Model module

mod request;

pub use request::{DocumentParams, LegacyParams, TextParams, WordParams, wait_requested};
