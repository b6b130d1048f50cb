// src/health/mod.rs
mod checker;
mod document;
mod evaluator;
mod status;

pub use checker::{FetchError, Fetcher, HttpFetcher};
pub use document::{HealthDocument, HealthValue};
pub use evaluator::{decode, evaluate, inspect, EvaluationError};
pub use status::{CheckState, Verdict};
