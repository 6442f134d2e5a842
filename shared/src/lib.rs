//! Shared types and models for the CloudVision analysis platform
//!
//! This crate contains types shared between the analysis engine, the
//! browser front-end (via WASM), and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
