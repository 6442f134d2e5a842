//! CloudVision analysis engine
//!
//! Pure derivation of weather metrics from land-cover segmentation
//! output: the AI nowcast, live-condition interpretation, fusion of the
//! two signals into a single insight, report assembly and export, and
//! the chat context sent alongside user questions.
//!
//! Every operation is a synchronous, total function over immutable
//! snapshots. Missing upstream data is modeled with `Option`, never
//! with errors; the external inference, weather and language-model
//! calls that produce the inputs are the embedding application's
//! concern.

pub mod error;
pub mod services;
pub mod session;

pub use error::{EngineError, EngineResult};
pub use session::AnalysisSession;
