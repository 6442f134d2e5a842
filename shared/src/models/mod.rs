//! Domain models for the CloudVision analysis platform

mod chat;
mod nowcast;
mod report;
mod segmentation;
mod weather;

pub use chat::*;
pub use nowcast::*;
pub use report::*;
pub use segmentation::*;
pub use weather::*;
