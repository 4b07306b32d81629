#![forbid(unsafe_code)]

pub mod error;
pub mod tracking;

pub use error::TrackerError;
pub use tracking::{CheckOutcome, ProgressService, ResetOutcome, Tracker};
