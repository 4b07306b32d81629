mod outcome;
mod service;
mod tracker;

// Public API of the tracking subsystem.
pub use crate::error::TrackerError;
pub use outcome::{CheckOutcome, ResetOutcome};
pub use service::ProgressService;
pub use tracker::Tracker;
