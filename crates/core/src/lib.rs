#![forbid(unsafe_code)]

pub mod effects;
pub mod filter;
pub mod layout;
pub mod locale;
pub mod milestone;
pub mod model;
pub mod phases;
pub mod progress;
pub mod state;

pub use locale::Locale;
pub use state::{ItemChange, ProgressMap, TrackerState};
