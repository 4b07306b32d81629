use roadmap_core::ItemChange;
use roadmap_core::progress::{FrameworkProgress, ProgressDisplay};

/// Everything the UI needs to re-render after an item was (un)checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub change: ItemChange,
    pub display: ProgressDisplay,
    pub frameworks: FrameworkProgress,
    /// The running total just landed on a milestone.
    pub celebrate: bool,
}

impl CheckOutcome {
    #[must_use]
    pub fn is_changed(&self) -> bool {
        matches!(self.change, ItemChange::Changed { .. })
    }
}

/// Progress after a confirmed reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetOutcome {
    pub cleared: usize,
    pub display: ProgressDisplay,
    pub frameworks: FrameworkProgress,
}
