//! Progress arithmetic.
//!
//! Two percentage variants exist on purpose: the display variant rounds to
//! the nearest integer, the reporting variant to one decimal place.

/// Integer percentage shown on the progress bar, rounded half up.
/// Returns 0 when `total` is 0.
#[must_use]
pub fn display_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    // floor(100 * c / t + 0.5) without floating point.
    let rounded = (completed * 200 + total) / (total * 2);
    u8::try_from(rounded).unwrap_or(100)
}

/// Percentage rounded to one decimal place, rounded half up.
/// Returns 0.0 when `total` is 0.
#[must_use]
pub fn report_percentage(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    let tenths = (completed * 2000 + total) / (total * 2);
    tenths as f64 / 10.0
}

/// Snapshot rendered by the progress bar and counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressDisplay {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
}

impl ProgressDisplay {
    #[must_use]
    pub fn new(completed: usize, total: usize) -> Self {
        Self {
            completed,
            total,
            percentage: display_percentage(completed, total),
        }
    }
}

/// Reporting variant of the progress snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProgressStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    pub percentage: f64,
}

impl ProgressStats {
    #[must_use]
    pub fn new(completed: usize, total: usize) -> Self {
        Self {
            total,
            completed,
            remaining: total.saturating_sub(completed),
            percentage: report_percentage(completed, total),
        }
    }
}

/// Completed framework items out of all framework items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameworkProgress {
    pub completed: usize,
    pub total: usize,
}
