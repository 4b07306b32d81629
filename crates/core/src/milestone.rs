/// Completed-item interval that triggers a celebration.
pub const MILESTONE_INTERVAL: usize = 10;

/// True when a mutation moved the completed count onto a positive multiple
/// of [`MILESTONE_INTERVAL`]. Mutations that leave the count unchanged never
/// celebrate.
#[must_use]
pub fn is_milestone(previous_completed: usize, completed: usize) -> bool {
    completed != previous_completed && completed > 0 && completed % MILESTONE_INTERVAL == 0
}
