//! Timings of the cosmetic effects. None of these affect tracker state.

use std::time::Duration;

/// Celebration overlay lifetime.
pub const CELEBRATION_DURATION: Duration = Duration::from_secs(1);

/// How long the slow progress-bar transition stays in place after a reset.
pub const RESET_TRANSITION_DURATION: Duration = Duration::from_secs(1);

/// Highlight on a phase card after scrolling to it.
pub const SCROLL_HIGHLIGHT_DURATION: Duration = Duration::from_secs(2);

/// Per-item delay of the cascading reveal when a phase is toggled.
pub const ITEM_REVEAL_STAGGER: Duration = Duration::from_millis(50);

/// Scale pulse on a freshly checked item.
pub const CHECK_PULSE_DURATION: Duration = Duration::from_millis(200);

/// Entrance animation delay between consecutive phase cards.
pub const CARD_ENTRANCE_STAGGER: Duration = Duration::from_millis(100);

/// Entrance animation delay for the card at `index`, in seconds.
#[must_use]
pub fn card_entrance_delay_secs(index: usize) -> f64 {
    CARD_ENTRANCE_STAGGER.as_secs_f64() * index as f64
}
