/// Gap left between the sticky header/nav bar and a phase card after scrolling.
pub const SCROLL_MARGIN_PX: f64 = 20.0;

/// Measurements taken from the rendered page before scrolling to a phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Deserialize)]
pub struct ScrollMetrics {
    pub card_top: f64,
    pub header_height: f64,
    pub nav_height: f64,
}

impl ScrollMetrics {
    /// Vertical scroll position that places the card just under the
    /// sticky chrome.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.card_top - self.header_height - self.nav_height - SCROLL_MARGIN_PX
    }
}
