use roadmap_core::Locale;
use roadmap_core::progress::{FrameworkProgress, ProgressDisplay};

use crate::vm::strings::framework_count_label;

/// Width transition of the progress bar. `Slow` is used briefly after a reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarTransition {
    #[default]
    Normal,
    Slow,
}

impl BarTransition {
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            BarTransition::Normal => "width 0.5s cubic-bezier(0.4, 0, 0.2, 1)",
            BarTransition::Slow => "width 1s ease-out",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub percentage_label: String,
    pub completed: usize,
    pub total: usize,
    pub fill_style: String,
    pub framework_label: String,
}

#[must_use]
pub fn map_progress(
    display: ProgressDisplay,
    frameworks: FrameworkProgress,
    transition: BarTransition,
    locale: Locale,
) -> ProgressVm {
    ProgressVm {
        percentage_label: format!("{}%", display.percentage),
        completed: display.completed,
        total: display.total,
        fill_style: format!(
            "width: {}%; transition: {};",
            display.percentage,
            transition.css()
        ),
        framework_label: framework_count_label(locale, frameworks),
    }
}
