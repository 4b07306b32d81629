mod keyboard_vm;
mod markdown_vm;
mod phase_vm;
mod progress_vm;
mod roadmap_vm;
mod strings;

pub use keyboard_vm::{KeyCommand, MAX_KEYBOARD_PHASE, key_command};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use phase_vm::{
    CardEffects, FilterButtonVm, ItemVm, NavButtonVm, PhaseCardVm, map_filter_buttons,
    map_nav_buttons, map_phase_cards,
};
pub use progress_vm::{BarTransition, ProgressVm, map_progress};
pub use roadmap_vm::{RoadmapIntent, RoadmapVm, start_roadmap};
pub use strings::{UiText, framework_count_label};
