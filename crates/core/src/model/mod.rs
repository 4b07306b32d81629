mod filter;
mod ids;
mod phase;
mod roadmap;

pub use filter::FilterSelection;
pub use ids::{FRAMEWORK_ITEM_PREFIX, IdError, ItemId, PhaseId};
pub use phase::{Item, Language, Phase};
pub use roadmap::{Roadmap, RoadmapDraft, RoadmapError};
