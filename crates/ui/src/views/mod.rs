mod roadmap;
mod state;

pub use roadmap::RoadmapView;
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
pub(crate) use roadmap::RoadmapTestHandles;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
