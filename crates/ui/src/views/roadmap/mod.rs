mod components;
mod scripts;
mod view;

pub use view::RoadmapView;

#[cfg(test)]
pub(crate) use view::RoadmapTestHandles;
