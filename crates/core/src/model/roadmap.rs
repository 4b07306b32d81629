use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Item, ItemId, Phase, PhaseId};

const BUILTIN_ROADMAP: &str = include_str!("../../assets/roadmap.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RoadmapError {
    #[error("roadmap must declare at least one phase")]
    NoPhases,
    #[error("duplicate phase id {0}")]
    DuplicatePhase(PhaseId),
    #[error("duplicate item id {0}")]
    DuplicateItem(ItemId),
    #[error("roadmap title cannot be empty")]
    EmptyTitle,
    #[error("invalid roadmap document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Unvalidated roadmap as declared in a document.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RoadmapDraft {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Markdown shown in the comparison dialog.
    #[serde(default)]
    pub comparison: Option<String>,
    #[serde(default)]
    pub phases: Vec<Phase>,
}

impl RoadmapDraft {
    /// Validate the declared structure.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError` when the title is blank, no phases are declared,
    /// or a phase/item id is declared twice.
    pub fn validate(self) -> Result<Roadmap, RoadmapError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(RoadmapError::EmptyTitle);
        }
        if self.phases.is_empty() {
            return Err(RoadmapError::NoPhases);
        }

        let mut phase_ids = HashSet::new();
        let mut item_ids = HashSet::new();
        for phase in &self.phases {
            if !phase_ids.insert(phase.id()) {
                return Err(RoadmapError::DuplicatePhase(phase.id()));
            }
            for item in phase.items() {
                if !item_ids.insert(item.id().clone()) {
                    return Err(RoadmapError::DuplicateItem(item.id().clone()));
                }
            }
        }

        Ok(Roadmap {
            title,
            subtitle: normalize_optional(self.subtitle),
            comparison: normalize_optional(self.comparison),
            phases: self.phases,
        })
    }
}

/// The static page structure: a fixed, validated set of phases and items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roadmap {
    title: String,
    subtitle: Option<String>,
    comparison: Option<String>,
    phases: Vec<Phase>,
}

impl Roadmap {
    /// Parse and validate a JSON roadmap document.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::Json` for malformed documents and the
    /// validation errors of [`RoadmapDraft::validate`].
    pub fn from_json(input: &str) -> Result<Self, RoadmapError> {
        let draft: RoadmapDraft = serde_json::from_str(input)?;
        draft.validate()
    }

    /// The roadmap embedded in the binary.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded document is broken.
    pub fn builtin() -> Result<Self, RoadmapError> {
        Self::from_json(BUILTIN_ROADMAP)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn comparison(&self) -> Option<&str> {
        self.comparison.as_deref()
    }

    /// Phases in declared order.
    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    #[must_use]
    pub fn phase(&self, id: PhaseId) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.id() == id)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.phases.iter().flat_map(|phase| phase.items().iter())
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.phases.iter().map(|phase| phase.items().len()).sum()
    }

    /// Items whose id carries the framework prefix.
    pub fn framework_items(&self) -> impl Iterator<Item = &Item> {
        self.items().filter(|item| item.id().is_framework())
    }

    #[must_use]
    pub fn contains_item(&self, id: &ItemId) -> bool {
        self.items().any(|item| item.id() == id)
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
