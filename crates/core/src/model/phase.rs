use serde::{Deserialize, Serialize};

use crate::model::{ItemId, PhaseId};

/// Language tag declared on a phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Rust,
    Both,
    #[default]
    #[serde(other)]
    Other,
}

impl Language {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Rust => "rust",
            Language::Both => "both",
            Language::Other => "other",
        }
    }
}

/// A single checkable task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Item {
    #[must_use]
    pub fn new(id: ItemId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, markdown: impl Into<String>) -> Self {
        self.description = Some(markdown.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Markdown description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A top-level roadmap section grouping related items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    id: PhaseId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    #[serde(default)]
    language: Language,
    #[serde(default, alias = "isFramework")]
    is_framework: bool,
    #[serde(default)]
    items: Vec<Item>,
}

impl Phase {
    #[must_use]
    pub fn new(id: PhaseId, title: impl Into<String>, language: Language) -> Self {
        Self {
            id,
            title: title.into(),
            summary: None,
            language,
            is_framework: false,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn framework(mut self, is_framework: bool) -> Self {
        self.is_framework = is_framework;
        self
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    #[must_use]
    pub fn id(&self) -> PhaseId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn is_framework(&self) -> bool {
        self.is_framework
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
