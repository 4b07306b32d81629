use std::fmt;

/// View filter over phases. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterSelection {
    #[default]
    All,
    Python,
    Rust,
    Frameworks,
}

impl FilterSelection {
    pub const ALL: [FilterSelection; 4] = [
        FilterSelection::All,
        FilterSelection::Python,
        FilterSelection::Rust,
        FilterSelection::Frameworks,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FilterSelection::All => "all",
            FilterSelection::Python => "python",
            FilterSelection::Rust => "rust",
            FilterSelection::Frameworks => "frameworks",
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
