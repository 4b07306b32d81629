use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Language of the user-facing strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported locale: {0}")]
pub struct LocaleError(pub String);

impl Locale {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        // Accept region-qualified tags such as `ru-RU` or `en_US`.
        let lang = lower.split(['-', '_']).next().unwrap_or_default();
        match lang {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            _ => Err(LocaleError(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
