//! User preference enums.

use serde::{Deserialize, Serialize};

use super::parse::ParseError;

/// Preferred interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Spanish,
    English,
    French,
}

impl Language {
    /// The language's name in itself ("Español", "English", "Français").
    #[must_use]
    pub const fn native_name(&self) -> &'static str {
        match self {
            Self::Spanish => "Español",
            Self::English => "English",
            Self::French => "Français",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.native_name())
    }
}

impl std::str::FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spanish" | "español" | "espanol" | "es" => Ok(Self::Spanish),
            "english" | "en" => Ok(Self::English),
            "french" | "français" | "francais" | "fr" => Ok(Self::French),
            _ => Err(ParseError::new("language", s)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_forms() {
        assert_eq!("Español".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert_eq!("francais".parse::<Language>().unwrap(), Language::French);
    }

    #[test]
    fn test_parse_language_rejects_unknown() {
        let err = "german".parse::<Language>().unwrap_err();
        assert_eq!(err.to_string(), "invalid language: german");
    }

    #[test]
    fn test_default_is_spanish() {
        assert_eq!(Language::default(), Language::Spanish);
    }
}
