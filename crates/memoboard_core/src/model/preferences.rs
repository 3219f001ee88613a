//! Board preferences: theme accent and language.
//!
//! # Invariants
//! - Unknown accent or language values never fail a load; they fall back to
//!   defaults field by field.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Theme accent preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    #[default]
    Indigo,
    Emerald,
    Violet,
    Amber,
    Rose,
}

/// Color tokens an accent contributes to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentPalette {
    pub primary: &'static str,
    pub primary_foreground: &'static str,
    pub ring: &'static str,
}

impl Accent {
    pub const ALL: [Accent; 5] = [
        Self::Indigo,
        Self::Emerald,
        Self::Violet,
        Self::Amber,
        Self::Rose,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Indigo => "indigo",
            Self::Emerald => "emerald",
            Self::Violet => "violet",
            Self::Amber => "amber",
            Self::Rose => "rose",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|accent| accent.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn palette(self) -> AccentPalette {
        match self {
            Self::Indigo => AccentPalette {
                primary: "#4f46e5",
                primary_foreground: "#f8fafc",
                ring: "#6366f1",
            },
            Self::Emerald => AccentPalette {
                primary: "#059669",
                primary_foreground: "#ecfeff",
                ring: "#10b981",
            },
            Self::Violet => AccentPalette {
                primary: "#7c3aed",
                primary_foreground: "#f5f3ff",
                ring: "#8b5cf6",
            },
            Self::Amber => AccentPalette {
                primary: "#d97706",
                primary_foreground: "#fff7ed",
                ring: "#f59e0b",
            },
            Self::Rose => AccentPalette {
                primary: "#e11d48",
                primary_foreground: "#fff1f2",
                ring: "#fb7185",
            },
        }
    }
}

impl Display for Accent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interface language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted preference object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub accent: Accent,
    pub language: Language,
}

impl Preferences {
    /// Reads preferences from a raw JSON payload, keeping defaults for any
    /// missing, unknown or malformed field.
    ///
    /// Returns `None` when the payload is not a JSON object at all.
    pub fn from_json_lenient(raw: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(raw).ok()?;
        let object = value.as_object()?;
        let mut prefs = Self::default();
        if let Some(accent) = object.get("accent").and_then(Value::as_str).and_then(Accent::parse) {
            prefs.accent = accent;
        }
        if let Some(language) = object
            .get("language")
            .and_then(Value::as_str)
            .and_then(Language::parse)
        {
            prefs.language = language;
        }
        Some(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::{Accent, Language, Preferences};

    #[test]
    fn lenient_parse_keeps_valid_fields_and_defaults_the_rest() {
        let prefs = Preferences::from_json_lenient(r#"{"accent":"teal","language":"zh"}"#)
            .expect("object payload should parse");
        assert_eq!(prefs.accent, Accent::Indigo);
        assert_eq!(prefs.language, Language::Zh);

        let partial = Preferences::from_json_lenient(r#"{"accent":"rose"}"#).unwrap();
        assert_eq!(partial.accent, Accent::Rose);
        assert_eq!(partial.language, Language::En);
    }

    #[test]
    fn lenient_parse_rejects_non_objects() {
        assert!(Preferences::from_json_lenient("{not json").is_none());
        assert!(Preferences::from_json_lenient("[1,2]").is_none());
    }

    #[test]
    fn serialized_shape_matches_storage_contract() {
        let json = serde_json::to_string(&Preferences {
            accent: Accent::Amber,
            language: Language::En,
        })
        .unwrap();
        assert_eq!(json, r#"{"accent":"amber","language":"en"}"#);
    }
}
