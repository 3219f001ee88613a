//! Memo domain model.
//!
//! # Responsibility
//! - Define the canonical memo record persisted under the memo storage key.
//! - Provide tag input parsing shared by capture and inline-edit flows.
//!
//! # Invariants
//! - `id` is unique within one board collection.
//! - `category` is one of the closed `MemoCategory` set.
//! - Tags are free-form: trimmed, non-empty, duplicates allowed, order kept.
//! - `created_at` serializes as ISO-8601 UTC with millisecond precision.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Memo identifier. Demo records use short numeric ids, captured memos use UUIDs.
pub type MemoId = String;

/// Closed set of memo categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoCategory {
    /// Plain note without ceremony.
    Note,
    /// Spark worth exploring.
    Idea,
    /// Actionable item or checklist.
    Task,
    /// Daily reflection.
    Journal,
}

impl MemoCategory {
    pub const ALL: [MemoCategory; 4] = [Self::Note, Self::Idea, Self::Task, Self::Journal];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Idea => "idea",
            Self::Task => "task",
            Self::Journal => "journal",
        }
    }

    /// Parses a category name, case-insensitively.
    pub fn parse(value: &str) -> Result<Self, MemoValidationError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "note" => Ok(Self::Note),
            "idea" => Ok(Self::Idea),
            "task" => Ok(Self::Task),
            "journal" => Ok(Self::Journal),
            other => Err(MemoValidationError::UnknownCategory(other.to_string())),
        }
    }
}

impl Display for MemoCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures for memo records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoValidationError {
    EmptyId,
    EmptyContent,
    UnknownCategory(String),
}

impl Display for MemoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "memo id cannot be empty"),
            Self::EmptyContent => write!(f, "memo content cannot be empty"),
            Self::UnknownCategory(value) => write!(
                f,
                "unknown memo category `{value}`; expected note|idea|task|journal"
            ),
        }
    }
}

impl Error for MemoValidationError {}

/// Canonical memo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    pub id: MemoId,
    pub content: String,
    pub tags: Vec<String>,
    pub category: MemoCategory,
    pub pinned: bool,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Memo {
    /// Checks record-level invariants before the memo enters a collection.
    pub fn validate(&self) -> Result<(), MemoValidationError> {
        if self.id.trim().is_empty() {
            return Err(MemoValidationError::EmptyId);
        }
        if self.content.trim().is_empty() {
            return Err(MemoValidationError::EmptyContent);
        }
        Ok(())
    }

    /// Returns whether any tag equals `tag` exactly.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|value| value == tag)
    }
}

/// Capture-form payload used to create a memo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoDraft {
    pub content: String,
    pub tags: Vec<String>,
    pub category: MemoCategory,
    pub pinned: bool,
}

impl MemoDraft {
    /// Empty note draft, the capture form's reset state.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tags: Vec::new(),
            category: MemoCategory::Note,
            pinned: false,
        }
    }

    pub fn with_tags_input(mut self, input: &str) -> Self {
        self.tags = parse_tags_input(input);
        self
    }

    pub fn with_category(mut self, category: MemoCategory) -> Self {
        self.category = category;
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }
}

/// Splits comma-separated tag input into trimmed, non-empty tags.
///
/// Order and duplicates are preserved.
pub fn parse_tags_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins tags back into the comma-separated edit form.
pub fn format_tags_input(tags: &[String]) -> String {
    tags.join(", ")
}

/// Fixed demo collection used on first run and on reset.
pub fn demo_memos() -> Vec<Memo> {
    vec![
        demo_memo(
            "1",
            "Ship v1.4 today. Keep the release note tight and highlight the frictionless capture flow.",
            &["product", "release"],
            MemoCategory::Task,
            true,
            (2024, 5, 1, 12, 0),
        ),
        demo_memo(
            "2",
            "Memo inbox should accept inline #tags and auto-link. Keeps focus on writing while staying organized.",
            &["idea", "ux"],
            MemoCategory::Idea,
            false,
            (2024, 4, 30, 10, 30),
        ),
        demo_memo(
            "3",
            "Retro: small wins stack fast. Pair programming sessions felt lighter when we started with a tiny note first.",
            &["journal", "team"],
            MemoCategory::Journal,
            false,
            (2024, 4, 29, 8, 15),
        ),
        demo_memo(
            "4",
            "Checklist: tighten meeting agendas, leave one takeaway memo, and send async summary before EOD.",
            &["note", "execution"],
            MemoCategory::Note,
            false,
            (2024, 4, 28, 6, 0),
        ),
    ]
}

fn demo_memo(
    id: &str,
    content: &str,
    tags: &[&str],
    category: MemoCategory,
    pinned: bool,
    (year, month, day, hour, minute): (i32, u32, u32, u32, u32),
) -> Memo {
    Memo {
        id: id.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        category,
        pinned,
        created_at: Utc
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .unwrap_or_default(),
    }
}

/// Serde adapter for `2024-05-01T12:00:00.000Z` style timestamps.
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|value| value.with_timezone(&Utc))
            .map_err(|err| serde::de::Error::custom(format!("invalid timestamp `{raw}`: {err}")))
    }
}
