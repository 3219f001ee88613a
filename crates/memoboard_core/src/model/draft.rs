//! Long-form markdown draft kept by the editor surface.

use crate::model::memo::iso_millis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content shown when no draft has been saved yet.
pub const DEFAULT_DRAFT: &str =
    "## Typora-style draft\n\nWrite in Markdown. Headings, lists, and links stay clean here.";

/// The single editor draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorDraft {
    pub content: String,
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl EditorDraft {
    pub fn new(content: impl Into<String>, updated_at: DateTime<Utc>) -> Self {
        Self {
            content: content.into(),
            updated_at,
        }
    }
}
