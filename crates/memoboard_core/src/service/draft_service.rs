//! Markdown editor draft service.
//!
//! # Responsibility
//! - Load and save the single long-form editor draft.
//! - Derive a plain-text preview projection from markdown source.
//!
//! # Invariants
//! - A board with no saved draft reads back `DEFAULT_DRAFT`.
//! - Saving always refreshes `updated_at`.

use crate::model::draft::{EditorDraft, DEFAULT_DRAFT};
use crate::repo::kv_repo::{KeyValueStore, RepoError, RepoResult};
use crate::repo::memo_repo::MemoRepository;
use chrono::{DateTime, Utc};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

const PREVIEW_MAX_CHARS: usize = 100;

static MARKDOWN_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\(([^)]+)\)").expect("valid image regex"));
static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\*_`#>~\-\[\]\(\)!]+"#).expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Plain-text projection of a markdown draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftPreview {
    /// Markup-free summary, at most 100 chars.
    pub text: Option<String>,
    /// First markdown image path.
    pub image: Option<String>,
    /// Whitespace-separated words after markup removal.
    pub word_count: usize,
}

pub struct DraftService<S: KeyValueStore> {
    repo: MemoRepository<S>,
}

impl<S: KeyValueStore> DraftService<S> {
    pub fn new(repo: MemoRepository<S>) -> Self {
        Self { repo }
    }

    /// Returns the saved draft, or the default draft when none exists or the
    /// stored one cannot be decoded.
    pub fn load(&self) -> RepoResult<EditorDraft> {
        match self.repo.load_draft() {
            Ok(Some(draft)) => Ok(draft),
            Ok(None) => Ok(default_draft()),
            Err(RepoError::InvalidData { key, message }) => {
                warn!(
                    "event=draft_load module=service status=fallback key={} error={}",
                    key, message
                );
                Ok(default_draft())
            }
            Err(err) => Err(err),
        }
    }

    /// Saves `content` as the draft, stamped with the current time.
    pub fn save(&self, content: impl Into<String>) -> RepoResult<EditorDraft> {
        self.save_at(content, Utc::now())
    }

    pub fn save_at(
        &self,
        content: impl Into<String>,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<EditorDraft> {
        let draft = EditorDraft::new(content, updated_at);
        self.repo.save_draft(&draft)?;
        info!(
            "event=draft_save module=service status=ok chars={}",
            draft.content.chars().count()
        );
        Ok(draft)
    }

    /// Preview of the current draft.
    pub fn preview(&self) -> RepoResult<DraftPreview> {
        Ok(derive_markdown_preview(&self.load()?.content))
    }
}

fn default_draft() -> EditorDraft {
    EditorDraft::new(DEFAULT_DRAFT, DateTime::<Utc>::default())
}

/// Derives preview fields from markdown content.
///
/// - `image`: first markdown image path.
/// - `text`: images dropped, links reduced to their label, markup symbols
///   removed, whitespace collapsed, first 100 chars kept.
pub fn derive_markdown_preview(content: &str) -> DraftPreview {
    let image = MARKDOWN_IMAGE_RE
        .captures(content)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .filter(|value| !value.is_empty());

    let without_images = MARKDOWN_IMAGE_RE.replace_all(content, " ");
    let without_links = MARKDOWN_LINK_RE.replace_all(&without_images, "$1");
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(&without_links, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let plain = normalized.trim();

    DraftPreview {
        text: (!plain.is_empty()).then(|| plain.chars().take(PREVIEW_MAX_CHARS).collect()),
        image,
        word_count: plain.split_whitespace().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::derive_markdown_preview;

    #[test]
    fn preview_strips_headings_and_counts_words() {
        let preview = derive_markdown_preview(
            "## Typora-style draft\n\nWrite in **Markdown** now. See [docs](https://x.dev).",
        );
        let text = preview.text.expect("text should exist");
        assert!(text.starts_with("Typora style draft"));
        assert!(text.contains("docs"));
        assert!(!text.contains("https"));
        assert_eq!(preview.word_count, 9);
    }

    #[test]
    fn preview_extracts_first_image_and_caps_length() {
        let long = "word ".repeat(60);
        let preview = derive_markdown_preview(&format!("![a](one.png) ![b](two.png) {long}"));
        assert_eq!(preview.image.as_deref(), Some("one.png"));
        assert_eq!(preview.text.unwrap().chars().count(), 100);
    }

    #[test]
    fn preview_of_markup_only_has_no_text() {
        let preview = derive_markdown_preview("# **");
        assert_eq!(preview.text, None);
        assert_eq!(preview.word_count, 0);
    }
}
