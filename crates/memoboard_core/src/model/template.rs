//! Prefilled capture drafts offered by the board.

use crate::model::memo::{MemoCategory, MemoDraft};
use crate::model::preferences::Language;

/// Built-in capture template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoTemplate {
    QuickMemo,
    JournalSeed,
    TaskSeed,
}

impl MemoTemplate {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "quick" | "quick-memo" => Some(Self::QuickMemo),
            "journal" | "journal-seed" => Some(Self::JournalSeed),
            "task" | "task-seed" => Some(Self::TaskSeed),
            _ => None,
        }
    }

    /// Returns the draft this template fills into the capture form.
    pub fn draft(self, language: Language) -> MemoDraft {
        let (content, tags, category, pinned) = match (self, language) {
            (Self::QuickMemo, Language::En) => (
                "Quick note: sketch the onboarding checklist.",
                ["note", "capture"],
                MemoCategory::Note,
                false,
            ),
            (Self::QuickMemo, Language::Zh) => (
                "快速记录：草拟一份新手引导清单。",
                ["note", "capture"],
                MemoCategory::Note,
                false,
            ),
            (Self::JournalSeed, Language::En) => (
                "Today I learned: small commits keep me shipping.",
                ["journal", "learning"],
                MemoCategory::Journal,
                false,
            ),
            (Self::JournalSeed, Language::Zh) => (
                "今天学到：小步提交能帮我持续交付。",
                ["journal", "learning"],
                MemoCategory::Journal,
                false,
            ),
            (Self::TaskSeed, Language::En) => (
                "Task: close the feedback loop for the next memo drop.",
                ["task", "follow-up"],
                MemoCategory::Task,
                true,
            ),
            (Self::TaskSeed, Language::Zh) => (
                "任务：闭环本周的反馈，准备下次笔记发布。",
                ["task", "follow-up"],
                MemoCategory::Task,
                true,
            ),
        };

        MemoDraft {
            content: content.to_string(),
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
            category,
            pinned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MemoTemplate;
    use crate::model::memo::MemoCategory;
    use crate::model::preferences::Language;

    #[test]
    fn task_seed_is_pinned_task_in_every_language() {
        for language in [Language::En, Language::Zh] {
            let draft = MemoTemplate::TaskSeed.draft(language);
            assert_eq!(draft.category, MemoCategory::Task);
            assert!(draft.pinned);
            assert_eq!(draft.tags, vec!["task", "follow-up"]);
        }
    }

    #[test]
    fn parse_accepts_short_and_long_names() {
        assert_eq!(MemoTemplate::parse("quick"), Some(MemoTemplate::QuickMemo));
        assert_eq!(
            MemoTemplate::parse("Journal-Seed"),
            Some(MemoTemplate::JournalSeed)
        );
        assert_eq!(MemoTemplate::parse("other"), None);
    }
}
