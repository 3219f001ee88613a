//! Memo list filtering and ordering.
//!
//! # Responsibility
//! - Evaluate the board's predicate conjunction over an in-memory collection.
//! - Produce the list order shown to the user.
//!
//! # Invariants
//! - Predicates are independent and combined with AND.
//! - Output is ordered by `created_at` descending; equal timestamps keep
//!   their collection order.
//! - Day boundaries of a date window are computed in UTC.

use crate::model::memo::{Memo, MemoCategory};
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use std::fmt::{Display, Formatter};

/// Top-level list filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MemoFilter {
    #[default]
    All,
    Pinned,
    Tasks,
    Ideas,
    Journal,
    Notes,
}

impl MemoFilter {
    pub const ALL: [MemoFilter; 6] = [
        Self::All,
        Self::Pinned,
        Self::Tasks,
        Self::Ideas,
        Self::Journal,
        Self::Notes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pinned => "pinned",
            Self::Tasks => "tasks",
            Self::Ideas => "ideas",
            Self::Journal => "journal",
            Self::Notes => "notes",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// Category a memo must have to pass, for the category filters.
    pub fn category(self) -> Option<MemoCategory> {
        match self {
            Self::Tasks => Some(MemoCategory::Task),
            Self::Ideas => Some(MemoCategory::Idea),
            Self::Journal => Some(MemoCategory::Journal),
            Self::Notes => Some(MemoCategory::Note),
            Self::All | Self::Pinned => None,
        }
    }

    pub fn matches(self, memo: &Memo) -> bool {
        match self {
            Self::All => true,
            Self::Pinned => memo.pinned,
            other => other.category() == Some(memo.category),
        }
    }
}

/// Inclusive calendar-day window; either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Window covering the calendar day of `now`.
    pub fn today(now: DateTime<Utc>) -> Self {
        let day = now.date_naive();
        Self::new(Some(day), Some(day))
    }

    /// Window covering `days` calendar days ending on the day of `now`.
    ///
    /// `days == 0` is treated as 1.
    pub fn last_days(now: DateTime<Utc>, days: u64) -> Self {
        let today = now.date_naive();
        let from = today
            .checked_sub_days(Days::new(days.max(1) - 1))
            .unwrap_or(NaiveDate::MIN);
        Self::new(Some(from), Some(today))
    }

    pub fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        if let Some(from) = self.from {
            if at < start_of_day(from) {
                return false;
            }
        }
        if let Some(to) = self.to {
            if at > end_of_day(to) {
                return false;
            }
        }
        true
    }
}

impl Display for DateWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.from, self.to) {
            (None, None) => f.write_str("all time"),
            (Some(from), Some(to)) => {
                write!(f, "{} - {}", from.format("%b %-d"), to.format("%b %-d"))
            }
            (Some(from), None) => write!(f, "from {}", from.format("%b %-d")),
            (None, Some(to)) => write!(f, "until {}", to.format("%b %-d")),
        }
    }
}

fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day(day: NaiveDate) -> DateTime<Utc> {
    let last_instant =
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    day.and_time(last_instant).and_utc()
}

/// Full list query: filter, active tag, date window and free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoQuery {
    pub filter: MemoFilter,
    /// Exact, case-sensitive tag that must be present.
    pub tag: Option<String>,
    pub window: DateWindow,
    /// Raw search input; trimmed and lowercased before matching.
    pub search: String,
}

impl MemoQuery {
    /// Returns whether `memo` passes every predicate of this query.
    pub fn matches(&self, memo: &Memo) -> bool {
        self.matches_with_needle(memo, &normalize_search(&self.search))
    }

    fn matches_with_needle(&self, memo: &Memo, needle: &str) -> bool {
        if !self.filter.matches(memo) {
            return false;
        }
        if let Some(tag) = self.tag.as_deref() {
            if !memo.has_tag(tag) {
                return false;
            }
        }
        if !self.window.contains(memo.created_at) {
            return false;
        }
        if needle.is_empty() {
            return true;
        }
        memo.content.to_lowercase().contains(needle)
            || memo
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

fn normalize_search(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Returns the memos matching `query`, newest first.
pub fn filter_memos(memos: &[Memo], query: &MemoQuery) -> Vec<Memo> {
    let needle = normalize_search(&query.search);
    let mut matched: Vec<Memo> = memos
        .iter()
        .filter(|memo| query.matches_with_needle(memo, &needle))
        .cloned()
        .collect();
    sort_newest_first(&mut matched);
    matched
}

/// Stable sort by `created_at` descending.
pub fn sort_newest_first(memos: &mut [Memo]) {
    memos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
