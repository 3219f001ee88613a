//! Collection-wide counters and tag usage.

use crate::model::memo::{Memo, MemoCategory};
use serde::Serialize;
use std::collections::HashMap;

/// Snapshot counters over the whole collection, independent of list filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    pub total: usize,
    pub pinned: usize,
    pub tasks: usize,
}

impl BoardStats {
    pub fn collect(memos: &[Memo]) -> Self {
        memos.iter().fold(Self::default(), |mut stats, memo| {
            stats.total += 1;
            if memo.pinned {
                stats.pinned += 1;
            }
            if memo.category == MemoCategory::Task {
                stats.tasks += 1;
            }
            stats
        })
    }
}

/// One entry of the tag cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagUsage {
    pub tag: String,
    pub count: usize,
}

/// Counts tag occurrences, most used first.
///
/// Tags with equal counts keep the order in which they first appear.
pub fn tag_usage(memos: &[Memo]) -> Vec<TagUsage> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut usage: Vec<TagUsage> = Vec::new();
    for tag in memos.iter().flat_map(|memo| memo.tags.iter()) {
        match positions.get(tag.as_str()) {
            Some(&index) => usage[index].count += 1,
            None => {
                positions.insert(tag.as_str(), usage.len());
                usage.push(TagUsage {
                    tag: tag.clone(),
                    count: 1,
                });
            }
        }
    }
    usage.sort_by(|a, b| b.count.cmp(&a.count));
    usage
}
