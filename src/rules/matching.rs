//! Set matching: which trim materials are worn often enough to count

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::equipment::TrimTag;

/// One group of identical tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimGroup {
    pub tag: TrimTag,
    pub count: usize,
    /// Index of the first slot carrying this tag
    pub first_slot: usize,
}

/// Per-tick grouping of the worn trim tags
///
/// Groups are disjoint, ordered by first slot, and their counts never sum
/// past the slot count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    groups: Vec<TrimGroup>,
    slot_count: usize,
    untagged: usize,
}

impl MatchResult {
    /// Group non-absent tags by equality
    pub fn from_tags(tags: &[Option<TrimTag>]) -> Self {
        let mut groups: Vec<TrimGroup> = Vec::new();
        let mut index: AHashMap<&TrimTag, usize> = AHashMap::new();
        let mut untagged = 0;

        for (slot, tag) in tags.iter().enumerate() {
            let Some(tag) = tag else {
                untagged += 1;
                continue;
            };
            match index.get(tag) {
                Some(&i) => groups[i].count += 1,
                None => {
                    index.insert(tag, groups.len());
                    groups.push(TrimGroup {
                        tag: tag.clone(),
                        count: 1,
                        first_slot: slot,
                    });
                }
            }
        }

        Self {
            groups,
            slot_count: tags.len(),
            untagged,
        }
    }

    pub fn groups(&self) -> &[TrimGroup] {
        &self.groups
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Slots that are empty or carry no trim
    pub fn untagged(&self) -> usize {
        self.untagged
    }

    /// Every slot carries some tag (not necessarily the same one)
    pub fn is_fully_trimmed(&self) -> bool {
        self.slot_count > 0 && self.untagged == 0
    }

    pub fn count_of(&self, tag: &TrimTag) -> usize {
        self.groups
            .iter()
            .find(|g| &g.tag == tag)
            .map(|g| g.count)
            .unwrap_or(0)
    }

    /// Tags whose group reaches `threshold`, in first-slot order
    pub fn active(&self, threshold: usize) -> Vec<TrimTag> {
        self.groups
            .iter()
            .filter(|g| g.count >= threshold)
            .map(|g| g.tag.clone())
            .collect()
    }
}

/// Active tags for a slot-ordered tag list under `threshold`
///
/// Pure threshold comparison: a tag is active iff at least `threshold`
/// slots carry it. A zero threshold is treated as one.
pub fn evaluate(tags: &[Option<TrimTag>], threshold: usize) -> Vec<TrimTag> {
    MatchResult::from_tags(tags).active(threshold.max(1))
}
