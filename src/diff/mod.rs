// SPDX-License-Identifier: MPL-2.0
//! Ordered-snapshot diffing for batch list updates.
//!
//! The feed screen renders sections of items with stable string ids. Given
//! the previous and next snapshots, [`diff_snapshots`] computes the deltas a
//! list renderer applies in one batch: section removals are indexed against
//! the old snapshot, insertions against the new one, and reordered items
//! inside a surviving section are reported as moves (a longest-increasing-
//! subsequence of stable items is left untouched).

use std::collections::{HashMap, HashSet};

/// One renderable section of the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub items: Vec<String>,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, items: &[&str]) -> Self {
        Self {
            id: id.into(),
            items: items.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Item-level changes within a section present in both snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemDelta {
    /// Section index in the new snapshot.
    pub section: usize,
    /// Item indices removed, against the old section.
    pub removed: Vec<usize>,
    /// Item indices inserted, against the new section.
    pub inserted: Vec<usize>,
    /// Items present in both whose position changed: (old index, new index).
    pub moved: Vec<(usize, usize)>,
}

impl ItemDelta {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.inserted.is_empty() && self.moved.is_empty()
    }
}

/// All changes between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListDelta {
    /// Section indices removed, against the old snapshot.
    pub removed_sections: Vec<usize>,
    /// Section indices inserted, against the new snapshot.
    pub inserted_sections: Vec<usize>,
    /// Per-section item changes for surviving sections.
    pub item_deltas: Vec<ItemDelta>,
}

impl ListDelta {
    /// True when the snapshots are identical.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed_sections.is_empty()
            && self.inserted_sections.is_empty()
            && self.item_deltas.iter().all(ItemDelta::is_empty)
    }
}

/// Computes the delta between two ordered snapshots.
#[must_use]
pub fn diff_snapshots(old: &[Section], new: &[Section]) -> ListDelta {
    let old_ids: HashMap<&str, usize> = old
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id.as_str(), i))
        .collect();
    let new_ids: HashSet<&str> = new.iter().map(|s| s.id.as_str()).collect();

    let removed_sections = old
        .iter()
        .enumerate()
        .filter(|(_, s)| !new_ids.contains(s.id.as_str()))
        .map(|(i, _)| i)
        .collect();

    let mut inserted_sections = Vec::new();
    let mut item_deltas = Vec::new();
    for (new_index, section) in new.iter().enumerate() {
        match old_ids.get(section.id.as_str()) {
            None => inserted_sections.push(new_index),
            Some(&old_index) => {
                let delta = diff_items(new_index, &old[old_index].items, &section.items);
                if !delta.is_empty() {
                    item_deltas.push(delta);
                }
            }
        }
    }

    ListDelta {
        removed_sections,
        inserted_sections,
        item_deltas,
    }
}

fn diff_items(section: usize, old: &[String], new: &[String]) -> ItemDelta {
    let old_pos: HashMap<&str, usize> = old
        .iter()
        .enumerate()
        .map(|(i, s)| (s.as_str(), i))
        .collect();
    let new_set: HashSet<&str> = new.iter().map(String::as_str).collect();

    let removed = old
        .iter()
        .enumerate()
        .filter(|(_, item)| !new_set.contains(item.as_str()))
        .map(|(i, _)| i)
        .collect();

    let mut inserted = Vec::new();
    // (old index, new index) for items present in both, in new order.
    let mut common = Vec::new();
    for (new_index, item) in new.iter().enumerate() {
        match old_pos.get(item.as_str()) {
            None => inserted.push(new_index),
            Some(&old_index) => common.push((old_index, new_index)),
        }
    }

    // Items inside the longest increasing run of old indices keep their
    // relative order; everything else moved.
    let stable = longest_increasing_run(&common);
    let moved = common
        .iter()
        .enumerate()
        .filter(|(i, _)| !stable.contains(i))
        .map(|(_, pair)| *pair)
        .collect();

    ItemDelta {
        section,
        removed,
        inserted,
        moved,
    }
}

/// Indices into `pairs` forming a longest strictly increasing subsequence
/// of old positions.
fn longest_increasing_run(pairs: &[(usize, usize)]) -> HashSet<usize> {
    if pairs.is_empty() {
        return HashSet::new();
    }
    // tails[k] = index into pairs of the smallest tail of an increasing
    // subsequence of length k+1.
    let mut tails: Vec<usize> = Vec::new();
    let mut parent = vec![usize::MAX; pairs.len()];
    for (i, &(old_index, _)) in pairs.iter().enumerate() {
        let pos = tails.partition_point(|&t| pairs[t].0 < old_index);
        if pos > 0 {
            parent[i] = tails[pos - 1];
        }
        if pos == tails.len() {
            tails.push(i);
        } else {
            tails[pos] = i;
        }
    }
    let mut stable = HashSet::new();
    let mut cursor = *tails.last().expect("non-empty tails");
    loop {
        stable.insert(cursor);
        if parent[cursor] == usize::MAX {
            break;
        }
        cursor = parent[cursor];
    }
    stable
}
