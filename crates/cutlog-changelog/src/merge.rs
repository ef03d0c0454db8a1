//! Deduplicating and grouping changelog entries

use std::collections::{BTreeMap, HashSet};

use cutlog_core::config::ChangelogConfig;
use tracing::debug;

use crate::types::{Category, ChangelogEntry, DependencyBump, EntryKind};

/// Collects entries for one run and merges them into display lines.
///
/// Owns the set of keys already seen, so duplicates are dropped on
/// [`push`](Self::push). Deduplication is per category: the same text filed
/// under two categories is kept in both.
#[derive(Debug)]
pub struct EntryMerger {
    bump_group_threshold: usize,
    bump_group_max_packages: usize,
    seen: HashSet<(Category, String)>,
    entries: BTreeMap<Category, Vec<EntryKind>>,
}

impl EntryMerger {
    /// Create a merger using the grouping limits from config
    pub fn new(config: &ChangelogConfig) -> Self {
        Self::with_limits(config.bump_group_threshold, config.bump_group_max_packages)
    }

    /// Create a merger with explicit grouping limits
    pub fn with_limits(bump_group_threshold: usize, bump_group_max_packages: usize) -> Self {
        Self {
            bump_group_threshold,
            bump_group_max_packages,
            seen: HashSet::new(),
            entries: BTreeMap::new(),
        }
    }

    /// Add an entry; returns `false` if it duplicates an earlier one
    pub fn push(&mut self, entry: ChangelogEntry) -> bool {
        let key = entry.dedup_key();
        if !self.seen.insert((entry.category, key)) {
            debug!(category = %entry.category, "skipping duplicate entry");
            return false;
        }

        self.entries.entry(entry.category).or_default().push(entry.kind);
        true
    }

    /// Merge the collected entries into display lines per category.
    ///
    /// Dependency bump lines come first, followed by the other entries in
    /// the order they were pushed.
    pub fn finish(mut self) -> BTreeMap<Category, Vec<String>> {
        let mut merged = BTreeMap::new();

        for (category, kinds) in std::mem::take(&mut self.entries) {
            let mut bumps = Vec::new();
            let mut rest = Vec::new();
            for kind in kinds {
                match kind {
                    EntryKind::DependencyBump(bump) => bumps.push(bump),
                    EntryKind::Text(text) => rest.push(text),
                }
            }

            let mut lines = self.bump_lines(&bumps);
            lines.extend(rest);
            if !lines.is_empty() {
                merged.insert(category, lines);
            }
        }

        merged
    }

    fn bump_lines(&self, bumps: &[DependencyBump]) -> Vec<String> {
        if bumps.len() <= self.bump_group_threshold {
            return bumps.iter().map(DependencyBump::line).collect();
        }

        let mut packages: Vec<&str> = Vec::new();
        for bump in bumps {
            if !packages.contains(&bump.package.as_str()) {
                packages.push(&bump.package);
            }
        }

        let listed = packages
            .iter()
            .take(self.bump_group_max_packages)
            .map(|p| format!("`{}`", p))
            .collect::<Vec<_>>()
            .join(", ");
        let more = if packages.len() > self.bump_group_max_packages {
            "…"
        } else {
            ""
        };

        debug!(bumps = bumps.len(), packages = packages.len(), "grouped dependency bumps");
        vec![format!("Update dependencies ({}{})", listed, more)]
    }
}
