use std::collections::HashMap;

use crate::common::DisplayGroup;

/// Visibility of each entry's BibTeX block, keyed by the entry's raw source.
///
/// Entries with identical raw source share one key, so toggling one toggles
/// them all.
#[derive(Debug, Clone, Default)]
pub struct DetailToggles {
    visible: HashMap<String, bool>,
}

impl DetailToggles {
    /// All blocks start hidden
    pub fn from_groups(groups: &[DisplayGroup]) -> Self {
        let visible = groups
            .iter()
            .flat_map(|g| g.records.iter())
            .map(|r| (r.raw_source.clone(), false))
            .collect();
        Self { visible }
    }

    /// Flip a block and return its new visibility; unknown keys are ignored
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        let state = self.visible.get_mut(key)?;
        *state = !*state;
        Some(*state)
    }

    pub fn is_visible(&self, key: &str) -> Option<bool> {
        self.visible.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
