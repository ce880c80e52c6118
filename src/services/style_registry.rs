//! Style Registry: the owned style scope generated subtitle rules live in.
//!
//! Rules are kept in insertion order so the page stylesheet can be rebuilt
//! after a reload. Insertion is idempotent by identifier, which bounds the
//! registry to one rule per distinct selection.

use std::collections::HashSet;

use crate::types::style::ActiveStyleRule;

/// Style registry owned by a mounted screen.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    rules: Vec<ActiveStyleRule>,
    ids: HashSet<String>,
    active: Option<String>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `rule` unless its identifier is already present.
    ///
    /// Returns `true` when the rule was newly inserted.
    pub fn insert(&mut self, rule: ActiveStyleRule) -> bool {
        if self.ids.contains(&rule.id) {
            tracing::trace!(id = %rule.id, "style rule already registered");
            return false;
        }
        tracing::debug!(id = %rule.id, "registering style rule");
        self.ids.insert(rule.id.clone());
        self.rules.push(rule);
        true
    }

    /// Marks `id` as the identifier applied to the subtitle container.
    ///
    /// Unregistered identifiers are refused and leave the active one unchanged.
    pub fn activate(&mut self, id: &str) -> bool {
        if !self.ids.contains(id) {
            tracing::warn!(id, "refusing to activate unregistered style rule");
            return false;
        }
        self.active = Some(id.to_string());
        true
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[ActiveStyleRule] {
        &self.rules
    }

    /// Concatenated CSS of every registered rule.
    pub fn stylesheet(&self) -> String {
        self.rules.iter().map(|r| r.css.as_str()).collect()
    }

    /// Drops every rule and the active identifier. Returns how many rules were released.
    pub fn teardown(&mut self) -> usize {
        let released = self.rules.len();
        self.rules.clear();
        self.ids.clear();
        self.active = None;
        tracing::debug!(released, "style registry torn down");
        released
    }
}
