//! The selection set.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The set of currently selected product identifiers.
///
/// Owned and mutated by the presentation layer, one interaction at a
/// time; the engine only reads it when deriving the cart summary.
/// Insertion order is irrelevant. Identifiers that no longer exist in the
/// product collection may remain in the set; they simply contribute
/// nothing to the summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: HashSet<ProductId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle membership: remove the id if present, add it otherwise.
    /// Returns whether the id is selected afterwards. Two consecutive
    /// toggles of the same id restore the prior set exactly.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Replace the set with exactly the given ids. Not a union: the final
    /// state is the same regardless of what was selected before.
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = ProductId>) {
        self.ids = ids.into_iter().collect();
    }

    /// Empty the set.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Check whether an id is selected.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids (including ids with no matching product).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over the selected ids in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut sel = Selection::new();
        assert!(sel.toggle(ProductId::new("A")));
        assert!(sel.contains(&ProductId::new("A")));
        assert!(!sel.toggle(ProductId::new("A")));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_prior_set() {
        let mut sel = Selection::new();
        sel.toggle(ProductId::new("A"));
        sel.toggle(ProductId::new("B"));
        let before = sel.clone();

        sel.toggle(ProductId::new("C"));
        sel.toggle(ProductId::new("C"));
        assert_eq!(sel, before);
    }

    #[test]
    fn test_select_all_replaces() {
        let mut sel = Selection::new();
        sel.toggle(ProductId::new("old"));

        sel.select_all([ProductId::new("A"), ProductId::new("B")]);
        assert_eq!(sel.len(), 2);
        assert!(!sel.contains(&ProductId::new("old")));

        // Idempotent: the same call lands in the same state.
        let after_first = sel.clone();
        sel.select_all([ProductId::new("A"), ProductId::new("B")]);
        assert_eq!(sel, after_first);
    }

    #[test]
    fn test_select_all_then_clear_is_empty() {
        let mut sel = Selection::new();
        sel.toggle(ProductId::new("X"));
        sel.select_all([ProductId::new("A"), ProductId::new("B"), ProductId::new("C")]);
        sel.clear();
        assert!(sel.is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Toggling any id twice is the identity on the set.
            #[test]
            fn toggle_twice_is_identity(
                initial in prop::collection::hash_set("[a-z]{1,4}", 0..8),
                id in "[a-z]{1,4}",
            ) {
                let mut sel = Selection::new();
                sel.select_all(initial.iter().map(|s| ProductId::new(s.as_str())));
                let before = sel.clone();

                sel.toggle(ProductId::new(id.clone()));
                sel.toggle(ProductId::new(id));
                prop_assert_eq!(sel, before);
            }

            /// select_all then clear empties the set from any prior state.
            #[test]
            fn select_all_then_clear(
                prior in prop::collection::hash_set("[a-z]{1,4}", 0..8),
                all in prop::collection::vec("[a-z]{1,4}", 0..8),
            ) {
                let mut sel = Selection::new();
                sel.select_all(prior.iter().map(|s| ProductId::new(s.as_str())));
                sel.select_all(all.iter().map(|s| ProductId::new(s.as_str())));
                sel.clear();
                prop_assert!(sel.is_empty());
            }
        }
    }
}
