//! Multi-select helpers for bulk actions.
//!
//! # Design
//! - Helpers take the current set and return the next one.
//! - The visible id slice is the only source of truth for "select all".

use crate::model::PersonId;
use std::collections::BTreeSet;

/// Ids of rows currently checked.
pub type SelectionSet = BTreeSet<PersonId>;

/// Visual state of the header "select all" checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectAllState {
    /// No visible row is selected.
    Unchecked,
    /// Some, but not all, visible rows are selected.
    Indeterminate,
    /// Every visible row is selected.
    Checked,
}

impl SelectAllState {
    /// Whether the checkbox renders as checked.
    #[must_use]
    pub const fn is_checked(self) -> bool {
        matches!(self, Self::Checked)
    }

    /// Whether the checkbox renders as indeterminate.
    #[must_use]
    pub const fn is_indeterminate(self) -> bool {
        matches!(self, Self::Indeterminate)
    }
}

/// Toggle the presence of an id in the selection set.
#[must_use]
pub fn toggle_selection(selected: &SelectionSet, id: PersonId) -> SelectionSet {
    let mut next = selected.clone();
    if !next.remove(&id) {
        next.insert(id);
    }
    next
}

/// Derive the header checkbox state from the selection and visible ids.
#[must_use]
pub fn select_all_state(selected: &SelectionSet, visible: &[PersonId]) -> SelectAllState {
    let checked = visible.iter().filter(|id| selected.contains(id)).count();
    if checked == 0 {
        SelectAllState::Unchecked
    } else if checked == visible.len() {
        SelectAllState::Checked
    } else {
        SelectAllState::Indeterminate
    }
}

/// Selection after the header checkbox is set to `checked`.
#[must_use]
pub fn select_all(checked: bool, visible: &[PersonId]) -> SelectionSet {
    if checked {
        visible.iter().copied().collect()
    } else {
        SelectionSet::new()
    }
}

/// Drop ids that are no longer visible.
#[must_use]
pub fn reconcile(selected: &SelectionSet, visible: &[PersonId]) -> SelectionSet {
    selected
        .iter()
        .copied()
        .filter(|id| visible.contains(id))
        .collect()
}

/// Confirmation prompt shown before a bulk delete.
#[must_use]
pub fn delete_prompt(count: usize) -> String {
    if count == 1 {
        "Delete 1 selected person?".to_string()
    } else {
        format!("Delete {count} selected people?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_selection_adds_and_removes() {
        let set = SelectionSet::new();
        let added = toggle_selection(&set, 4);
        assert!(added.contains(&4));
        let removed = toggle_selection(&added, 4);
        assert!(removed.is_empty());
    }

    #[test]
    fn header_state_tracks_visible_coverage() {
        let visible = [1, 2, 3];
        assert_eq!(
            select_all_state(&SelectionSet::new(), &visible),
            SelectAllState::Unchecked
        );
        assert_eq!(
            select_all_state(&[1, 3].into(), &visible),
            SelectAllState::Indeterminate
        );
        assert_eq!(
            select_all_state(&[1, 2, 3].into(), &visible),
            SelectAllState::Checked
        );
        assert_eq!(select_all_state(&[9].into(), &[]), SelectAllState::Unchecked);
    }

    #[test]
    fn checking_from_indeterminate_selects_exactly_visible() {
        let visible = [1, 2, 3];
        let selected: SelectionSet = [1].into();
        assert!(select_all_state(&selected, &visible).is_indeterminate());
        assert_eq!(select_all(true, &visible), SelectionSet::from([1, 2, 3]));
        assert!(select_all(false, &visible).is_empty());
    }

    #[test]
    fn reconcile_keeps_only_visible_ids() {
        let selected: SelectionSet = [1, 2, 5].into();
        assert_eq!(reconcile(&selected, &[2, 3, 5]), SelectionSet::from([2, 5]));
    }

    #[test]
    fn delete_prompt_mentions_count() {
        assert_eq!(delete_prompt(1), "Delete 1 selected person?");
        assert_eq!(delete_prompt(3), "Delete 3 selected people?");
    }
}
