//! Contact list view-model state and reducers.
//!
//! # Design
//! - Reducers mutate [`ContactsState`] in place and report which persisted
//!   values changed so the caller can mirror them right after the state settles.
//! - The selection is reconciled against the filtered view after every list
//!   or filter change, so it never holds ids the user cannot see.
//! - The load sequence completes at most once; later completions are ignored.

use crate::filter::{filter_people, visible_ids};
use crate::load::{LoadOrigin, LoadOutcome};
use crate::model::{Person, PersonId};
use crate::selection::{self, SelectAllState, SelectionSet};

/// Field values for people created by the add action.
const NEW_PERSON_TEMPLATES: [(i64, &str, &str, &str); 2] = [
    (0, "Jose Ignacio", "JoseIgnacio@ejemplo.com", "600 000 000"),
    (12, "Maria Lopez", "mariaLo@ejemplo.com", "600 000 000"),
];

/// Lifecycle of the one-shot initial load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Waiting for the cache lookup and optional remote fetch.
    #[default]
    Loading,
    /// Initial load finished (successfully or not).
    Ready,
}

/// Persisted values touched by a reducer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Changes {
    /// The people list changed.
    pub people: bool,
    /// The filter text changed.
    pub filter: bool,
}

impl Changes {
    /// Nothing persisted changed.
    pub const NONE: Self = Self {
        people: false,
        filter: false,
    };
    /// Only the people list changed.
    pub const PEOPLE: Self = Self {
        people: true,
        filter: false,
    };
    /// Only the filter text changed.
    pub const FILTER: Self = Self {
        people: false,
        filter: true,
    };

    /// Whether anything needs persisting.
    #[must_use]
    pub const fn any(self) -> bool {
        self.people || self.filter
    }
}

/// Result of a bulk delete request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteResult {
    /// Selection was empty; no prompt was shown.
    NothingSelected,
    /// The user declined the confirmation prompt.
    Cancelled,
    /// The given number of people was removed.
    Removed(usize),
}

impl DeleteResult {
    /// Persisted values touched by the delete.
    #[must_use]
    pub const fn changes(self) -> Changes {
        match self {
            Self::Removed(_) => Changes::PEOPLE,
            Self::NothingSelected | Self::Cancelled => Changes::NONE,
        }
    }
}

/// Application state for the contact list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactsState {
    /// Initial load phase.
    pub phase: LoadPhase,
    /// Full people list in display order.
    pub people: Vec<Person>,
    /// Filter text exactly as typed.
    pub filter: String,
    /// Ids checked for bulk actions.
    pub selected: SelectionSet,
    /// Message describing a failed initial load.
    pub load_error: Option<String>,
}

impl ContactsState {
    /// Fresh state in [`LoadPhase::Loading`] with a restored filter.
    #[must_use]
    pub fn new(filter: String) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Whether the initial load is still pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// People matching the current filter.
    #[must_use]
    pub fn visible_people(&self) -> Vec<Person> {
        filter_people(&self.people, &self.filter)
    }

    /// Ids of people matching the current filter.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<PersonId> {
        visible_ids(&self.people, &self.filter)
    }

    /// Whether the bulk-action bar should be shown.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Header checkbox state for the current view.
    #[must_use]
    pub fn select_all_state(&self) -> SelectAllState {
        selection::select_all_state(&self.selected, &self.visible_ids())
    }

    fn reconcile_selection(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        self.selected = selection::reconcile(&self.selected, &self.visible_ids());
    }
}

/// Adopt the result of the initial load and move to [`LoadPhase::Ready`].
///
/// The load sequence persists remote results itself, so nothing is reported
/// as changed. A second completion is ignored.
pub fn finish_loading(state: &mut ContactsState, outcome: LoadOutcome) -> Changes {
    if state.phase == LoadPhase::Ready {
        tracing::debug!("initial load already completed; ignoring outcome");
        return Changes::NONE;
    }
    state.load_error = match &outcome.origin {
        LoadOrigin::Failed(err) => Some(err.to_string()),
        LoadOrigin::Cache | LoadOrigin::Remote => None,
    };
    state.people = outcome.people;
    state.phase = LoadPhase::Ready;
    state.reconcile_selection();
    Changes::NONE
}

/// Replace the filter text.
pub fn set_filter(state: &mut ContactsState, value: String) -> Changes {
    if state.filter == value {
        return Changes::NONE;
    }
    state.filter = value;
    state.reconcile_selection();
    Changes::FILTER
}

/// Prepend placeholder people with ids derived from `now_millis`.
///
/// Ids are distinct from each other and from every id already in the list;
/// a taken candidate is bumped upward until it is free, then downward if the
/// `i64` range runs out.
pub fn add_people(state: &mut ContactsState, now_millis: i64) -> Changes {
    let mut taken: SelectionSet = state.people.iter().map(|person| person.id).collect();
    let mut added = Vec::with_capacity(NEW_PERSON_TEMPLATES.len());
    for (offset, name, email, phone) in NEW_PERSON_TEMPLATES {
        let id = claim_id(&mut taken, now_millis.saturating_add(offset));
        added.push(Person::new(id, name, email, phone));
    }
    tracing::debug!(count = added.len(), "adding placeholder people");
    added.append(&mut state.people);
    state.people = added;
    state.reconcile_selection();
    Changes::PEOPLE
}

/// Reserve the first free id at or above `candidate`, continuing below it
/// once the upward search runs out of `i64` range.
fn claim_id(taken: &mut SelectionSet, candidate: PersonId) -> PersonId {
    let upward = std::iter::successors(Some(candidate), |id| id.checked_add(1));
    let downward = std::iter::successors(candidate.checked_sub(1), |id| id.checked_sub(1));
    upward
        .chain(downward)
        .find(|id| taken.insert(*id))
        .unwrap_or(candidate)
}

/// Toggle one row. Ids outside the filtered view are ignored.
pub fn toggle_person(state: &mut ContactsState, id: PersonId) -> Changes {
    if state.selected.contains(&id) || state.visible_ids().contains(&id) {
        state.selected = selection::toggle_selection(&state.selected, id);
    }
    Changes::NONE
}

/// Apply the header checkbox: `true` selects the whole filtered view,
/// `false` clears the selection.
pub fn select_all(state: &mut ContactsState, checked: bool) -> Changes {
    state.selected = selection::select_all(checked, &state.visible_ids());
    Changes::NONE
}

/// Drop every selected id.
pub fn clear_selection(state: &mut ContactsState) -> Changes {
    state.selected.clear();
    Changes::NONE
}

/// Hide the load failure notice.
pub fn dismiss_load_error(state: &mut ContactsState) -> Changes {
    state.load_error = None;
    Changes::NONE
}

/// Delete every selected person after `confirm` accepts the prompt.
///
/// `confirm` receives a message describing how many people will be removed.
pub fn delete_selected<F>(state: &mut ContactsState, confirm: F) -> DeleteResult
where
    F: FnOnce(&str) -> bool,
{
    if state.selected.is_empty() {
        return DeleteResult::NothingSelected;
    }
    if !confirm(&selection::delete_prompt(state.selected.len())) {
        return DeleteResult::Cancelled;
    }
    let before = state.people.len();
    let selected = std::mem::take(&mut state.selected);
    state.people.retain(|person| !selected.contains(&person.id));
    let removed = before - state.people.len();
    tracing::debug!(removed, "deleted selected people");
    DeleteResult::Removed(removed)
}
