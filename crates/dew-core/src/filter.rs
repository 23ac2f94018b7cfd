//! Derived filtered view over the people list.
//!
//! # Design
//! - Pure functions only; callers memoize if they care.
//! - The stored filter keeps whatever the user typed; folding happens here.

use crate::model::{Person, PersonId};

/// Trim and lower-case raw filter text.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// People matching `filter`, in list order. Blank filters return everything.
#[must_use]
pub fn filter_people(people: &[Person], filter: &str) -> Vec<Person> {
    let needle = normalize_query(filter);
    if needle.is_empty() {
        return people.to_vec();
    }
    people
        .iter()
        .filter(|person| person.matches(&needle))
        .cloned()
        .collect()
}

/// Ids of the people matching `filter`, in list order.
#[must_use]
pub fn visible_ids(people: &[Person], filter: &str) -> Vec<PersonId> {
    let needle = normalize_query(filter);
    people
        .iter()
        .filter(|person| needle.is_empty() || person.matches(&needle))
        .map(|person| person.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Person> {
        vec![
            Person::new(1, "Ana García", "ana@example.com", "111"),
            Person::new(2, "Bob", "bob@example.com", "222"),
            Person::new(3, "Carla", "carla@mail.test", "333 111"),
        ]
    }

    #[test]
    fn matches_name_case_insensitively() {
        let filtered = filter_people(&sample(), "ana");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Ana García");
    }

    #[test]
    fn blank_filter_returns_list_unchanged() {
        let people = sample();
        assert_eq!(filter_people(&people, ""), people);
        assert_eq!(filter_people(&people, "   \t"), people);
    }

    #[test]
    fn filter_is_trimmed_and_covers_phone_and_email() {
        let people = sample();
        let ids: Vec<_> = filter_people(&people, "  111 ").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(visible_ids(&people, "MAIL.TEST"), vec![3]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let people = sample();
        for query in ["", "a", "EXAMPLE", " 2 ", "zzz"] {
            let once = filter_people(&people, query);
            let twice = filter_people(&once, query);
            assert_eq!(once, twice, "query {query:?}");
        }
    }

    #[test]
    fn visible_ids_follow_filtered_order() {
        let people = sample();
        let ids: Vec<_> = filter_people(&people, "example").iter().map(|p| p.id).collect();
        assert_eq!(visible_ids(&people, "example"), ids);
    }
}
