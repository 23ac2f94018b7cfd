//! Person records and normalization of remote user payloads.

use serde::{Deserialize, Serialize};

/// Identifier used both as row key and selection key.
pub type PersonId = i64;

/// Contact row as displayed and persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Selection key; expected to be unique within a list.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number as free text.
    pub phone: String,
}

impl Person {
    /// Build a person from borrowed field values.
    #[must_use]
    pub fn new(id: PersonId, name: &str, email: &str, phone: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    /// Whether name, email, or phone contains `needle` case-insensitively.
    ///
    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.email, &self.phone]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// User record as returned by the remote endpoint.
///
/// Unknown fields (address, company, ...) are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawPerson {
    /// Remote identifier.
    pub id: PersonId,
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Optional email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Optional phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

impl RawPerson {
    /// Convert into a [`Person`], substituting `placeholder` for missing fields.
    #[must_use]
    pub fn normalize(self, placeholder: &str) -> Person {
        let fill = |value: Option<String>| value.unwrap_or_else(|| placeholder.to_string());
        Person {
            id: self.id,
            name: fill(self.name),
            email: fill(self.email),
            phone: fill(self.phone),
        }
    }
}

/// Normalize a remote payload, preserving order.
#[must_use]
pub fn normalize_all(records: Vec<RawPerson>, placeholder: &str) -> Vec<Person> {
    records
        .into_iter()
        .map(|record| record.normalize(placeholder))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_fields_use_placeholder() {
        let records: Vec<RawPerson> = serde_json::from_str(
            r#"[{"id":7,"name":null,"phone":"555","username":"x","address":{"city":"Y"}}]"#,
        )
        .expect("payload should decode");
        let people = normalize_all(records, "Undefined");
        assert_eq!(people, vec![Person::new(7, "Undefined", "Undefined", "555")]);
    }

    #[test]
    fn matches_any_field_ignoring_case() {
        let person = Person::new(1, "Ana García", "ANA@X.COM", "600 000 000");
        assert!(person.matches("garc"));
        assert!(person.matches("ana@x"));
        assert!(person.matches("600 0"));
        assert!(!person.matches("bob"));
    }

    #[test]
    fn person_serializes_with_four_fields() {
        let json = serde_json::to_value(Person::new(1, "Ana", "a@x.com", "1"))
            .expect("person should encode");
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Ana", "email": "a@x.com", "phone": "1"})
        );
    }
}
