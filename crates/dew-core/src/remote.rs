//! Remote people source seam.
//!
//! # Design
//! - A single read-only GET; no retries, headers, or pagination.
//! - Futures are not required to be `Send` so browser fetch can implement it.

use crate::error::{RemoteError, RemoteResult};
use crate::model::RawPerson;
use async_trait::async_trait;

/// Read-only source of user records used when no cached list exists.
#[async_trait(?Send)]
pub trait PeopleSource {
    /// Fetch every user record from the source.
    ///
    /// # Errors
    /// Returns [`RemoteError`] for transport failures, non-success statuses,
    /// and undecodable bodies.
    async fn fetch_people(&self) -> RemoteResult<Vec<RawPerson>>;
}

/// Check a response status, mapping anything outside 2xx to an error.
///
/// # Errors
/// Returns [`RemoteError::Status`] when `status` is not a success code.
pub fn ensure_success(url: &str, status: u16) -> RemoteResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RemoteError::Status {
            url: url.to_string(),
            status,
        })
    }
}

/// Decode a response body into user records.
///
/// # Errors
/// Returns [`RemoteError::Decode`] when the body is not a JSON array of
/// records carrying at least an `id`.
pub fn decode_people(url: &str, body: &str) -> RemoteResult<Vec<RawPerson>> {
    serde_json::from_str(body).map_err(|err| RemoteError::Decode {
        url: url.to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.test/users";

    #[test]
    fn success_statuses_pass() {
        assert!(ensure_success(URL, 200).is_ok());
        assert!(ensure_success(URL, 204).is_ok());
    }

    #[test]
    fn failure_statuses_carry_code() {
        assert_eq!(
            ensure_success(URL, 404),
            Err(RemoteError::Status {
                url: URL.into(),
                status: 404
            })
        );
        assert!(ensure_success(URL, 302).is_err());
    }

    #[test]
    fn decode_accepts_extra_fields() {
        let records = decode_people(
            URL,
            r#"[{"id":1,"name":"Leanne Graham","username":"Bret","email":"Sincere@april.biz","phone":"1-770"}]"#,
        )
        .expect("body should decode");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("Leanne Graham"));
    }

    #[test]
    fn decode_rejects_objects() {
        let err = decode_people(URL, r#"{"users":[]}"#).expect_err("object is not a list");
        assert!(matches!(err, RemoteError::Decode { .. }));
    }
}
