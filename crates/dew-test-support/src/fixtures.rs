//! Sample payloads and logging setup for tests.

use dew_core::model::{Person, RawPerson};
use std::sync::Once;

static LOGGING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per process.
///
/// Honours `RUST_LOG`; defaults to `debug` for the `dew_core` target.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dew_core=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(false)
            .try_init();
    });
}

/// Three people with distinct names, emails, and phones.
#[must_use]
pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new(1, "Ana García", "ana@example.com", "600 111 111"),
        Person::new(2, "Bob Stone", "bob@example.com", "600 222 222"),
        Person::new(3, "Carla Ruiz", "carla@mail.test", "700 333 333"),
    ]
}

/// Remote payload in the endpoint's shape, including extra fields and a
/// record with missing contact details.
#[must_use]
pub fn sample_remote_payload() -> String {
    serde_json::json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "address": { "city": "Gwenborough" }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "email": null
        }
    ])
    .to_string()
}

/// Decoded form of [`sample_remote_payload`].
#[must_use]
pub fn sample_remote_records() -> Vec<RawPerson> {
    serde_json::from_str(&sample_remote_payload()).unwrap_or_default()
}
