#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Shared test helpers used across integration suites.
//! Layout: fixtures.rs (sample payloads and logging), mocks.rs (fake storage and remote source).

pub mod fixtures;
pub mod mocks;

pub use fixtures::init_test_logging;
