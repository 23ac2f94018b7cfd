//! Browser-backed implementations of the core seams (HTTP and local storage).

pub mod api;
pub mod storage;
