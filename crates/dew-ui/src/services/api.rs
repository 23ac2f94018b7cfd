//! HTTP client for the remote people endpoint.

use async_trait::async_trait;
use dew_core::error::{RemoteError, RemoteResult};
use dew_core::model::RawPerson;
use dew_core::remote::{PeopleSource, decode_people, ensure_success};
use gloo_net::http::Request;

/// Fetches user records with a single GET against a fixed endpoint.
#[derive(Clone, Debug)]
pub struct HttpPeopleSource {
    endpoint: String,
}

impl HttpPeopleSource {
    /// Client for `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    fn transport_error(&self, err: &gloo_net::Error) -> RemoteError {
        RemoteError::Transport {
            url: self.endpoint.clone(),
            message: err.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl PeopleSource for HttpPeopleSource {
    async fn fetch_people(&self) -> RemoteResult<Vec<RawPerson>> {
        let response = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|err| self.transport_error(&err))?;
        ensure_success(&self.endpoint, response.status())?;
        let body = response
            .text()
            .await
            .map_err(|err| self.transport_error(&err))?;
        decode_people(&self.endpoint, &body)
    }
}
