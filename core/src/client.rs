//! Public entry point for calling the Steam Web API.
//!
//! # Design
//! `SteamWebApiClient` pairs a [`RequestHandler`] with the [`HttpClient`] it
//! dispatches through. Raw bodies are returned as-is; `process_json` is a
//! thin generic decoding step for callers that bring their own payload types.

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::SteamApiError;
use crate::handler::RequestHandler;
use crate::http::{HttpClient, UreqClient};
use crate::types::SteamWebApiRequest;

/// Synchronous Steam Web API client.
#[derive(Debug, Clone)]
pub struct SteamWebApiClient<C = UreqClient> {
    handler: RequestHandler,
    http_client: C,
}

impl SteamWebApiClient<UreqClient> {
    /// Starts building a client for `api_key`. HTTPS and the `ureq`
    /// transport are the defaults.
    pub fn builder(api_key: impl Into<String>) -> SteamWebApiClientBuilder<UreqClient> {
        SteamWebApiClientBuilder {
            api_key: api_key.into(),
            use_https: true,
            http_client: UreqClient::new(),
        }
    }
}

impl<C: HttpClient> SteamWebApiClient<C> {
    pub fn request_url(&self, request: &SteamWebApiRequest) -> Result<Url, SteamApiError> {
        self.handler.request_url(request)
    }

    /// Sends `request` and returns the raw response body.
    pub fn process(&self, request: &SteamWebApiRequest) -> Result<String, SteamApiError> {
        self.handler.web_api_response(&self.http_client, request)
    }

    /// Sends `request` and decodes the JSON body into `T`.
    pub fn process_json<T: DeserializeOwned>(
        &self,
        request: &SteamWebApiRequest,
    ) -> Result<T, SteamApiError> {
        let body = self.process(request)?;
        serde_json::from_str(&body).map_err(|e| SteamApiError::Deserialization(e.to_string()))
    }

    pub fn handler(&self) -> &RequestHandler {
        &self.handler
    }
}

/// Builder for [`SteamWebApiClient`].
#[derive(Debug, Clone)]
pub struct SteamWebApiClientBuilder<C> {
    api_key: String,
    use_https: bool,
    http_client: C,
}

impl<C: HttpClient> SteamWebApiClientBuilder<C> {
    pub fn use_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    /// Replaces the transport used to execute requests.
    pub fn http_client<D: HttpClient>(self, http_client: D) -> SteamWebApiClientBuilder<D> {
        SteamWebApiClientBuilder {
            api_key: self.api_key,
            use_https: self.use_https,
            http_client,
        }
    }

    pub fn build(self) -> Result<SteamWebApiClient<C>, SteamApiError> {
        if self.api_key.is_empty() {
            return Err(SteamApiError::MissingApiKey);
        }
        Ok(SteamWebApiClient {
            handler: RequestHandler::new(self.use_https, self.api_key),
            http_client: self.http_client,
        })
    }
}
