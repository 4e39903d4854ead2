//! Builds Steam Web API URLs and dispatches them through an [`HttpClient`].
//!
//! # Design
//! `RequestHandler` holds only `use_https` and the API key. URL assembly is
//! split into three pure steps (path, parameters, URI) that are callable on
//! their own; dispatch is the only step that touches the network, and it
//! does so through the client passed in by the caller.

use std::collections::BTreeMap;

use tracing::{debug, warn};
use url::Url;

use crate::error::SteamApiError;
use crate::http::{HttpClient, HttpRequest};
use crate::types::SteamWebApiRequest;

/// Name of the query parameter carrying the API key.
pub const KEY_PARAMETER: &str = "key";

/// Immutable request handler for one API key.
#[derive(Clone)]
pub struct RequestHandler {
    use_https: bool,
    api_key: String,
}

impl RequestHandler {
    pub fn new(use_https: bool, api_key: impl Into<String>) -> Self {
        Self {
            use_https,
            api_key: api_key.into(),
        }
    }

    pub fn use_https(&self) -> bool {
        self.use_https
    }

    fn scheme(&self) -> &'static str {
        if self.use_https {
            "https"
        } else {
            "http"
        }
    }

    /// Full URL for `request`, key included.
    pub fn request_url(&self, request: &SteamWebApiRequest) -> Result<Url, SteamApiError> {
        let path = request_path(request);
        let parameters = self.request_parameters(request.parameters());
        request_uri(self.scheme(), request.base_url(), &path, &parameters)
    }

    /// The key pair followed by every entry of `parameters`, in map order.
    ///
    /// A caller-supplied `key` entry is kept and appears after the injected one.
    pub fn request_parameters(&self, parameters: &BTreeMap<String, String>) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(parameters.len() + 1);
        pairs.push((KEY_PARAMETER.to_string(), self.api_key.clone()));
        pairs.extend(parameters.iter().map(|(name, value)| (name.clone(), value.clone())));
        pairs
    }

    /// Builds the URL for `request` and returns the response body.
    pub fn web_api_response<C: HttpClient>(
        &self,
        client: &C,
        request: &SteamWebApiRequest,
    ) -> Result<String, SteamApiError> {
        let url = self.request_url(request)?;
        self.web_api_response_for_url(client, &url)
    }

    /// Issues a GET for `url` and returns the body of a 2xx response.
    pub fn web_api_response_for_url<C: HttpClient>(
        &self,
        client: &C,
        url: &Url,
    ) -> Result<String, SteamApiError> {
        debug!(path = url.path(), "dispatching Steam Web API request");

        let response = client.execute(&HttpRequest::get(url.clone())).map_err(|err| {
            warn!(path = url.path(), error = %err, "Steam Web API request failed");
            SteamApiError::Transport(err)
        })?;

        if !response.is_success() {
            warn!(path = url.path(), status = response.status, "Steam Web API rejected request");
            return Err(SteamApiError::Status {
                status: response.status,
            });
        }

        response.into_string().map_err(|err| {
            warn!(path = url.path(), error = %err, "failed to read Steam Web API response");
            SteamApiError::Transport(err)
        })
    }
}

impl std::fmt::Debug for RequestHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestHandler")
            .field("use_https", &self.use_https)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// `/{Interface}/{Method}/v{NNNN}` for `request`.
pub fn request_path(request: &SteamWebApiRequest) -> String {
    format!(
        "/{}/{}/{}",
        request.api_interface(),
        request.interface_method(),
        request.version()
    )
}

/// Assembles a URI, form-encoding each parameter name and value.
///
/// `host` may carry a port but nothing else; `path` must already be a valid,
/// unencoded absolute path.
pub fn request_uri(
    scheme: &str,
    host: &str,
    path: &str,
    parameters: &[(String, String)],
) -> Result<Url, SteamApiError> {
    // An empty host would let the parser take the first path segment as host.
    if host.is_empty() {
        return Err(url::ParseError::EmptyHost.into());
    }
    if let Some(c) = host.chars().find(|c| matches!(c, '/' | '\\' | '?' | '#' | '@')) {
        return Err(SteamApiError::InvalidUri(format!("host {host:?} contains {c:?}")));
    }
    if !path.starts_with('/') {
        return Err(SteamApiError::InvalidUri(format!("path {path:?} is not absolute")));
    }

    let mut url = Url::parse(&format!("{scheme}://{host}{path}"))?;
    if url.path() != path || url.query().is_some() || url.fragment().is_some() {
        return Err(SteamApiError::InvalidUri(format!("path {path:?} is not a plain URI path")));
    }
    if !parameters.is_empty() {
        url.query_pairs_mut().extend_pairs(parameters);
    }
    Ok(url)
}
