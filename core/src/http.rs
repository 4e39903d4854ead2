//! HTTP transport capability used by the request handler.
//!
//! # Design
//! The handler never talks to the network itself. It describes a GET as an
//! `HttpRequest`, hands it to an injected [`HttpClient`], and classifies the
//! returned `HttpResponse`. Tests substitute a fake client; production code
//! uses [`UreqClient`].
//!
//! The response body is a reader rather than a `String` so the handler owns
//! the open response until it has been read or rejected, and drops it on
//! every path.

use std::fmt;
use std::io::{self, Read};

use url::Url;

/// A GET request described as plain data.
///
/// The API key travels in the query, so no headers are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: Url,
}

impl HttpRequest {
    pub fn get(url: Url) -> Self {
        Self { url }
    }
}

/// A response whose body has not been read yet.
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Box<dyn Read>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Read + 'static) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Box::new(body),
        }
    }

    /// Response with an in-memory body.
    pub fn from_string(status: u16, body: impl Into<String>) -> Self {
        Self::new(status, io::Cursor::new(body.into().into_bytes()))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Consumes the response, reading the whole body as UTF-8.
    pub fn into_string(mut self) -> io::Result<String> {
        let mut body = String::new();
        self.body.read_to_string(&mut body)?;
        Ok(body)
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Executes a single GET request.
///
/// Implementations return `Ok` for every response the server sent, whatever
/// its status; `Err` is reserved for failures to get a response at all.
pub trait HttpClient {
    fn execute(&self, request: &HttpRequest) -> io::Result<HttpResponse>;
}

/// [`HttpClient`] backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    pub fn new() -> Self {
        // Status classification belongs to the handler.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for UreqClient {
    fn execute(&self, request: &HttpRequest) -> io::Result<HttpResponse> {
        let response = self.agent.get(request.url.as_str()).call().map_err(|err| match err {
            ureq::Error::Io(err) => err,
            other => io::Error::other(other),
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.into_body().into_reader();

        Ok(HttpResponse {
            status,
            headers,
            body: Box::new(body),
        })
    }
}
