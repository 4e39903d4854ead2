//! Synchronous client core for the Steam Web API.
//!
//! # Overview
//! Turns a `SteamWebApiRequest` (interface, method, version, parameters) into
//! a fully encoded URL carrying the caller's API key, executes a single GET
//! through an injected `HttpClient`, and returns the raw response body.
//!
//! # Design
//! - `RequestHandler` is immutable: it holds only `use_https` and the key.
//! - Path, parameter and URI building are pure functions, testable without
//!   any transport.
//! - Every failure (bad URI, non-2xx status, I/O) is a `SteamApiError`; a
//!   rejected status is identified by its code, not by a separate variant.
//! - Query parameters are ordered by name after the leading `key`.

pub mod client;
pub mod error;
pub mod handler;
pub mod http;
pub mod types;

pub use client::{SteamWebApiClient, SteamWebApiClientBuilder};
pub use error::SteamApiError;
pub use handler::{request_path, request_uri, RequestHandler};
pub use http::{HttpClient, HttpRequest, HttpResponse, UreqClient};
pub use types::{
    ApiInterface, InterfaceMethod, SteamWebApiRequest, SteamWebApiRequestBuilder, Version,
    DEFAULT_BASE_URL,
};
