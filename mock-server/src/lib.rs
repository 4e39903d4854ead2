use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

/// Fixed clock reported by `ISteamWebAPIUtil/GetServerInfo`.
pub const SERVER_TIME: u64 = 1_700_000_000;
pub const SERVER_TIME_STRING: &str = "Tue Nov 14 22:13:20 2023";

const UNAUTHORIZED_BODY: &str = "<html><head><title>Unauthorized</title></head><body>\
<h1>Unauthorized</h1>Access is denied. Retrying will not help. Please verify your \
<pre>key=</pre> parameter.</body></html>";

const MISSING_APPID_BODY: &str = "<html><head><title>Bad Request</title></head><body>\
<h1>Bad Request</h1>Required parameter 'appid' is missing</body></html>";

/// Body returned for routes without a canned payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Echo {
    pub interface: String,
    pub method: String,
    pub version: String,
    pub parameters: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerInfo {
    pub servertime: u64,
    pub servertimestring: String,
}

#[derive(Debug)]
struct MockState {
    api_key: String,
}

type SharedState = Arc<MockState>;

/// Router that accepts requests signed with `api_key`.
pub fn app(api_key: &str) -> Router {
    let state: SharedState = Arc::new(MockState {
        api_key: api_key.to_string(),
    });
    Router::new()
        .route("/{interface}/{method}/{version}", get(call_method))
        .with_state(state)
}

pub async fn run(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key)).await
}

/// `v` followed by exactly four digits.
fn is_version_segment(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|digits| digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit()))
}

async fn call_method(
    State(state): State<SharedState>,
    Path((interface, method, version)): Path<(String, String, String)>,
    Query(mut parameters): Query<BTreeMap<String, String>>,
) -> Response {
    if !is_version_segment(&version) {
        return StatusCode::NOT_FOUND.into_response();
    }

    if parameters.remove("key").as_deref() != Some(state.api_key.as_str()) {
        tracing::debug!(%interface, %method, "rejecting request with bad key");
        return (StatusCode::UNAUTHORIZED, Html(UNAUTHORIZED_BODY)).into_response();
    }

    match (interface.as_str(), method.as_str()) {
        ("ISteamWebAPIUtil", "GetServerInfo") => Json(ServerInfo {
            servertime: SERVER_TIME,
            servertimestring: SERVER_TIME_STRING.to_string(),
        })
        .into_response(),
        ("ISteamNews", "GetNewsForApp") => match parameters.get("appid") {
            Some(appid) => Json(news_for_app(appid)).into_response(),
            None => (StatusCode::BAD_REQUEST, Html(MISSING_APPID_BODY)).into_response(),
        },
        _ => Json(Echo {
            interface,
            method,
            version,
            parameters,
        })
        .into_response(),
    }
}

fn news_for_app(appid: &str) -> serde_json::Value {
    json!({
        "appnews": {
            "appid": appid.parse::<u64>().unwrap_or_default(),
            "newsitems": [{
                "gid": "5124710263456789012",
                "title": "Patch notes",
                "url": "https://store.steampowered.com/news/",
                "is_external_url": false,
                "author": "Valve",
                "contents": "Fixed a few things.",
                "feedlabel": "Community Announcements",
                "date": SERVER_TIME,
                "feedname": "steam_community_announcements",
            }],
            "count": 1,
        }
    })
}
