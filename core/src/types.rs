//! Request descriptors for the Steam Web API.
//!
//! # Design
//! A request is identified by an interface, a method and a version, which
//! together form the URL path. Parameters live in a `BTreeMap`, so the query
//! string is ordered by parameter name and the same request always produces
//! the same URL.

use std::collections::BTreeMap;
use std::fmt;

/// Host of the public Steam Web API.
pub const DEFAULT_BASE_URL: &str = "api.steampowered.com";

/// A named group of Steam Web API methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiInterface {
    ISteamNews,
    ISteamUserStats,
    ISteamUser,
    IPlayerService,
    ISteamApps,
    ISteamWebApiUtil,
}

impl ApiInterface {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiInterface::ISteamNews => "ISteamNews",
            ApiInterface::ISteamUserStats => "ISteamUserStats",
            ApiInterface::ISteamUser => "ISteamUser",
            ApiInterface::IPlayerService => "IPlayerService",
            ApiInterface::ISteamApps => "ISteamApps",
            ApiInterface::ISteamWebApiUtil => "ISteamWebAPIUtil",
        }
    }
}

impl fmt::Display for ApiInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single method within an [`ApiInterface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterfaceMethod {
    GetNewsForApp,
    GetGlobalAchievementPercentagesForApp,
    GetNumberOfCurrentPlayers,
    GetPlayerAchievements,
    GetSchemaForGame,
    GetUserStatsForGame,
    GetPlayerSummaries,
    GetFriendList,
    GetPlayerBans,
    ResolveVanityUrl,
    GetOwnedGames,
    GetRecentlyPlayedGames,
    IsPlayingSharedGame,
    GetAppList,
    GetServerInfo,
    GetSupportedApiList,
}

impl InterfaceMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceMethod::GetNewsForApp => "GetNewsForApp",
            InterfaceMethod::GetGlobalAchievementPercentagesForApp => {
                "GetGlobalAchievementPercentagesForApp"
            }
            InterfaceMethod::GetNumberOfCurrentPlayers => "GetNumberOfCurrentPlayers",
            InterfaceMethod::GetPlayerAchievements => "GetPlayerAchievements",
            InterfaceMethod::GetSchemaForGame => "GetSchemaForGame",
            InterfaceMethod::GetUserStatsForGame => "GetUserStatsForGame",
            InterfaceMethod::GetPlayerSummaries => "GetPlayerSummaries",
            InterfaceMethod::GetFriendList => "GetFriendList",
            InterfaceMethod::GetPlayerBans => "GetPlayerBans",
            InterfaceMethod::ResolveVanityUrl => "ResolveVanityURL",
            InterfaceMethod::GetOwnedGames => "GetOwnedGames",
            InterfaceMethod::GetRecentlyPlayedGames => "GetRecentlyPlayedGames",
            InterfaceMethod::IsPlayingSharedGame => "IsPlayingSharedGame",
            InterfaceMethod::GetAppList => "GetAppList",
            InterfaceMethod::GetServerInfo => "GetServerInfo",
            InterfaceMethod::GetSupportedApiList => "GetSupportedAPIList",
        }
    }
}

impl fmt::Display for InterfaceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Revision of an interface method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    One,
    Two,
}

impl Version {
    pub fn number(&self) -> u16 {
        match self {
            Version::One => 1,
            Version::Two => 2,
        }
    }
}

/// Renders as it appears in a request path, e.g. `v0002`.
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{:04}", self.number())
    }
}

/// A single call to the Steam Web API, described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamWebApiRequest {
    api_interface: ApiInterface,
    interface_method: InterfaceMethod,
    version: Version,
    base_url: String,
    parameters: BTreeMap<String, String>,
}

impl SteamWebApiRequest {
    pub fn builder(
        api_interface: ApiInterface,
        interface_method: InterfaceMethod,
        version: Version,
    ) -> SteamWebApiRequestBuilder {
        SteamWebApiRequestBuilder {
            api_interface,
            interface_method,
            version,
            base_url: DEFAULT_BASE_URL.to_string(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn api_interface(&self) -> ApiInterface {
        self.api_interface
    }

    pub fn interface_method(&self) -> InterfaceMethod {
        self.interface_method
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }
}

/// Builder for [`SteamWebApiRequest`].
#[derive(Debug, Clone)]
pub struct SteamWebApiRequestBuilder {
    api_interface: ApiInterface,
    interface_method: InterfaceMethod,
    version: Version,
    base_url: String,
    parameters: BTreeMap<String, String>,
}

impl SteamWebApiRequestBuilder {
    /// Host (optionally with port) the request is sent to.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Adds a query parameter. A repeated name replaces the earlier value.
    pub fn parameter(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.parameters.insert(name.into(), value.to_string());
        self
    }

    pub fn build(self) -> SteamWebApiRequest {
        SteamWebApiRequest {
            api_interface: self.api_interface,
            interface_method: self.interface_method,
            version: self.version,
            base_url: self.base_url,
            parameters: self.parameters,
        }
    }
}
