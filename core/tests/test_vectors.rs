//! Verify URL building against JSON test vectors stored in `test-vectors/`.
//!
//! Each case names a request descriptor and the exact path and URL the
//! handler must produce for it. Decoding the built query must give back the
//! key followed by the case's parameters.

use steam_webapi_core::{
    request_path, ApiInterface, InterfaceMethod, RequestHandler, SteamWebApiRequest, Version,
};

fn parse_interface(s: &str) -> ApiInterface {
    match s {
        "ISteamNews" => ApiInterface::ISteamNews,
        "ISteamUserStats" => ApiInterface::ISteamUserStats,
        "ISteamUser" => ApiInterface::ISteamUser,
        "IPlayerService" => ApiInterface::IPlayerService,
        "ISteamApps" => ApiInterface::ISteamApps,
        "ISteamWebApiUtil" => ApiInterface::ISteamWebApiUtil,
        other => panic!("unknown interface: {other}"),
    }
}

fn parse_method(s: &str) -> InterfaceMethod {
    match s {
        "GetNewsForApp" => InterfaceMethod::GetNewsForApp,
        "GetPlayerSummaries" => InterfaceMethod::GetPlayerSummaries,
        "ResolveVanityUrl" => InterfaceMethod::ResolveVanityUrl,
        "GetOwnedGames" => InterfaceMethod::GetOwnedGames,
        "GetSupportedApiList" => InterfaceMethod::GetSupportedApiList,
        other => panic!("unknown method: {other}"),
    }
}

fn parse_version(n: u64) -> Version {
    match n {
        1 => Version::One,
        2 => Version::Two,
        other => panic!("unknown version: {other}"),
    }
}

#[test]
fn request_uri_test_vectors() {
    let raw = include_str!("../../test-vectors/request_uris.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();
    let key = vectors["key"].as_str().unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let handler = RequestHandler::new(case["use_https"].as_bool().unwrap(), key);

        let mut builder = SteamWebApiRequest::builder(
            parse_interface(case["interface"].as_str().unwrap()),
            parse_method(case["method"].as_str().unwrap()),
            parse_version(case["version"].as_u64().unwrap()),
        )
        .base_url(case["base_url"].as_str().unwrap());
        let parameters = case["parameters"].as_object().unwrap();
        for (param, value) in parameters {
            builder = builder.parameter(param.as_str(), value.as_str().unwrap());
        }
        let request = builder.build();

        assert_eq!(request_path(&request), case["expected_path"].as_str().unwrap(), "{name}: path");

        let url = handler.request_url(&request).unwrap();
        assert_eq!(url.as_str(), case["expected_url"].as_str().unwrap(), "{name}: url");

        let decoded: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(decoded.len(), parameters.len() + 1, "{name}: pair count");
        assert_eq!(decoded[0], ("key".to_string(), key.to_string()), "{name}: key first");
        for (param, value) in &decoded[1..] {
            assert_eq!(
                parameters[param.as_str()].as_str().unwrap(),
                value,
                "{name}: decoded {param}"
            );
        }
    }
}
