use std::fmt;

use json::JsonValue;
use reqwest::blocking::Client;

use crate::{
    config::AppConfig,
    model::{ids::Puuid, rank::RankedOverview},
    service::ParsingError,
};

use super::parsing::{account::parse_account_puuid, rank::parse_league_entries};

const USER_AGENT: &str = "summoner-tracker";

/// Thin client for the public Riot endpoints. One GET per operation, no
/// retries, transport defaults for timeouts.
pub struct RiotApiClient {
    client: Client,
    api_key: String,
    account_host: String,
    platform_host: String,
}

impl RiotApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, ApiInitError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            account_host: config.account_host.clone(),
            platform_host: config.platform_host.clone(),
        })
    }

    /// Riot ID ("Name" + "Tag") to the opaque player id.
    pub fn resolve_account(&self, name: &str, tag: &str) -> ApiResult<Puuid> {
        let url = format!(
            "https://{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.account_host, name, tag
        );
        let body = self.get_json(&url)?;
        Ok(parse_account_puuid(&body)?)
    }

    /// League entries for a player, folded into the solo and flex slots.
    pub fn fetch_standings(&self, puuid: &Puuid) -> ApiResult<RankedOverview> {
        let url = format!(
            "https://{}/lol/league/v4/entries/by-puuid/{}",
            self.platform_host,
            puuid.as_str()
        );
        let body = self.get_json(&url)?;
        Ok(parse_league_entries(&body)?)
    }

    fn get_json(&self, url: &str) -> ApiResult<JsonValue> {
        let response = self.client.get(url).header("X-Riot-Token", self.api_key.as_str()).send()?;
        let status = response.status().as_u16();
        let body = json::parse(&response.text()?)?;
        into_outcome(status, body)
    }
}

// Non-success responses carry the remote payload through unchanged.
fn into_outcome(status: u16, body: JsonValue) -> ApiResult<JsonValue> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::BadStatus(status, body))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiInitError {
    ClientError(reqwest::Error),
}

impl fmt::Display for ApiInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiInitError::ClientError(err) => write!(f, "Client error: {}", err),
        }
    }
}

impl From<reqwest::Error> for ApiInitError {
    fn from(error: reqwest::Error) -> Self {
        Self::ClientError(error)
    }
}

#[derive(Debug)]
pub enum ApiError {
    Transport(reqwest::Error),
    BadStatus(u16, JsonValue),
    Malformed(json::Error),
    Parsing(ParsingError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "Transport error: {}", err),
            ApiError::BadStatus(status, payload) => write!(f, "HTTP {}: {}", status, payload.dump()),
            ApiError::Malformed(err) => write!(f, "Response is not valid JSON: {}", err),
            ApiError::Parsing(err) => write!(f, "Parsing error: {}", err),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Transport(error)
    }
}

impl From<json::Error> for ApiError {
    fn from(error: json::Error) -> Self {
        ApiError::Malformed(error)
    }
}

impl From<ParsingError> for ApiError {
    fn from(error: ParsingError) -> Self {
        ApiError::Parsing(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_status_passes_body_through() {
        let body = json::parse(r#"{"puuid": "abc"}"#).unwrap();
        let result = into_outcome(200, body.clone()).unwrap();
        assert_eq!(result, body);
    }

    #[test]
    fn error_status_keeps_payload_verbatim() {
        let body = json::parse(r#"{"status":{"message":"Not Found"}}"#).unwrap();
        match into_outcome(404, body.clone()) {
            Err(ApiError::BadStatus(status, payload)) => {
                assert_eq!(status, 404);
                assert_eq!(payload, body);
            }
            other => panic!("expected BadStatus, got {:?}", other),
        }
    }
}
