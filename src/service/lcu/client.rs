use std::{fmt, io, io::Write};

use base64::{engine::general_purpose, write::EncoderStringWriter};
use json::JsonValue;
use reqwest::{
    blocking::Client,
    header::{self, HeaderMap, HeaderValue, InvalidHeaderValue},
};

use crate::{model::champselect::ChampSelectSession, service::ParsingError};

use super::{
    locator::{LocateError, SessionLocator},
    parsing::parse_champ_select,
};

/// Client for the local League client's loopback REST surface.
pub struct LcuClient<L: SessionLocator> {
    locator: L,
}

impl<L: SessionLocator> LcuClient<L> {
    pub fn new(locator: L) -> Self {
        Self { locator }
    }

    /// Fetches the in-progress champ select session. Credentials are
    /// rediscovered on every call; the client restarts with a new port and
    /// token, so nothing is cached across calls.
    pub fn get_champ_select(&self) -> Result<ChampSelectSession, LcuError> {
        let json = self.request("/lol-champ-select/v1/session")?;
        Ok(parse_champ_select(&json)?)
    }

    fn request(&self, endpoint: &str) -> Result<JsonValue, LcuError> {
        let credentials = self.locator.locate()?;
        let client = build_client(&credentials.token)?;

        let url = format!("https://127.0.0.1:{}{}", credentials.port, endpoint);
        let response = client.get(url).send()?;
        let status = response.status().as_u16();
        let body = json::parse(&response.text()?)?;

        if !(200..300).contains(&status) {
            return Err(LcuError::BadStatus(status, body));
        }
        Ok(body)
    }
}

// The client serves a self-signed certificate on loopback; it is
// intentionally not validated.
fn build_client(token: &str) -> Result<Client, LcuError> {
    let mut encoder = EncoderStringWriter::new(&general_purpose::STANDARD);
    encoder.write_all(format!("riot:{}", token).as_bytes())?;
    let auth_secret = encoder.into_inner();

    let mut headers = HeaderMap::new();
    let mut auth_value = HeaderValue::from_str(format!("Basic {}", auth_secret).as_str())?;
    auth_value.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, auth_value);

    Ok(Client::builder()
        .danger_accept_invalid_certs(true)
        .default_headers(headers)
        .build()?)
}

#[derive(Debug)]
pub enum LcuError {
    ClientUnavailable(LocateError),
    AuthSecretInvalid(io::Error),
    AuthHeaderInvalid(InvalidHeaderValue),
    Transport(reqwest::Error),
    Malformed(json::Error),
    BadStatus(u16, JsonValue),
    Parsing(ParsingError),
}

impl fmt::Display for LcuError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LcuError::ClientUnavailable(err) => write!(f, "{}", err),
            LcuError::AuthSecretInvalid(err) => write!(f, "Auth string invalid: {}", err),
            LcuError::AuthHeaderInvalid(err) => write!(f, "Auth header invalid: {}", err),
            LcuError::Transport(err) => write!(f, "Transport error: {}", err),
            LcuError::Malformed(err) => write!(f, "Response is not valid JSON: {}", err),
            LcuError::BadStatus(status, payload) => write!(f, "HTTP {}: {}", status, payload.dump()),
            LcuError::Parsing(err) => write!(f, "Parsing error: {}", err),
        }
    }
}

impl From<LocateError> for LcuError {
    fn from(error: LocateError) -> Self {
        LcuError::ClientUnavailable(error)
    }
}

impl From<io::Error> for LcuError {
    fn from(error: io::Error) -> Self {
        LcuError::AuthSecretInvalid(error)
    }
}

impl From<InvalidHeaderValue> for LcuError {
    fn from(error: InvalidHeaderValue) -> Self {
        LcuError::AuthHeaderInvalid(error)
    }
}

impl From<reqwest::Error> for LcuError {
    fn from(error: reqwest::Error) -> Self {
        LcuError::Transport(error)
    }
}

impl From<json::Error> for LcuError {
    fn from(error: json::Error) -> Self {
        LcuError::Malformed(error)
    }
}

impl From<ParsingError> for LcuError {
    fn from(error: ParsingError) -> Self {
        LcuError::Parsing(error)
    }
}
