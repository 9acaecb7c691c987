use json::JsonValue;

use crate::{model::ids::Puuid, service::ParsingError};

pub fn parse_account_puuid(json: &JsonValue) -> Result<Puuid, ParsingError> {
    let puuid = json["puuid"].as_str().ok_or(ParsingError::InvalidType("puuid".into()))?;
    Ok(puuid.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_puuid_field() {
        let json = json::parse(r#"{"puuid": "abc-123", "gameName": "Jone", "tagLine": "SWE"}"#).unwrap();
        let puuid = parse_account_puuid(&json).unwrap();
        assert_eq!(puuid.as_str(), "abc-123");
    }

    #[test]
    fn missing_puuid_is_an_error() {
        let json = json::parse(r#"{"gameName": "Jone"}"#).unwrap();
        assert!(parse_account_puuid(&json).is_err());
    }
}
