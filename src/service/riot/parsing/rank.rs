use json::JsonValue;

use crate::{
    model::rank::{RankedOverview, RankedStanding},
    service::ParsingError,
};

pub const QUEUE_SOLO: &str = "RANKED_SOLO_5x5";
pub const QUEUE_FLEX: &str = "RANKED_FLEX_SR";

/// Folds the raw entry list into the two named slots. The first entry per
/// recognized queue type wins; everything else is discarded. An empty list
/// yields two absent slots, which the UI renders as "Unranked".
pub fn parse_league_entries(json: &JsonValue) -> Result<RankedOverview, ParsingError> {
    if let JsonValue::Array(entries) = json {
        let mut overview = RankedOverview::default();
        for entry in entries {
            match entry["queueType"].as_str() {
                Some(QUEUE_SOLO) if overview.solo.is_none() => overview.solo = Some(parse_standing(entry)?),
                Some(QUEUE_FLEX) if overview.flex.is_none() => overview.flex = Some(parse_standing(entry)?),
                _ => {}
            }
        }
        return Ok(overview);
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_standing(entry: &JsonValue) -> Result<RankedStanding, ParsingError> {
    let tier = entry["tier"].as_str().ok_or(ParsingError::InvalidType("tier".into()))?;
    let division = entry["rank"].as_str().ok_or(ParsingError::InvalidType("rank".into()))?;
    let league_points = entry["leaguePoints"]
        .as_u32()
        .ok_or(ParsingError::InvalidType("leaguePoints".into()))?;
    let wins = entry["wins"].as_u32().ok_or(ParsingError::InvalidType("wins".into()))?;
    let losses = entry["losses"].as_u32().ok_or(ParsingError::InvalidType("losses".into()))?;

    Ok(RankedStanding {
        tier: tier.to_string(),
        division: division.to_string(),
        league_points,
        wins,
        losses,
    })
}
