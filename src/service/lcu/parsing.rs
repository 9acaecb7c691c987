use json::JsonValue;

use crate::{
    model::champselect::{ChampSelectCell, ChampSelectSession},
    model::ids::ChampionId,
    service::ParsingError,
};

pub fn parse_champ_select(json: &JsonValue) -> Result<ChampSelectSession, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let my_team = parse_team(&obj["myTeam"])?;
        let their_team = parse_team(&obj["theirTeam"])?;

        let bans = &obj["bans"];
        let my_team_bans = parse_ban_list(&bans["myTeamBans"])?;
        let their_team_bans = parse_ban_list(&bans["theirTeamBans"])?;

        return Ok(ChampSelectSession {
            my_team,
            their_team,
            my_team_bans,
            their_team_bans,
        });
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_team(team_json: &JsonValue) -> Result<Vec<ChampSelectCell>, ParsingError> {
    let mut cells = Vec::new();

    if let JsonValue::Array(team_array) = team_json {
        for player_json in team_array {
            if let JsonValue::Object(player) = player_json {
                let cell_id = player["cellId"]
                    .as_u8()
                    .ok_or(ParsingError::InvalidType("cellId".into()))?;

                let champ_id = player["championId"]
                    .as_i64()
                    .ok_or(ParsingError::InvalidType("championId".into()))?;

                let spell1 = parse_spell_id(&player["spell1Id"]);
                let spell2 = parse_spell_id(&player["spell2Id"]);

                let position = player["assignedPosition"].as_str().unwrap_or("").to_string();

                cells.push(ChampSelectCell {
                    cell_id,
                    champion: champ_id.into(),
                    spell1: spell1.into(),
                    spell2: spell2.into(),
                    position,
                });
            } else {
                return Err(ParsingError::InvalidType("team entry".into()));
            }
        }
        Ok(cells)
    } else {
        Err(ParsingError::InvalidType("team".into()))
    }
}

// Spells of not-yet-visible players come through as absent, or as the
// client's u64::MAX placeholder, which as_i64 would wrap to -1 instead of
// rejecting. Read unsigned and treat anything that does not fit a signed id
// as unpicked.
fn parse_spell_id(value: &JsonValue) -> i64 {
    value.as_u64().and_then(|v| i64::try_from(v).ok()).unwrap_or(0)
}

fn parse_ban_list(bans_json: &JsonValue) -> Result<Vec<ChampionId>, ParsingError> {
    let mut bans = Vec::new();

    if let JsonValue::Array(ban_array) = bans_json {
        for ban_json in ban_array {
            let cid = ban_json
                .as_i64()
                .ok_or(ParsingError::InvalidType("ban entry".into()))?;
            bans.push(cid.into());
        }
        Ok(bans)
    } else {
        // A session outside draft mode has no bans object at all.
        Ok(bans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SESSION: &str = r#"{
        "localPlayerCellId": 0,
        "myTeam": [
            {"cellId": 0, "championId": 103, "spell1Id": 4, "spell2Id": 14, "assignedPosition": "middle"},
            {"cellId": 1, "championId": 0, "spell1Id": 18446744073709551615, "assignedPosition": "top"}
        ],
        "theirTeam": [
            {"cellId": 5, "championId": 64, "spell1Id": 11, "spell2Id": 4, "assignedPosition": "jungle"}
        ],
        "bans": {
            "myTeamBans": [157],
            "theirTeamBans": [238, 555]
        }
    }"#;

    #[test]
    fn parses_teams_and_bans() {
        let json = json::parse(SESSION).unwrap();
        let session = parse_champ_select(&json).unwrap();

        assert_eq!(session.my_team.len(), 2);
        assert_eq!(session.their_team.len(), 1);

        let mid = &session.my_team[0];
        assert_eq!(mid.cell_id, 0);
        assert_eq!(mid.champion.value(), 103);
        assert_eq!(mid.spell1.value(), 4);
        assert_eq!(mid.spell2.value(), 14);
        assert_eq!(mid.position, "middle");

        assert_eq!(session.my_team_bans.len(), 1);
        assert_eq!(session.my_team_bans[0].value(), 157);
        assert_eq!(session.their_team_bans.len(), 2);
    }

    #[test]
    fn placeholder_spells_fall_back_to_unpicked() {
        let json = json::parse(SESSION).unwrap();
        let session = parse_champ_select(&json).unwrap();

        let top = &session.my_team[1];
        assert_eq!(top.champion.value(), 0);
        assert_eq!(top.spell1.value(), 0);
        assert_eq!(top.spell2.value(), 0);
    }

    #[test]
    fn spell_id_rejects_values_that_do_not_fit_a_signed_id() {
        assert_eq!(parse_spell_id(&json::parse("4").unwrap()), 4);
        // The client's placeholder is u64::MAX; a signed read would wrap it
        // to -1 rather than fail.
        assert_eq!(parse_spell_id(&json::parse("18446744073709551615").unwrap()), 0);
        assert_eq!(parse_spell_id(&JsonValue::Null), 0);
    }

    #[test]
    fn missing_bans_object_yields_empty_lists() {
        let json = json::parse(r#"{"myTeam": [], "theirTeam": []}"#).unwrap();
        let session = parse_champ_select(&json).unwrap();
        assert!(session.my_team_bans.is_empty());
        assert!(session.their_team_bans.is_empty());
    }

    #[test]
    fn error_document_is_rejected() {
        // The LCU answers 200-shaped error objects without team arrays when
        // not in champ select.
        let json = json::parse(r#"{"errorCode": "RPC_ERROR", "httpStatus": 404}"#).unwrap();
        assert!(parse_champ_select(&json).is_err());
    }
}
