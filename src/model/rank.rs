/// One populated ranked queue slot, as returned by the league-v4 entries
/// endpoint. `division` is the API's `rank` field ("I".."IV").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedStanding {
    pub tier: String,
    pub division: String,
    pub league_points: u32,
    pub wins: u32,
    pub losses: u32,
}

/// The two named slots a player can hold. An absent slot means unranked in
/// that queue, which is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedOverview {
    pub solo: Option<RankedStanding>,
    pub flex: Option<RankedStanding>,
}
