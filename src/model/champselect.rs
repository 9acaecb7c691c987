use super::ids::{ChampionId, SpellId};

#[derive(Debug)]
pub struct ChampSelectSession {
    pub my_team: Vec<ChampSelectCell>,
    pub their_team: Vec<ChampSelectCell>,
    pub my_team_bans: Vec<ChampionId>,
    pub their_team_bans: Vec<ChampionId>,
}

/// One participant slot in the session document. Champion 0 means nothing
/// locked in yet; spell id 0 means no spell picked.
#[derive(Debug)]
pub struct ChampSelectCell {
    pub cell_id: u8,
    pub champion: ChampionId,
    pub spell1: SpellId,
    pub spell2: SpellId,
    pub position: String,
}
