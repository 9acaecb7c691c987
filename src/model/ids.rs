use std::fmt::Display;

/// Opaque player identifier returned by the account lookup. Created per
/// lookup, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puuid(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChampionId(i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpellId(i64);

impl Puuid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ChampionId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl SpellId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Display for Puuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for ChampionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for SpellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Puuid {
    fn from(value: String) -> Self {
        Puuid(value)
    }
}

impl From<&str> for Puuid {
    fn from(value: &str) -> Self {
        Puuid(value.to_string())
    }
}

impl From<i64> for ChampionId {
    fn from(value: i64) -> Self {
        ChampionId(value)
    }
}

impl From<i64> for SpellId {
    fn from(value: i64) -> Self {
        SpellId(value)
    }
}
