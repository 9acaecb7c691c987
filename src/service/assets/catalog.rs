use std::collections::HashMap;

use json::JsonValue;

/// Numeric champion key to canonical name, from the Data Dragon
/// champion.json document. Loaded once, immutable afterwards.
#[derive(Debug, Default)]
pub struct ChampionCatalog {
    by_key: HashMap<i64, String>,
}

impl ChampionCatalog {
    /// Entries look like `{"id": "Ahri", "key": "103"}`, with the key stored
    /// as a string. Malformed entries are skipped, not errors.
    pub fn from_json(json: &JsonValue) -> Self {
        let mut by_key = HashMap::new();
        for (_, entry) in json["data"].entries() {
            let key = entry["key"].as_str().and_then(|k| k.parse::<i64>().ok());
            let name = entry["id"].as_str();
            if let (Some(key), Some(name)) = (key, name) {
                by_key.insert(key, name.to_string());
            }
        }
        Self { by_key }
    }

    pub fn name(&self, key: i64) -> Option<&str> {
        self.by_key.get(&key).map(String::as_str)
    }
}

/// Numeric spell key to icon filename, from summoner.json. Spells with a
/// non-numeric key are legacy entries and are dropped.
#[derive(Debug, Default)]
pub struct SpellCatalog {
    by_key: HashMap<i64, String>,
}

impl SpellCatalog {
    pub fn from_json(json: &JsonValue) -> Self {
        let mut by_key = HashMap::new();
        for (_, spell) in json["data"].entries() {
            let key = spell["key"].as_str().and_then(|k| k.parse::<i64>().ok());
            let id = spell["id"].as_str();
            if let (Some(key), Some(id)) = (key, id) {
                by_key.insert(key, format!("{}.png", id));
            }
        }
        Self { by_key }
    }

    pub fn filename(&self, key: i64) -> Option<&str> {
        self.by_key.get(&key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn champion_keys_resolve_to_names() {
        let json = json::parse(
            r#"{"type": "champion", "data": {
                "Ahri": {"id": "Ahri", "key": "103"},
                "MonkeyKing": {"id": "MonkeyKing", "key": "62"}
            }}"#,
        )
        .unwrap();
        let catalog = ChampionCatalog::from_json(&json);
        assert_eq!(catalog.name(103), Some("Ahri"));
        assert_eq!(catalog.name(62), Some("MonkeyKing"));
        assert_eq!(catalog.name(9999), None);
    }

    #[test]
    fn missing_data_section_gives_empty_catalog() {
        let json = json::parse("{}").unwrap();
        let catalog = ChampionCatalog::from_json(&json);
        assert_eq!(catalog.name(103), None);
        assert!(catalog.by_key.is_empty());
    }

    #[test]
    fn spells_with_non_numeric_keys_are_dropped() {
        let json = json::parse(
            r#"{"data": {
                "SummonerFlash": {"id": "SummonerFlash", "key": "4"},
                "SummonerSiegeChampSelect1": {"id": "SummonerSiegeChampSelect1", "key": "SiegeChampSelect"}
            }}"#,
        )
        .unwrap();
        let catalog = SpellCatalog::from_json(&json);
        assert_eq!(catalog.filename(4), Some("SummonerFlash.png"));
        assert!(catalog.by_key.len() == 1);
    }
}
