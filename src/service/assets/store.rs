use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use json::JsonValue;
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

use crate::model::ids::{ChampionId, SpellId};

use super::catalog::{ChampionCatalog, SpellCatalog};

const VERSIONS_URL: &str = "https://ddragon.leagueoflegends.com/api/versions.json";
const CDN_BASE: &str = "https://ddragon.leagueoflegends.com/cdn";
const VERSION_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

const PATCH_MARKER: &str = "cached_patch.json";
const CHAMPION_DOCUMENT: &str = "champion.json";
const SPELL_DOCUMENT: &str = "summoner.json";

/// Local mirror of the static Data Dragon reference data.
///
/// On-disk layout under the root directory:
/// `cached_patch.json` marker, the two catalog documents, `champions/` and
/// `spells/` icon directories, and the shipped `ranked_emblems/`. Disk
/// existence is the only cache-hit signal for icons; files written under an
/// earlier patch are never invalidated (a renamed or re-rendered icon keeps
/// serving the old image).
pub struct AssetStore {
    root: PathBuf,
    client: Client,
    patch: Option<String>,
    champions: OnceCell<ChampionCatalog>,
    spells: OnceCell<SpellCatalog>,
}

impl AssetStore {
    /// Prepares the directory layout, then checks the remote patch once.
    /// On a patch change the two catalog documents are re-downloaded
    /// eagerly; icons refresh lazily through the existence check. If the
    /// version fetch fails the patch stays unset and no icon download is
    /// possible until restart.
    pub fn open(root: &Path) -> Result<Self, AssetStoreError> {
        let mut store = Self::prepare(root)?;
        store.refresh_reference_data();
        Ok(store)
    }

    fn prepare(root: &Path) -> Result<Self, AssetStoreError> {
        fs::create_dir_all(root.join("champions"))?;
        fs::create_dir_all(root.join("spells"))?;
        let client = Client::builder().build()?;

        Ok(Self {
            root: root.to_path_buf(),
            client,
            patch: None,
            champions: OnceCell::new(),
            spells: OnceCell::new(),
        })
    }

    pub fn patch(&self) -> Option<&str> {
        self.patch.as_deref()
    }

    pub fn champion_name(&self, id: ChampionId) -> Option<&str> {
        self.champion_catalog().name(id.value())
    }

    /// Resolves a champion id to a local icon path, downloading the icon on
    /// first use. Unknown id or no known patch yields an absent result, not
    /// an error; no network call happens for unknown ids.
    pub fn champion_icon(&self, id: ChampionId) -> Option<PathBuf> {
        let name = self.champion_catalog().name(id.value())?;
        let path = self.root.join("champions").join(format!("{}.png", name));
        let suffix = format!("img/champion/{}.png", name);
        self.resolve_icon(path, &suffix)
    }

    pub fn spell_icon(&self, id: SpellId) -> Option<PathBuf> {
        let filename = self.spell_catalog().filename(id.value())?;
        let path = self.root.join("spells").join(filename);
        let suffix = format!("img/spell/{}", filename);
        self.resolve_icon(path, &suffix)
    }

    /// Pure transform; the emblem files ship with the application and are
    /// never downloaded. "GOLD" maps to `ranked_emblems/gold.webp`.
    pub fn emblem_path(&self, tier: &str) -> PathBuf {
        self.root.join("ranked_emblems").join(format!("{}.webp", tier.to_lowercase()))
    }

    // An existing file wins immediately, with no freshness check against the
    // patch. Download failures leave nothing on disk.
    fn resolve_icon(&self, path: PathBuf, cdn_suffix: &str) -> Option<PathBuf> {
        if path.exists() {
            return Some(path);
        }

        let patch = self.patch.as_deref()?;
        let url = format!("{}/{}/{}", CDN_BASE, patch, cdn_suffix);
        let bytes = self.fetch_bytes(&url).ok()?;
        fs::write(&path, bytes).ok()?;
        Some(path)
    }

    fn refresh_reference_data(&mut self) {
        let latest = match self.fetch_latest_patch() {
            Ok(patch) => patch,
            Err(err) => {
                eprintln!("Failed to fetch latest patch: {}", err);
                return;
            }
        };

        if self.cached_patch().as_deref() != Some(latest.as_str()) {
            if let Err(err) = self.persist_patch(&latest) {
                eprintln!("Failed to persist patch marker: {}", err);
            }
            self.download_reference_document(&latest, CHAMPION_DOCUMENT);
            self.download_reference_document(&latest, SPELL_DOCUMENT);
        }

        self.patch = Some(latest);
    }

    fn fetch_latest_patch(&self) -> Result<String, AssetStoreError> {
        let response = self.client.get(VERSIONS_URL).timeout(VERSION_FETCH_TIMEOUT).send()?;
        if !response.status().is_success() {
            return Err(AssetStoreError::BadStatus(response.status().as_u16()));
        }
        let body = json::parse(&response.text()?)?;
        pick_current_version(&body).ok_or(AssetStoreError::EmptyVersionList)
    }

    fn cached_patch(&self) -> Option<String> {
        let text = fs::read_to_string(self.root.join(PATCH_MARKER)).ok()?;
        let marker = json::parse(&text).ok()?;
        marker["patch"].as_str().map(str::to_string)
    }

    fn persist_patch(&self, patch: &str) -> io::Result<()> {
        let mut marker = JsonValue::new_object();
        marker["patch"] = patch.into();
        fs::write(self.root.join(PATCH_MARKER), marker.dump())
    }

    fn download_reference_document(&self, patch: &str, name: &str) {
        let url = format!("{}/{}/data/en_US/{}", CDN_BASE, patch, name);
        match self.fetch_bytes(&url) {
            Ok(bytes) => {
                if let Err(err) = fs::write(self.root.join(name), bytes) {
                    eprintln!("Failed to write {}: {}", name, err);
                }
            }
            Err(err) => eprintln!("Failed to download {}: {}", name, err),
        }
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, AssetStoreError> {
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(AssetStoreError::BadStatus(response.status().as_u16()));
        }
        Ok(response.bytes()?.to_vec())
    }

    fn champion_catalog(&self) -> &ChampionCatalog {
        self.champions.get_or_init(|| match self.load_document(CHAMPION_DOCUMENT) {
            Some(json) => ChampionCatalog::from_json(&json),
            None => ChampionCatalog::default(),
        })
    }

    fn spell_catalog(&self) -> &SpellCatalog {
        self.spells.get_or_init(|| match self.load_document(SPELL_DOCUMENT) {
            Some(json) => SpellCatalog::from_json(&json),
            None => SpellCatalog::default(),
        })
    }

    fn load_document(&self, name: &str) -> Option<JsonValue> {
        let text = fs::read_to_string(self.root.join(name)).ok()?;
        json::parse(&text).ok()
    }
}

// The version list is assumed pre-sorted newest-first by the remote; the
// first element is taken as-is.
fn pick_current_version(body: &JsonValue) -> Option<String> {
    body.members().next().and_then(JsonValue::as_str).map(str::to_string)
}

#[derive(Debug)]
pub enum AssetStoreError {
    Io(io::Error),
    Transport(reqwest::Error),
    BadStatus(u16),
    Malformed(json::Error),
    EmptyVersionList,
}

impl fmt::Display for AssetStoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssetStoreError::Io(err) => write!(f, "Asset directory error: {}", err),
            AssetStoreError::Transport(err) => write!(f, "Transport error: {}", err),
            AssetStoreError::BadStatus(status) => write!(f, "HTTP {}", status),
            AssetStoreError::Malformed(err) => write!(f, "Response is not valid JSON: {}", err),
            AssetStoreError::EmptyVersionList => write!(f, "Version list is empty"),
        }
    }
}

impl From<io::Error> for AssetStoreError {
    fn from(error: io::Error) -> Self {
        AssetStoreError::Io(error)
    }
}

impl From<reqwest::Error> for AssetStoreError {
    fn from(error: reqwest::Error) -> Self {
        AssetStoreError::Transport(error)
    }
}

impl From<json::Error> for AssetStoreError {
    fn from(error: json::Error) -> Self {
        AssetStoreError::Malformed(error)
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    fn temp_root(tag: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("summoner-tracker-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&path);
        path
    }

    fn offline_store(tag: &str) -> AssetStore {
        // prepare() does no network; the patch stays unset, so any icon
        // download attempt would yield None instead of touching the CDN.
        AssetStore::prepare(&temp_root(tag)).unwrap()
    }

    fn write_champion_catalog(store: &AssetStore) {
        fs::write(
            store.root.join(CHAMPION_DOCUMENT),
            r#"{"data": {"Ahri": {"id": "Ahri", "key": "103"}}}"#,
        )
        .unwrap();
    }

    #[test]
    fn version_list_first_element_wins() {
        let body = json::parse(r#"["15.1", "15.2"]"#).unwrap();
        assert_eq!(pick_current_version(&body), Some("15.1".to_string()));
    }

    #[test]
    fn empty_version_list_resolves_nothing() {
        let body = json::parse("[]").unwrap();
        assert_eq!(pick_current_version(&body), None);
    }

    #[test]
    fn emblem_path_is_lowercased_webp() {
        let store = offline_store("emblem");
        let path = store.emblem_path("GOLD");
        assert!(path.ends_with("ranked_emblems/gold.webp"));
    }

    #[test]
    fn patch_marker_round_trips() {
        let store = offline_store("marker");
        assert_eq!(store.cached_patch(), None);
        store.persist_patch("15.1.1").unwrap();
        assert_eq!(store.cached_patch(), Some("15.1.1".to_string()));
    }

    #[test]
    fn existing_icon_is_returned_without_any_download() {
        let store = offline_store("hit");
        write_champion_catalog(&store);
        let icon = store.root.join("champions").join("Ahri.png");
        fs::write(&icon, b"png-bytes").unwrap();

        // Patch is unset, so a download attempt could only return None;
        // getting the path back proves the existence check short-circuits.
        let first = store.champion_icon(103.into()).unwrap();
        let second = store.champion_icon(103.into()).unwrap();
        assert_eq!(first, icon);
        assert_eq!(first, second);
    }

    #[test]
    fn icon_path_ends_with_canonical_name() {
        let store = offline_store("name");
        write_champion_catalog(&store);
        let icon = store.root.join("champions").join("Ahri.png");
        fs::write(&icon, b"png-bytes").unwrap();

        let path = store.champion_icon(103.into()).unwrap();
        assert!(path.ends_with("champions/Ahri.png"));
    }

    #[test]
    fn unknown_champion_id_is_absent() {
        let store = offline_store("unknown");
        write_champion_catalog(&store);
        assert_eq!(store.champion_icon(9999.into()), None);
    }

    #[test]
    fn missing_icon_without_patch_is_absent() {
        let store = offline_store("nopatch");
        write_champion_catalog(&store);
        assert_eq!(store.champion_icon(103.into()), None);
        assert!(!store.root.join("champions").join("Ahri.png").exists());
    }

    #[test]
    fn spell_icon_uses_catalog_filename() {
        let store = offline_store("spell");
        fs::write(
            store.root.join(SPELL_DOCUMENT),
            r#"{"data": {"SummonerFlash": {"id": "SummonerFlash", "key": "4"}}}"#,
        )
        .unwrap();
        let icon = store.root.join("spells").join("SummonerFlash.png");
        fs::write(&icon, b"png-bytes").unwrap();

        assert_eq!(store.spell_icon(4.into()), Some(icon));
        assert_eq!(store.spell_icon(99.into()), None);
    }
}
