use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::normalize::{CanonicalKey, normalize};

const DEFAULT_CATALOG_JSON: &str = include_str!("../dungeons.json");

/// Immutable map from canonical dungeon name to a card backdrop asset.
#[derive(Debug, Clone, Default)]
pub struct AssetTable {
    assets: HashMap<CanonicalKey, String>,
}

impl AssetTable {
    /// Later pairs whose names normalize to an existing key replace the
    /// earlier asset.
    pub fn build<I, N, A>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, A)>,
        N: AsRef<str>,
        A: Into<String>,
    {
        let assets = pairs
            .into_iter()
            .map(|(name, asset)| (normalize(name.as_ref()), asset.into()))
            .collect();
        Self { assets }
    }

    /// `None` means no configured backdrop; callers render a muted card.
    pub fn resolve(&self, raw_dungeon_name: &str) -> Option<&str> {
        self.assets
            .get(&normalize(raw_dungeon_name))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub asset: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// The configured dungeon list: display order for the card grid plus the
/// spelling aliases that should share a backdrop.
#[derive(Debug, Clone, Deserialize)]
pub struct DungeonCatalog {
    dungeons: Vec<CatalogEntry>,
}

impl DungeonCatalog {
    pub fn builtin() -> Result<Self> {
        Self::from_json(DEFAULT_CATALOG_JSON).context("parse bundled dungeon catalog")
    }

    /// Uses `path` when it exists, the bundled catalog otherwise.
    pub fn load_or_builtin(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text)
                .with_context(|| format!("parse dungeon catalog {}", path.display())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::builtin(),
            Err(err) => {
                Err(anyhow!(err).context(format!("read dungeon catalog {}", path.display())))
            }
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let catalog: DungeonCatalog = serde_json::from_str(text)?;
        if let Some(entry) = catalog
            .dungeons
            .iter()
            .find(|entry| normalize(&entry.name).is_empty())
        {
            return Err(anyhow!(
                "dungeon name {:?} has no letters or digits",
                entry.name
            ));
        }
        Ok(catalog)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.dungeons
    }

    pub fn display_order(&self) -> Vec<String> {
        self.dungeons.iter().map(|entry| entry.name.clone()).collect()
    }

    /// Every entry name then its aliases, entry by entry.
    fn spellings(&self) -> impl Iterator<Item = (usize, &str, &CatalogEntry)> {
        self.dungeons.iter().enumerate().flat_map(|(idx, entry)| {
            std::iter::once(entry.name.as_str())
                .chain(entry.aliases.iter().map(String::as_str))
                .map(move |name| (idx, name, entry))
        })
    }

    pub fn asset_table(&self) -> AssetTable {
        let mut seen: HashMap<CanonicalKey, &str> = HashMap::new();
        for (_, name, entry) in self.spellings() {
            let key = normalize(name);
            if let Some(previous) = seen.insert(key.clone(), entry.asset.as_str())
                && previous != entry.asset
            {
                tracing::warn!(
                    key = %key,
                    previous = %previous,
                    asset = %entry.asset,
                    "dungeon key mapped to a different asset; keeping the later one"
                );
            }
        }
        AssetTable::build(
            self.spellings()
                .map(|(_, name, entry)| (name, entry.asset.as_str())),
        )
    }

    /// Canonical key of every name and alias to the entry's position in
    /// [`Self::display_order`]. Later spellings win, as in [`Self::asset_table`].
    pub fn entry_index(&self) -> HashMap<CanonicalKey, usize> {
        self.spellings()
            .map(|(idx, name, _)| (normalize(name), idx))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tracing_subscriber::layer::SubscriberExt;

    use super::*;

    #[test]
    fn spelling_variants_share_an_asset() {
        let table = AssetTable::build([
            ("Eco-Dome Al'dani", "eco.jpg"),
            ("Eco-Dome Al'dari", "eco.jpg"),
        ]);
        assert_eq!(table.resolve("Eco-Dome Al'dani"), Some("eco.jpg"));
        assert_eq!(table.resolve("Eco-Dome Al'dari"), Some("eco.jpg"));
        assert_eq!(table.resolve("ECO-DOME AL\u{2019}DANI"), Some("eco.jpg"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn spaces_do_not_stand_in_for_hyphens() {
        let table = AssetTable::build([("Eco-Dome Al'dani", "eco.jpg")]);
        assert_eq!(table.resolve("eco dome al\u{2019}dani"), None);
    }

    #[test]
    fn unknown_dungeon_resolves_to_none() {
        let table = AssetTable::build([("Halls of Atonement", "halls.jpg")]);
        assert_eq!(table.resolve("Unknown Dungeon"), None);
        assert_eq!(table.resolve(""), None);
    }

    #[test]
    fn later_duplicate_wins() {
        let table = AssetTable::build([
            ("Operation: Floodgate", "old.jpg"),
            ("operation floodgate", "flood.jpg"),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve("Operation \u{2014} Floodgate"), None);
        assert_eq!(table.resolve("OPERATION: FLOODGATE"), Some("flood.jpg"));
    }

    #[test]
    fn builtin_catalog_covers_season_dungeons() {
        let catalog = DungeonCatalog::builtin().unwrap();
        let order = catalog.display_order();
        assert_eq!(order.len(), 8);
        assert_eq!(order[0], "Eco-Dome Al'dani");
        assert_eq!(order[7], "Tazavesh: So'leah's Gambit");

        let table = catalog.asset_table();
        assert_eq!(table.resolve("Ara-Kara, City of Echoes"), Some("ara.jpg"));
        assert_eq!(table.resolve("Tazavesh: So\u{2019}leah\u{2019}s Gambit"), Some("gambit.jpg"));
        assert_eq!(table.resolve("Eco\u{2013}Dome Al'dari"), Some("eco.jpg"));
        assert_eq!(table.resolve("Dawnbreaker"), Some("dawn.jpg"));
    }

    #[test]
    fn alias_order_is_entry_then_aliases() {
        let catalog = DungeonCatalog::from_json(
            r#"{"dungeons":[
                {"name":"Halls of Atonement","asset":"a.jpg","aliases":["Halls"]},
                {"name":"Halls","asset":"b.jpg"}
            ]}"#,
        )
        .unwrap();
        let table = catalog.asset_table();
        assert_eq!(table.resolve("halls"), Some("b.jpg"));
        assert_eq!(table.resolve("halls of atonement"), Some("a.jpg"));
        assert_eq!(catalog.entries()[0].aliases, vec!["Halls".to_string()]);
    }

    struct CountEvents(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for CountEvents {
        fn on_event(
            &self,
            _event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn only_the_catalog_reports_conflicts() {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountEvents(count.clone()));
        tracing::subscriber::with_default(subscriber, || {
            let table = AssetTable::build([("Halls", "a.jpg"), ("halls", "b.jpg")]);
            assert_eq!(table.resolve("HALLS"), Some("b.jpg"));
            assert_eq!(count.load(Ordering::SeqCst), 0);

            let catalog = DungeonCatalog::from_json(
                r#"{"dungeons":[
                    {"name":"Halls of Atonement","asset":"a.jpg","aliases":["Halls"]},
                    {"name":"Halls","asset":"b.jpg"}
                ]}"#,
            )
            .unwrap();
            catalog.asset_table();
            assert_eq!(count.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn entry_index_covers_aliases() {
        let catalog = DungeonCatalog::builtin().unwrap();
        let index = catalog.entry_index();
        let order = catalog.display_order();
        let dawn = index[&normalize("Dawnbreaker")];
        assert_eq!(order[dawn], "The Dawnbreaker");
        assert_eq!(index[&normalize("The Dawnbreaker")], dawn);
        assert_eq!(order[index[&normalize("Eco\u{2013}Dome Al'dari")]], "Eco-Dome Al'dani");
        assert!(!index.contains_key(&normalize("The Stonevault")));
    }

    #[test]
    fn entry_index_follows_overwrite_order() {
        let catalog = DungeonCatalog::from_json(
            r#"{"dungeons":[
                {"name":"Halls of Atonement","asset":"a.jpg","aliases":["Halls"]},
                {"name":"Halls","asset":"b.jpg"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(catalog.entry_index()[&normalize("halls")], 1);
    }

    #[test]
    fn catalog_rejects_names_without_key() {
        let err = DungeonCatalog::from_json(r#"{"dungeons":[{"name":"!!!","asset":"x.jpg"}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("no letters or digits"));
    }

    #[test]
    fn missing_override_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = DungeonCatalog::load_or_builtin(&dir.path().join("dungeons.json")).unwrap();
        assert_eq!(catalog.entries().len(), 8);
    }

    #[test]
    fn override_file_replaces_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dungeons.json");
        std::fs::write(
            &path,
            r#"{"dungeons":[{"name":"The Rookery","asset":"rookery.png"}]}"#,
        )
        .unwrap();
        let catalog = DungeonCatalog::load_or_builtin(&path).unwrap();
        assert_eq!(catalog.display_order(), vec!["The Rookery".to_string()]);
        assert_eq!(catalog.asset_table().resolve("the rookery"), Some("rookery.png"));
    }
}
