use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RealmRecord {
    Plain(String),
    Named {
        slug: String,
        #[serde(default)]
        name: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Realm {
    pub slug: String,
    pub name: String,
}

impl From<RealmRecord> for Realm {
    fn from(record: RealmRecord) -> Self {
        match record {
            RealmRecord::Plain(value) => Realm {
                slug: value.clone(),
                name: value,
            },
            RealmRecord::Named { slug, name } => Realm {
                name: name.unwrap_or_else(|| slug.clone()),
                slug,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RealmDirectory {
    realms: Vec<Realm>,
}

impl RealmDirectory {
    /// A missing file is an empty directory; realms are then typed freely.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(anyhow!(err).context(format!("read realm list {}", path.display())));
            }
        };
        Self::from_json(&text).with_context(|| format!("parse realm list {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let records: Vec<RealmRecord> = serde_json::from_str(text)?;
        let realms = records
            .into_iter()
            .map(Realm::from)
            .filter(|realm| !realm.slug.trim().is_empty())
            .collect();
        Ok(Self { realms })
    }

    pub fn realms(&self) -> &[Realm] {
        &self.realms
    }

    pub fn is_empty(&self) -> bool {
        self.realms.is_empty()
    }

    /// The realm after (or before) the one whose slug or name matches
    /// `current`, wrapping around. Unknown input starts at the ends.
    pub fn step(&self, current: &str, forward: bool) -> Option<&Realm> {
        if self.realms.is_empty() {
            return None;
        }
        let len = self.realms.len();
        let idx = self.realms.iter().position(|realm| {
            realm.slug.eq_ignore_ascii_case(current.trim())
                || realm.name.eq_ignore_ascii_case(current.trim())
        });
        let next = match (idx, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        self.realms.get(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strings_and_objects() {
        let dir = RealmDirectory::from_json(
            r#"["Draenor", {"slug": "twisting-nether", "name": "Twisting Nether"}, {"slug": "kazzak"}]"#,
        )
        .unwrap();
        assert_eq!(
            dir.realms(),
            &[
                Realm { slug: "Draenor".into(), name: "Draenor".into() },
                Realm { slug: "twisting-nether".into(), name: "Twisting Nether".into() },
                Realm { slug: "kazzak".into(), name: "kazzak".into() },
            ]
        );
    }

    #[test]
    fn step_wraps_and_matches_names() {
        let dir = RealmDirectory::from_json(r#"["a", "b", {"slug": "c-c", "name": "C C"}]"#).unwrap();
        assert_eq!(dir.step("a", true).unwrap().slug, "b");
        assert_eq!(dir.step("C C", true).unwrap().slug, "a");
        assert_eq!(dir.step("a", false).unwrap().slug, "c-c");
        assert_eq!(dir.step("", true).unwrap().slug, "a");
        assert_eq!(dir.step("zzz", false).unwrap().slug, "c-c");
        assert!(RealmDirectory::default().step("a", true).is_none());
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let realms = RealmDirectory::load(&dir.path().join("realms.json")).unwrap();
        assert!(realms.is_empty());
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("realms.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = RealmDirectory::load(&path).unwrap_err();
        assert!(err.to_string().contains("realms.json"));
    }
}
