use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub region: String,
    pub realm: String,
    pub name: String,
}

impl Character {
    pub fn label(&self) -> String {
        format!("{} ({}, {})", self.name, self.realm, self.region)
    }

    fn same_as(&self, other: &Character) -> bool {
        self.region.eq_ignore_ascii_case(&other.region)
            && self.realm.to_lowercase() == other.realm.to_lowercase()
            && self.name.to_lowercase() == other.name.to_lowercase()
    }
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Fill all fields!")]
    MissingFields,
    #[error("read roster {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse roster {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("serialize roster")]
    Serialize(#[source] serde_json::Error),
    #[error("create roster directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write roster {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added(usize),
    Existing(usize),
}

impl AddOutcome {
    pub fn index(self) -> usize {
        match self {
            AddOutcome::Added(idx) | AddOutcome::Existing(idx) => idx,
        }
    }
}

/// Saved characters, persisted as a JSON array.
#[derive(Debug)]
pub struct RosterStore {
    path: PathBuf,
    characters: Vec<Character>,
}

impl RosterStore {
    pub fn load(path: PathBuf) -> Result<Self, RosterError> {
        let characters = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice::<Vec<Character>>(&bytes).map_err(|source| {
                RosterError::Parse {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => {
                return Err(RosterError::Read {
                    path: path.clone(),
                    source,
                });
            }
        };
        Ok(Self { path, characters })
    }

    pub fn empty(path: PathBuf) -> Self {
        Self {
            path,
            characters: Vec::new(),
        }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn get(&self, idx: usize) -> Option<&Character> {
        self.characters.get(idx)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn add(&mut self, region: &str, realm: &str, name: &str) -> Result<AddOutcome, RosterError> {
        let candidate = Character {
            region: region.trim().to_string(),
            realm: realm.trim().to_string(),
            name: name.trim().to_string(),
        };
        if candidate.region.is_empty() || candidate.realm.is_empty() || candidate.name.is_empty() {
            return Err(RosterError::MissingFields);
        }
        if let Some(idx) = self.characters.iter().position(|c| c.same_as(&candidate)) {
            return Ok(AddOutcome::Existing(idx));
        }
        let mut next = self.characters.clone();
        next.push(candidate);
        self.commit(next)?;
        Ok(AddOutcome::Added(self.characters.len() - 1))
    }

    pub fn remove(&mut self, idx: usize) -> Result<Option<Character>, RosterError> {
        if idx >= self.characters.len() {
            return Ok(None);
        }
        let mut next = self.characters.clone();
        let removed = next.remove(idx);
        self.commit(next)?;
        Ok(Some(removed))
    }

    /// Replaces the in-memory roster only once `characters` is on disk.
    fn commit(&mut self, characters: Vec<Character>) -> Result<(), RosterError> {
        self.save(&characters)?;
        self.characters = characters;
        Ok(())
    }

    fn save(&self, characters: &[Character]) -> Result<(), RosterError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| RosterError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let data = serde_json::to_vec_pretty(characters).map_err(RosterError::Serialize)?;
        fs::write(&self.path, data).map_err(|source| RosterError::Write {
            path: self.path.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
