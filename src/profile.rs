//! Raider.IO character-profile payloads and the adapter into the tracker's
//! own record types. Only this module knows the wire shape.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProfile {
    pub name: Option<String>,
    pub race: Option<String>,
    pub class: Option<String>,
    pub active_spec_name: Option<String>,
    pub gear: Option<RawGear>,
    #[serde(default)]
    pub mythic_plus_scores_by_season: Vec<RawSeasonScores>,
    #[serde(default)]
    pub mythic_plus_best_runs: Vec<RawRun>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGear {
    pub item_level_equipped: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSeasonScores {
    pub scores: Option<RawScores>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawScores {
    pub all: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRun {
    pub dungeon: Option<String>,
    pub mythic_level: Option<u32>,
    pub score: Option<f64>,
    pub clear_time_ms: Option<u64>,
    pub par_time_ms: Option<u64>,
}

/// One best run as the tracker uses it.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub dungeon: String,
    pub mythic_level: u32,
    pub score: Option<f64>,
    pub clear_time_ms: Option<u64>,
    pub par_time_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterProfile {
    pub name: Option<String>,
    pub race: Option<String>,
    pub class: Option<String>,
    pub spec: Option<String>,
    pub item_level: Option<f64>,
    pub rating: Option<f64>,
    pub runs: Vec<RunRecord>,
}

impl CharacterProfile {
    /// `name | race | class | spec | N ilvl`, with `-` for missing parts.
    pub fn info_line(&self) -> String {
        let part = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        let ilvl = self
            .item_level
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "{} | {} | {} | {} | {} ilvl",
            part(&self.name),
            part(&self.race),
            part(&self.class),
            part(&self.spec),
            ilvl
        )
    }
}

impl From<RawProfile> for CharacterProfile {
    fn from(raw: RawProfile) -> Self {
        let rating = raw
            .mythic_plus_scores_by_season
            .first()
            .and_then(|season| season.scores.as_ref())
            .and_then(|scores| scores.all);
        let runs = raw
            .mythic_plus_best_runs
            .into_iter()
            .filter_map(RunRecord::from_raw)
            .collect();
        Self {
            name: non_empty(raw.name),
            race: non_empty(raw.race),
            class: non_empty(raw.class),
            spec: non_empty(raw.active_spec_name),
            item_level: raw.gear.and_then(|gear| gear.item_level_equipped),
            rating,
            runs,
        }
    }
}

impl RunRecord {
    fn from_raw(raw: RawRun) -> Option<Self> {
        let dungeon = non_empty(raw.dungeon)?;
        Some(Self {
            dungeon,
            mythic_level: raw.mythic_level.unwrap_or_default(),
            score: raw.score,
            clear_time_ms: raw.clear_time_ms,
            par_time_ms: raw.par_time_ms,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn parse_profile(body: &str) -> anyhow::Result<CharacterProfile> {
    let raw: RawProfile = serde_json::from_str(body)?;
    Ok(raw.into())
}
