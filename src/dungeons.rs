use std::collections::HashMap;

use crate::backgrounds::AssetTable;
use crate::normalize::{CanonicalKey, normalize};
use crate::profile::RunRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub title: String,
    pub level: String,
    pub score: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DungeonCard {
    pub name: String,
    pub asset: Option<String>,
    pub run: Option<RunSummary>,
}

impl DungeonCard {
    pub fn is_muted(&self) -> bool {
        self.run.is_none() || self.asset.is_none()
    }
}

pub const CARD_COLUMNS: usize = 4;

/// Grid rows needed for `cards` cards.
pub fn card_rows(cards: usize) -> usize {
    cards.div_ceil(CARD_COLUMNS)
}

/// One card per configured dungeon in `order`, then one per run whose
/// dungeon is not configured. `index` maps every configured name and alias
/// to its position in `order`.
pub fn build_cards(
    order: &[String],
    index: &HashMap<CanonicalKey, usize>,
    table: &AssetTable,
    runs: &[RunRecord],
) -> Vec<DungeonCard> {
    let mut by_slot: Vec<Option<&RunRecord>> = vec![None; order.len()];
    let mut unconfigured: Vec<(CanonicalKey, &RunRecord)> = Vec::new();
    for run in runs {
        let key = normalize(&run.dungeon);
        match index.get(&key).and_then(|&slot| by_slot.get_mut(slot)) {
            Some(slot) => *slot = Some(run),
            None => match unconfigured.iter_mut().find(|(seen, _)| *seen == key) {
                Some(entry) => entry.1 = run,
                None => unconfigured.push((key, run)),
            },
        }
    }

    let mut cards = Vec::with_capacity(order.len() + unconfigured.len());
    for (name, run) in order.iter().zip(by_slot) {
        cards.push(DungeonCard {
            name: name.clone(),
            asset: table.resolve(name).map(str::to_string),
            run: run.map(summarize),
        });
    }
    for (_, run) in unconfigured {
        cards.push(DungeonCard {
            name: run.dungeon.clone(),
            asset: table.resolve(&run.dungeon).map(str::to_string),
            run: Some(summarize(run)),
        });
    }

    cards
}

fn summarize(run: &RunRecord) -> RunSummary {
    RunSummary {
        title: run.dungeon.clone(),
        level: format!("+{}", run.mythic_level),
        score: format!("Score: {}", score_points(run.score)),
        time: format_timing(run.clear_time_ms, run.par_time_ms),
    }
}

fn score_points(score: Option<f64>) -> i64 {
    match score {
        Some(s) if s.is_finite() => s.round() as i64,
        _ => 0,
    }
}

/// `mm:ss / P` with `P` in whole par minutes, or `UNFINISHED`.
pub fn format_timing(clear_ms: Option<u64>, par_ms: Option<u64>) -> String {
    match (clear_ms, par_ms) {
        (Some(clear), Some(par)) => format!("{} / {}", format_clock(clear), par / 60_000),
        _ => "UNFINISHED".to_string(),
    }
}

pub fn format_clock(ms: u64) -> String {
    let total_secs = ms / 1000;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
