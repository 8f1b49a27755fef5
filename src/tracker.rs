use std::collections::HashMap;

use chrono::Local;
use thiserror::Error;

use crate::api::ApiHandle;
use crate::app::{App, FETCH_ERROR_TEXT};
use crate::backgrounds::{AssetTable, DungeonCatalog};
use crate::dungeons::build_cards;
use crate::normalize::CanonicalKey;
use crate::profile::CharacterProfile;
use crate::rating::RatingDisplay;

/// Display order, run-to-card index and backdrop lookup, built once at startup.
pub struct DungeonBoard {
    pub order: Vec<String>,
    pub index: HashMap<CanonicalKey, usize>,
    pub table: AssetTable,
}

impl DungeonBoard {
    pub fn from_catalog(catalog: &DungeonCatalog) -> Self {
        Self {
            order: catalog.display_order(),
            index: catalog.entry_index(),
            table: catalog.asset_table(),
        }
    }
}

pub struct TrackerService;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("api error")]
    Api(#[source] anyhow::Error),
}

impl TrackerService {
    /// Fetches the pending character, if any, and fills tracker state.
    pub fn run(app: &mut App, api: &ApiHandle, board: &DungeonBoard) -> Result<(), TrackerError> {
        let Some(character) = app.tracker.pending.take() else {
            return Ok(());
        };
        match api.fetch_profile(&character) {
            Ok(profile) => {
                tracing::info!(
                    character = %character.label(),
                    runs = profile.runs.len(),
                    "profile loaded"
                );
                Self::apply_profile(app, board, profile);
                Ok(())
            }
            Err(err) => {
                Self::apply_failure(app, crate::error::render_error_message(&*err));
                Err(TrackerError::Api(err))
            }
        }
    }

    pub fn apply_profile(app: &mut App, board: &DungeonBoard, profile: CharacterProfile) {
        app.tracker.cards = build_cards(&board.order, &board.index, &board.table, &profile.runs);
        app.tracker.rating = RatingDisplay::from_rating(profile.rating);
        app.tracker.profile = Some(profile);
        app.tracker.message = None;
        app.tracker.last_error = None;
        app.tracker.fetched_at = Some(Local::now());
    }

    pub fn apply_failure(app: &mut App, error: String) {
        app.tracker.cards.clear();
        app.tracker.profile = None;
        app.tracker.rating = RatingDisplay::Unavailable;
        app.tracker.message = Some(FETCH_ERROR_TEXT.to_string());
        app.tracker.last_error = Some(error);
    }
}
