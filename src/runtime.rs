use std::time::{Duration, Instant};

use crossterm::event::{self, Event};

use crate::api::ApiHandle;
use crate::app::App;
use crate::backgrounds::DungeonCatalog;
use crate::config::Config;
use crate::error::AppError;
use crate::realms::RealmDirectory;
use crate::roster::RosterStore;
use crate::tracker::{DungeonBoard, TrackerService};
use crate::tui::{Term, restore_terminal, setup_terminal};
use crate::ui::render;

pub struct AppRuntime {
    app: App,
    api: ApiHandle,
    board: DungeonBoard,
    terminal: Term,
    tick_rate: Duration,
    last_tick: Instant,
}

impl AppRuntime {
    pub fn new(cfg: Config) -> Result<Self, AppError> {
        let board = load_board(&cfg)?;
        let api = ApiHandle::new(&cfg.api_base_url, cfg.request_timeout)
            .map_err(|err| AppError::runtime("create Raider.IO client", err))?;
        let app = bootstrap_app(&cfg);
        let terminal = setup_terminal().map_err(AppError::TerminalSetup)?;

        Ok(Self {
            app,
            api,
            board,
            terminal,
            tick_rate: cfg.tick_rate,
            last_tick: Instant::now(),
        })
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        while !self.app.should_quit {
            self.terminal
                .draw(|f| render(f, &mut self.app))
                .map_err(AppError::TerminalRender)?;

            // Fetch only after a frame has shown the pending load.
            if self.last_tick.elapsed() >= self.tick_rate {
                let fetched = self.app.is_loading();
                if let Err(err) = TrackerService::run(&mut self.app, &self.api, &self.board) {
                    tracing::error!(error = %crate::error::render_error_message(&err), "profile fetch failed");
                }
                self.last_tick = Instant::now();
                if fetched {
                    continue;
                }
            }

            let timeout = self
                .tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout).map_err(AppError::TerminalRender)?
                && let Event::Key(key) = event::read().map_err(AppError::TerminalRender)?
            {
                crate::input::handle_key_event(&mut self.app, key);
            }
        }

        Ok(())
    }

    pub fn shutdown(&mut self) -> Result<(), AppError> {
        restore_terminal(&mut self.terminal).map_err(AppError::TerminalRestore)
    }
}

fn load_board(cfg: &Config) -> Result<DungeonBoard, AppError> {
    let catalog = DungeonCatalog::load_or_builtin(&cfg.dungeons_path)
        .map_err(|err| AppError::runtime("load dungeon catalog", err))?;
    let board = DungeonBoard::from_catalog(&catalog);
    if board.table.is_empty() {
        tracing::warn!(path = %cfg.dungeons_path.display(), "dungeon catalog has no entries");
    }
    tracing::info!(
        dungeons = catalog.entries().len(),
        keys = board.table.len(),
        "dungeon backdrops ready"
    );
    Ok(board)
}

fn bootstrap_app(cfg: &Config) -> App {
    let mut status = None;

    let roster = match RosterStore::load(cfg.roster_path.clone()) {
        Ok(roster) => roster,
        Err(err) => {
            tracing::error!(error = %crate::error::render_error_message(&err), "failed to load saved characters");
            status = Some(format!("Roster load error: {err}"));
            RosterStore::empty(cfg.roster_path.clone())
        }
    };

    let realms = match RealmDirectory::load(&cfg.realms_path) {
        Ok(realms) => realms,
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "failed to load realm list");
            RealmDirectory::default()
        }
    };

    let mut app = App::new(roster, realms);
    app.status = status;
    if !app.roster.is_empty() {
        app.select_character(0);
    }
    app
}
