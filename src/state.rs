use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Recommended side of the line, as written by the upstream model pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PickDirection {
    Over,
    Under,
}

/// One prediction record from the slate document.
///
/// The schema is fixed by the generator: player name, bookmaker line, model
/// projection, recommended side, confidence score (0-100), and an optional
/// game start time. `game_time` may be absent or `null`; both mean "no date
/// available". Extra fields in the document are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pick {
    pub player: String,
    pub line: f64,
    pub predicted: f64,
    pub pick: PickDirection,
    pub confidence: f64,
    #[serde(default)]
    pub game_time: Option<String>,
}

/// Explicit load state machine for the slate, so "loading", "failed" and
/// "genuinely empty" render as distinct views instead of all collapsing into
/// an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

pub fn phase_label(phase: LoadPhase) -> &'static str {
    match phase {
        LoadPhase::Idle => "IDLE",
        LoadPhase::Loading => "LOADING",
        LoadPhase::Loaded => "LOADED",
        LoadPhase::Failed => "FAILED",
    }
}

/// State updates sent from the provider thread to the UI loop.
#[derive(Debug, Clone)]
pub enum Delta {
    Loading,
    SetPicks(Vec<Pick>),
    LoadFailed(String),
    Log(String),
}

/// Requests sent from the UI loop to the provider thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderCommand {
    Reload,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: LoadPhase,
    pub picks: Vec<Pick>,
    pub selected: usize,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Idle,
            picks: Vec::new(),
            selected: 0,
            logs: VecDeque::new(),
            help_overlay: false,
        }
    }

    /// Display order for the current slate, re-derived on every render.
    pub fn ranked(&self) -> Vec<&Pick> {
        crate::ranking::rank_picks(&self.picks)
    }

    pub fn select_next(&mut self) {
        let total = self.picks.len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.picks.len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        if self.selected == 0 {
            self.selected = total - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.picks.len().saturating_sub(1);
    }

    pub fn clamp_selection(&mut self) {
        let total = self.picks.len();
        if total == 0 {
            self.selected = 0;
        } else if self.selected >= total {
            self.selected = total - 1;
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::Loading => {
            // Keep the previous slate on screen while a reload is in flight.
            state.phase = LoadPhase::Loading;
        }
        Delta::SetPicks(picks) => {
            state.phase = LoadPhase::Loaded;
            state.picks = picks;
            state.clamp_selection();
        }
        Delta::LoadFailed(msg) => {
            // A failed reload does not throw away an already-loaded slate.
            state.phase = if state.picks.is_empty() {
                LoadPhase::Failed
            } else {
                LoadPhase::Loaded
            };
            state.push_log(format!("[WARN] Load failed: {msg}"));
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}
