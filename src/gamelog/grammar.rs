//! Event names and body markers that select which blocks get decoded.

/// First line of every Forge game log.
pub const PLAYERS_HEADER: &str = "=== Players ===";

pub const DEFAULT_BOARD_STATE_EVENT: &str = "forge.game.event.GameEventTurnPhase";
pub const DEFAULT_OUTCOME_EVENT: &str = "forge.game.event.GameEventGameOutcome";
pub const DEFAULT_BOARD_MARKER: &str = "Board state";

pub fn default_snapshot_phases() -> Vec<String> {
    vec![
        "Main phase, precombat phase".to_string(),
        "Cleanup step phase".to_string(),
    ]
}

/// How a block is routed by the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRoute {
    BoardState,
    Outcome,
    Ignored,
}

/// Event kinds and phase indicators of one simulator output mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    pub board_state_event: String,
    pub outcome_event: String,
    /// A board-state body must mention one of these phases...
    pub snapshot_phases: Vec<String>,
    /// ...and this marker.
    pub board_marker: String,
}

impl Default for Grammar {
    fn default() -> Self {
        Self {
            board_state_event: DEFAULT_BOARD_STATE_EVENT.to_string(),
            outcome_event: DEFAULT_OUTCOME_EVENT.to_string(),
            snapshot_phases: default_snapshot_phases(),
            board_marker: DEFAULT_BOARD_MARKER.to_string(),
        }
    }
}

impl Grammar {
    /// True if `body` is a board-state report for a snapshot phase.
    ///
    /// The event kind alone is not enough: Forge emits turn-phase events for
    /// every step, but only some of them carry a board dump.
    pub fn is_board_state(&self, body: &str) -> bool {
        body.contains(self.board_marker.as_str())
            && self
                .snapshot_phases
                .iter()
                .any(|phase| body.contains(phase.as_str()))
    }

    /// Decide what to do with a block of the given kind and body.
    pub fn route(&self, kind: &str, body: &str) -> BlockRoute {
        if kind == self.board_state_event {
            if self.is_board_state(body) {
                BlockRoute::BoardState
            } else {
                BlockRoute::Ignored
            }
        } else if kind == self.outcome_event {
            BlockRoute::Outcome
        } else {
            BlockRoute::Ignored
        }
    }
}
