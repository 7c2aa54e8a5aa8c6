//! Type definitions for a reconstructed Forge match.
//!
//! A parsed log produces one [`GameRecord`]: the two player identities from
//! the log header, every board-state snapshot keyed by turn and phase, and
//! the winner once the outcome block has been read.
//!
//! # JSON Shape
//!
//! ```text
//! {
//!   "players": ["Ai(1)-Burn", "Ai(2)-Elves"],
//!   "turns": {
//!     "3": {
//!       "MAIN1": {
//!         "turn": 3,
//!         "activeplayer": "Ai(1)-Burn",
//!         "activephase": "MAIN1",
//!         "Ai(1)-Burn": { "life": 20, "hand": [ ... ] },
//!         "Ai(2)-Elves": { "life": 17, "hand": [ ... ], "battlefield": [ ... ] }
//!       }
//!     }
//!   },
//!   "winner": "Ai(1)-Burn"
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Placeholder for string fields the log did not state.
pub const NONE_SENTINEL: &str = "NONE";

/// Serialized form of [`StatValue::Undefined`].
pub const UNDEFINED_SENTINEL: &str = "undefined";

// ============================================================================
// Game Record
// ============================================================================

/// One simulated match rebuilt from a single log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Player identities in header declaration order.
    pub players: [String; 2],

    /// Turn number -> phase name -> snapshot.
    pub turns: BTreeMap<u32, BTreeMap<String, TurnPhaseSnapshot>>,

    /// Winning identity, `None` until an unambiguous outcome block is read.
    pub winner: Option<String>,
}

impl GameRecord {
    /// Create an empty record for the given players.
    pub fn new(players: [String; 2]) -> Self {
        Self {
            players,
            turns: BTreeMap::new(),
            winner: None,
        }
    }

    /// Store a snapshot under its (turn, phase) key.
    ///
    /// Returns the snapshot it replaced, if any.
    pub fn insert_snapshot(&mut self, snapshot: TurnPhaseSnapshot) -> Option<TurnPhaseSnapshot> {
        self.turns
            .entry(snapshot.turn)
            .or_default()
            .insert(snapshot.activephase.clone(), snapshot)
    }

    /// Look up the snapshot for a turn and phase.
    pub fn snapshot(&self, turn: u32, phase: &str) -> Option<&TurnPhaseSnapshot> {
        self.turns.get(&turn).and_then(|phases| phases.get(phase))
    }

    /// Total number of snapshots across all turns.
    pub fn snapshot_count(&self) -> usize {
        self.turns.values().map(BTreeMap::len).sum()
    }

    /// Highest turn number with at least one snapshot.
    pub fn last_turn(&self) -> Option<u32> {
        self.turns.keys().next_back().copied()
    }
}

// ============================================================================
// Snapshots
// ============================================================================

/// Snapshot field names; player identities share their JSON namespace.
pub const SNAPSHOT_FIELDS: [&str; 3] = ["turn", "activeplayer", "activephase"];

/// Board state at one (turn, phase) boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPhaseSnapshot {
    pub turn: u32,
    /// Identity of the player whose turn it is.
    pub activeplayer: String,
    pub activephase: String,
    /// Per-player state keyed by identity, flattened next to the fields above.
    #[serde(flatten)]
    pub players: BTreeMap<String, PlayerState>,
}

impl TurnPhaseSnapshot {
    /// State of the named player, if present.
    pub fn player(&self, identity: &str) -> Option<&PlayerState> {
        self.players.get(identity)
    }
}

/// One player's resources at a snapshot.
///
/// A list is `None` when the block did not mention it at all, which is not
/// the same thing as `Some(vec![])`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub life: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hand: Option<Vec<CardRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battlefield: Option<Vec<CardRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graveyard: Option<Vec<CardRecord>>,
}

// ============================================================================
// Cards
// ============================================================================

/// Observable attributes of one card at one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_line: String,
    pub power: StatValue,
    pub toughness: StatValue,
    pub manacost: String,
    #[serde(default)]
    pub counters: BTreeMap<String, u32>,
}

impl Default for CardRecord {
    fn default() -> Self {
        Self {
            name: NONE_SENTINEL.to_string(),
            type_line: NONE_SENTINEL.to_string(),
            power: StatValue::Undefined,
            toughness: StatValue::Undefined,
            manacost: NONE_SENTINEL.to_string(),
            counters: BTreeMap::new(),
        }
    }
}

impl CardRecord {
    /// True when the record carries nothing but sentinels.
    ///
    /// Empty list segments (`"a;;b"` or a bare `""`) parse to such records.
    pub fn is_degenerate(&self) -> bool {
        *self == Self::default()
    }
}

/// Power or toughness value.
///
/// Variable-stat cards report placeholders such as `*` which cannot be
/// represented as an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatValue {
    Defined(i32),
    #[default]
    Undefined,
}

impl StatValue {
    /// Parse a raw stat, mapping anything non-numeric to `Undefined`.
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse()
            .map(StatValue::Defined)
            .unwrap_or(StatValue::Undefined)
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            StatValue::Defined(v) => Some(*v),
            StatValue::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, StatValue::Defined(_))
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Defined(v) => write!(f, "{}", v),
            StatValue::Undefined => f.write_str(UNDEFINED_SENTINEL),
        }
    }
}

impl Serialize for StatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatValue::Defined(v) => serializer.serialize_i32(*v),
            StatValue::Undefined => serializer.serialize_str(UNDEFINED_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for StatValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(i32),
            Text(String),
        }

        Ok(match Option::<Repr>::deserialize(deserializer)? {
            Some(Repr::Number(v)) => StatValue::Defined(v),
            Some(Repr::Text(text)) => StatValue::parse(&text),
            None => StatValue::Undefined,
        })
    }
}

// ============================================================================
// Raw Blocks
// ============================================================================

/// A marker-delimited slice of the log, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    /// Event kind from the marker line, e.g. `forge.game.event.GameEventTurnPhase`.
    pub kind: String,
    /// Lines between this marker and the next, joined with `\n`.
    pub body: String,
    /// Zero-based position of the block in the log.
    pub ordinal: usize,
}
