//! Forge game log ingestion.
//!
//! Rebuilds a [`GameRecord`] from the text log Forge writes for one
//! simulated match.
//!
//! # Structure
//!
//! - `header` - the mandatory `=== Players ===` preamble
//! - `splitter` - segmentation into `== GameEvent: <kind> ===` blocks
//! - `snapshot` - board-state blocks into [`TurnPhaseSnapshot`]s
//! - `outcome` - the game-outcome block into a winner
//! - `card` - `|`/`;` delimited card descriptions
//!
//! # Example
//!
//! ```
//! use ftl::gamelog::GameLogParser;
//!
//! let log = "=== Players ===
//! Alice - deck
//! Bob - deck
//! == GameEvent: forge.game.event.GameEventGameOutcome ===
//! result=Bob has won because all opponents have lost";
//!
//! let parsed = GameLogParser::default().parse_str(log)?;
//! assert_eq!(parsed.record.winner.as_deref(), Some("Bob"));
//! # Ok::<(), ftl::gamelog::LogError>(())
//! ```

pub mod card;
mod error;
pub mod grammar;
pub mod header;
pub mod outcome;
pub mod snapshot;
pub mod splitter;
mod types;

pub use card::{parse_card, parse_card_list, CardField};
pub use error::{BlockParseError, Diagnostic, LogError};
pub use grammar::{BlockRoute, Grammar, PLAYERS_HEADER};
pub use outcome::{extract_outcome, Outcome};
pub use snapshot::parse_snapshot;
pub use splitter::EventBlocks;
pub use types::{
    CardRecord, GameRecord, PlayerState, RawBlock, StatValue, TurnPhaseSnapshot, NONE_SENTINEL,
    SNAPSHOT_FIELDS, UNDEFINED_SENTINEL,
};

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use self::error::excerpt;

/// A record together with everything that degraded while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGame {
    pub record: GameRecord,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedGame {
    /// True when no block was skipped and nothing degraded.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn skipped_blocks(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_block_skip()).count()
    }
}

/// Assembles game records from Forge logs.
///
/// Holds only the grammar, so one parser can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct GameLogParser {
    grammar: Grammar,
}

impl GameLogParser {
    pub fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Parse a log file from a filesystem path.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ParsedGame, LogError> {
        let file = fs::File::open(path.as_ref())?;
        self.parse_reader(BufReader::new(file))
    }

    /// Parse a log held in memory.
    pub fn parse_str(&self, content: &str) -> Result<ParsedGame, LogError> {
        self.parse_reader(content.as_bytes())
    }

    /// Parse a log from any buffered reader.
    ///
    /// # Errors
    ///
    /// Fails only if the player header is missing or malformed, or if the
    /// reader itself fails. Block-level problems end up in
    /// [`ParsedGame::diagnostics`].
    pub fn parse_reader<R: BufRead>(&self, mut reader: R) -> Result<ParsedGame, LogError> {
        let players = header::read_header(&mut reader)?;
        let mut assembly = Assembly {
            grammar: &self.grammar,
            record: GameRecord::new(players),
            diagnostics: Vec::new(),
        };

        for block in EventBlocks::new(reader) {
            assembly.dispatch(block?);
        }

        Ok(ParsedGame {
            record: assembly.record,
            diagnostics: assembly.diagnostics,
        })
    }
}

/// In-progress state of one parse call.
struct Assembly<'g> {
    grammar: &'g Grammar,
    record: GameRecord,
    diagnostics: Vec<Diagnostic>,
}

impl Assembly<'_> {
    fn dispatch(&mut self, block: RawBlock) {
        let route = self.grammar.route(&block.kind, &block.body);
        debug!(ordinal = block.ordinal, kind = %block.kind, ?route, "dispatching block");

        let result = match route {
            BlockRoute::BoardState => self.apply_snapshot(&block),
            BlockRoute::Outcome => self.apply_outcome(&block),
            BlockRoute::Ignored => Ok(()),
        };

        if let Err(error) = result {
            warn!(
                ordinal = block.ordinal,
                kind = %block.kind,
                %error,
                body = %block.body,
                "skipping malformed block"
            );
            self.diagnostics.push(Diagnostic::BlockSkipped {
                ordinal: block.ordinal,
                kind: block.kind,
                excerpt: excerpt(&block.body),
                error,
            });
        }
    }

    fn apply_snapshot(&mut self, block: &RawBlock) -> Result<(), BlockParseError> {
        let mut degraded = Vec::new();
        let snapshot = parse_snapshot(&block.body, &self.record.players, &mut degraded)?;

        self.diagnostics
            .extend(degraded.into_iter().map(|d| Diagnostic::FieldDegraded {
                ordinal: block.ordinal,
                field: d.field,
                value: d.value,
            }));

        if let Some(previous) = self.record.insert_snapshot(snapshot) {
            debug!(
                ordinal = block.ordinal,
                turn = previous.turn,
                phase = %previous.activephase,
                "replaced earlier snapshot"
            );
        }
        Ok(())
    }

    fn apply_outcome(&mut self, block: &RawBlock) -> Result<(), BlockParseError> {
        match extract_outcome(&block.body)? {
            Outcome::Winner(winner) => self.record.winner = Some(winner),
            Outcome::Ambiguous(candidates) => {
                warn!(
                    ordinal = block.ordinal,
                    count = candidates.len(),
                    ?candidates,
                    "expected exactly one winner"
                );
                self.diagnostics.push(Diagnostic::AmbiguousOutcome {
                    ordinal: block.ordinal,
                    candidates,
                });
            }
        }
        Ok(())
    }
}
