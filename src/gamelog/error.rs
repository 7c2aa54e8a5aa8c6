//! Errors and diagnostics produced while reading a game log.
//!
//! Only [`LogError`] aborts a parse. Everything else is scoped to a block or
//! a field and is collected as a [`Diagnostic`] next to the record.

use std::fmt;

/// Longest body excerpt kept in a [`Diagnostic::BlockSkipped`].
pub const EXCERPT_LIMIT: usize = 200;

/// Fatal errors: no record is produced.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to read log: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing player header: expected '{expected}', found {found:?}")]
    MissingHeader {
        expected: &'static str,
        found: Option<String>,
    },

    #[error("Log ended before player {index} was declared")]
    TruncatedHeader { index: usize },

    #[error("Malformed declaration for player {index}: {line:?}")]
    MalformedPlayerLine { index: usize, line: String },

    #[error("Both players are declared as {0:?}")]
    DuplicateIdentity(String),

    #[error("Player {index} identity {identity:?} collides with a snapshot field")]
    ReservedIdentity { index: usize, identity: String },
}

impl LogError {
    /// True for header problems, as opposed to I/O failures.
    pub fn is_header_error(&self) -> bool {
        !matches!(self, LogError::Io(_))
    }
}

/// A single event block failed structural validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockParseError {
    #[error("missing required key '{0}'")]
    MissingKey(String),

    #[error("key '{key}' is not an integer: {value:?}")]
    InvalidInteger { key: String, value: String },

    #[error("invalid active player {0:?} (expected p0 or p1)")]
    InvalidPlayerIndex(String),

    #[error("outcome body does not start with 'result='")]
    MissingResultPrefix,
}

/// Recoverable problems reported alongside a parsed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A block was dropped; the rest of the log was still read.
    BlockSkipped {
        ordinal: usize,
        kind: String,
        error: BlockParseError,
        excerpt: String,
    },

    /// A card field fell back to its sentinel.
    FieldDegraded {
        ordinal: usize,
        field: String,
        value: String,
    },

    /// The outcome block named zero or several winners.
    AmbiguousOutcome {
        ordinal: usize,
        candidates: Vec<String>,
    },
}

impl Diagnostic {
    /// Block ordinal the diagnostic refers to.
    pub fn ordinal(&self) -> usize {
        match self {
            Diagnostic::BlockSkipped { ordinal, .. }
            | Diagnostic::FieldDegraded { ordinal, .. }
            | Diagnostic::AmbiguousOutcome { ordinal, .. } => *ordinal,
        }
    }

    pub fn is_block_skip(&self) -> bool {
        matches!(self, Diagnostic::BlockSkipped { .. })
    }

    pub fn is_degradation(&self) -> bool {
        matches!(self, Diagnostic::FieldDegraded { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::BlockSkipped {
                ordinal,
                kind,
                error,
                excerpt,
            } => write!(
                f,
                "block {} ({}) skipped: {} | {}",
                ordinal,
                kind,
                error,
                excerpt.replace('\n', "\\n")
            ),
            Diagnostic::FieldDegraded {
                ordinal,
                field,
                value,
            } => write!(
                f,
                "block {}: field '{}' degraded to sentinel (value {:?})",
                ordinal, field, value
            ),
            Diagnostic::AmbiguousOutcome {
                ordinal,
                candidates,
            } => write!(
                f,
                "block {}: expected exactly one winner, found {}: {:?}",
                ordinal,
                candidates.len(),
                candidates
            ),
        }
    }
}

/// Shorten a block body for inclusion in a diagnostic.
pub fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= EXCERPT_LIMIT {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(EXCERPT_LIMIT).collect();
        format!("{}...", cut)
    }
}
