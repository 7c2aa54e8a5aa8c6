//! Game outcome decoding.

use regex::Regex;
use std::sync::LazyLock;

use super::error::BlockParseError;

/// Literal every outcome body starts with.
pub const RESULT_PREFIX: &str = "result=";

static WINNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.+?) has won").expect("valid winner regex"));

/// What an outcome block says about the winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Winner(String),
    /// Zero or several candidates; the winner stays unresolved.
    Ambiguous(Vec<String>),
}

/// Extract the winner from an outcome body such as
/// `result=Ai(1)-Burn has won because all opponents have lost`.
pub fn extract_outcome(body: &str) -> Result<Outcome, BlockParseError> {
    let rest = body
        .strip_prefix(RESULT_PREFIX)
        .ok_or(BlockParseError::MissingResultPrefix)?;

    let mut candidates: Vec<String> = WINNER
        .captures_iter(rest)
        .filter_map(|caps| caps.get(1))
        .map(|m| {
            m.as_str()
                .trim_matches(|c: char| c.is_whitespace() || c == ';' || c == ',')
                .to_string()
        })
        .collect();

    if candidates.len() == 1 {
        Ok(Outcome::Winner(candidates.remove(0)))
    } else {
        Ok(Outcome::Ambiguous(candidates))
    }
}
