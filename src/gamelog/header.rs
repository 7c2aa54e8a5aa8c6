//! Player header parsing.
//!
//! ```text
//! === Players ===
//! Ai(1)-Burn - Burn.dck (60 cards)
//! Ai(2)-Elves - Elves.dck (60 cards)
//! ```

use regex::Regex;
use std::io::BufRead;
use std::sync::LazyLock;

use super::error::LogError;
use super::grammar::PLAYERS_HEADER;
use super::types::SNAPSHOT_FIELDS;

/// ` - ` between identity and deck description, any padding around the dash.
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+-\s+").expect("valid separator regex"));

/// Identity declared on one player line, or `None` if the line is malformed.
pub fn player_identity(line: &str) -> Option<&str> {
    let m = SEPARATOR.find(line)?;
    let identity = line[..m.start()].trim();
    (!identity.is_empty()).then_some(identity)
}

/// Read the three header lines from `reader`, leaving it positioned at the
/// first line of the event stream.
///
/// The two identities must differ and must not shadow a snapshot field,
/// since they become keys of every snapshot.
pub fn read_header<R: BufRead>(reader: &mut R) -> Result<[String; 2], LogError> {
    let first = next_line(reader)?;
    if first.as_deref().map(str::trim) != Some(PLAYERS_HEADER) {
        return Err(LogError::MissingHeader {
            expected: PLAYERS_HEADER,
            found: first,
        });
    }

    let mut players: [String; 2] = Default::default();
    for (index, slot) in players.iter_mut().enumerate() {
        let line = next_line(reader)?.ok_or(LogError::TruncatedHeader { index })?;
        let identity =
            player_identity(&line).ok_or_else(|| LogError::MalformedPlayerLine {
                index,
                line: line.clone(),
            })?;
        if SNAPSHOT_FIELDS.contains(&identity) {
            return Err(LogError::ReservedIdentity {
                index,
                identity: identity.to_string(),
            });
        }
        *slot = identity.to_string();
    }

    if players[0] == players[1] {
        return Err(LogError::DuplicateIdentity(players[0].clone()));
    }

    Ok(players)
}

fn next_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, LogError> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&bytes);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
