//! Board-state block decoding.
//!
//! A board-state body is free text with interleaved `key=value` lines:
//!
//! ```text
//! Turn 3 (Ai(1)-Burn), Main phase, precombat phase
//! Board state
//! turn=3
//! activeplayer=p0
//! activephase=MAIN1
//! p0life=20
//! p0hand=Mountain;Lightning Bolt|Type:Instant|ManaCost:{R}
//! p1life=17
//! p1battlefield=Llanowar Elves|Type:Creature - Elf Druid|Power:1|Toughness:1
//! ```
//!
//! Callers must check [`Grammar::is_board_state`](super::grammar::Grammar::is_board_state)
//! before handing a body to [`parse_snapshot`].

use std::collections::{BTreeMap, HashMap};

use super::card::{parse_card_list_with, Degradation};
use super::error::BlockParseError;
use super::types::{CardRecord, PlayerState, TurnPhaseSnapshot};

/// Flatten `key=value` lines into a map, splitting on the first `=`.
///
/// Lines without `=` are log noise and are skipped. A repeated key keeps
/// its last value.
pub fn key_values(body: &str) -> HashMap<&str, &str> {
    body.lines()
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value))
        .collect()
}

/// Decode a board-state body into a snapshot for `players`.
///
/// Degraded card fields are appended to `degraded`. On error nothing is
/// produced for the block.
pub fn parse_snapshot(
    body: &str,
    players: &[String; 2],
    degraded: &mut Vec<Degradation>,
) -> Result<TurnPhaseSnapshot, BlockParseError> {
    let fields = key_values(body);

    let turn = required_int(&fields, "turn")?;
    let active_index = player_index(required(&fields, "activeplayer")?)?;
    let activephase = required(&fields, "activephase")?.trim().to_string();

    // Card lists are parsed into a scratch buffer so a failing block leaves
    // no degradations behind.
    let mut scratch = Vec::new();
    let mut states = BTreeMap::new();
    for (index, identity) in players.iter().enumerate() {
        let prefix = format!("p{}", index);
        let life = required_int(&fields, &format!("{}life", prefix))?;

        let mut list = |name: &str| -> Option<Vec<CardRecord>> {
            fields
                .get(format!("{}{}", prefix, name).as_str())
                .map(|value| parse_card_list_with(value, &mut scratch))
        };
        let state = PlayerState {
            life,
            hand: list("hand"),
            battlefield: list("battlefield"),
            graveyard: list("graveyard"),
        };
        states.insert(identity.clone(), state);
    }

    degraded.append(&mut scratch);
    Ok(TurnPhaseSnapshot {
        turn,
        activeplayer: players[active_index].clone(),
        activephase,
        players: states,
    })
}

/// Map the `activeplayer` token (`p0`/`p1`) to a player index.
pub fn player_index(token: &str) -> Result<usize, BlockParseError> {
    match token.trim() {
        "p0" => Ok(0),
        "p1" => Ok(1),
        other => Err(BlockParseError::InvalidPlayerIndex(other.to_string())),
    }
}

fn required<'a>(fields: &HashMap<&str, &'a str>, key: &str) -> Result<&'a str, BlockParseError> {
    fields
        .get(key)
        .copied()
        .ok_or_else(|| BlockParseError::MissingKey(key.to_string()))
}

fn required_int<T: std::str::FromStr>(
    fields: &HashMap<&str, &str>,
    key: &str,
) -> Result<T, BlockParseError> {
    let value = required(fields, key)?;
    value
        .trim()
        .parse()
        .map_err(|_| BlockParseError::InvalidInteger {
            key: key.to_string(),
            value: value.to_string(),
        })
}
