//! Card description parsing.
//!
//! Forge writes each card as `|`-separated attributes, and card lists as
//! `;`-separated cards:
//!
//! ```text
//! Diamond Weapon|Set:FIN|Type:Legendary Artifact Creature - Elemental|Power:8|Toughness:8|ManaCost:{7}{G}{G}|Tapped|Counters:P1P1=1
//! ```
//!
//! Parsing is total. Unknown attributes and bare flags (`Tapped`,
//! `Attacking`) are dropped, and unparseable values fall back to sentinels.

use super::types::{CardRecord, StatValue, NONE_SENTINEL};

/// Separator between card attributes.
const FIELD_SEPARATOR: char = '|';
/// Separator between cards in a list field.
const CARD_SEPARATOR: char = ';';

/// Card attributes the parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Type,
    Power,
    Toughness,
    ManaCost,
    Counters,
}

impl CardField {
    /// Match an attribute name case-insensitively.
    ///
    /// Returns `None` for attributes this model does not carry (`Set`, `Art`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        const KNOWN: [(&str, CardField); 5] = [
            ("type", CardField::Type),
            ("power", CardField::Power),
            ("toughness", CardField::Toughness),
            ("manacost", CardField::ManaCost),
            ("counters", CardField::Counters),
        ];
        let name = name.trim();
        KNOWN
            .iter()
            .find(|(known, _)| name.eq_ignore_ascii_case(known))
            .map(|(_, field)| *field)
    }

    pub fn name(&self) -> &'static str {
        match self {
            CardField::Type => "type",
            CardField::Power => "power",
            CardField::Toughness => "toughness",
            CardField::ManaCost => "manacost",
            CardField::Counters => "counters",
        }
    }
}

/// A field value that could not be read strictly and was replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Degradation {
    /// Dotted field path, e.g. `power` or `counters.P1P1`.
    pub field: String,
    pub value: String,
}

/// Parse one card description, discarding degradation details.
pub fn parse_card(description: &str) -> CardRecord {
    parse_card_with(description, &mut Vec::new())
}

/// Parse one card description, recording every degraded field in `degraded`.
pub fn parse_card_with(description: &str, degraded: &mut Vec<Degradation>) -> CardRecord {
    let mut parts = description.split(FIELD_SEPARATOR);
    let mut card = CardRecord::default();

    let name = parts.next().unwrap_or_default().trim();
    if !name.is_empty() {
        card.name = name.to_string();
    }

    for part in parts {
        // Flags such as "Tapped" carry no value
        let Some((raw_name, value)) = part.split_once(':') else {
            continue;
        };
        let Some(field) = CardField::from_name(raw_name) else {
            continue;
        };

        match field {
            CardField::Type => card.type_line = non_empty_or_sentinel(value),
            CardField::ManaCost => card.manacost = non_empty_or_sentinel(value),
            CardField::Power | CardField::Toughness => {
                let stat = StatValue::parse(value);
                if !stat.is_defined() {
                    degraded.push(Degradation {
                        field: field.name().to_string(),
                        value: value.to_string(),
                    });
                }
                if field == CardField::Power {
                    card.power = stat;
                } else {
                    card.toughness = stat;
                }
            }
            CardField::Counters => parse_counters(value, &mut card, degraded),
        }
    }

    card
}

/// Parse a `;`-joined card list. Every segment yields a record, including
/// empty ones.
pub fn parse_card_list(value: &str) -> Vec<CardRecord> {
    parse_card_list_with(value, &mut Vec::new())
}

/// Like [`parse_card_list`], recording degraded fields.
pub fn parse_card_list_with(value: &str, degraded: &mut Vec<Degradation>) -> Vec<CardRecord> {
    value
        .split(CARD_SEPARATOR)
        .map(|segment| parse_card_with(segment, degraded))
        .collect()
}

/// Parse `Name=Count,Name=Count`, skipping malformed pairs.
fn parse_counters(value: &str, card: &mut CardRecord, degraded: &mut Vec<Degradation>) {
    for pair in value.split(',') {
        if pair.trim().is_empty() {
            continue;
        }
        let parsed = pair.split_once('=').and_then(|(name, count)| {
            let name = name.trim();
            let count = count.trim().parse::<u32>().ok()?;
            (!name.is_empty()).then(|| (name.to_string(), count))
        });
        match parsed {
            Some((name, count)) => {
                card.counters.insert(name, count);
            }
            None => degraded.push(Degradation {
                field: CardField::Counters.name().to_string(),
                value: pair.to_string(),
            }),
        }
    }
}

fn non_empty_or_sentinel(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        NONE_SENTINEL.to_string()
    } else {
        value.to_string()
    }
}
