//! Config field documentation, the single source of truth for descriptions.
//!
//! Used by:
//! - `ftl config show` to annotate TOML output with inline comments
//! - `cargo xtask gen-docs` to generate `docs/CONFIGURATION.md`

use std::collections::HashMap;

/// Documentation for a config section.
pub struct SectionDoc {
    /// TOML section name (e.g., "grammar", "batch")
    pub name: &'static str,
    /// Human-readable description of the section
    pub description: &'static str,
    /// Fields in this section
    pub fields: &'static [FieldDoc],
}

/// Documentation for a config field.
pub struct FieldDoc {
    /// Field name as it appears in TOML
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Default value as a display string
    pub default_display: &'static str,
}

/// Config sections in canonical display order.
pub const CONFIG_SECTIONS: &[SectionDoc] = &[
    SectionDoc {
        name: "grammar",
        description: "Simulator log format",
        fields: &[
            FieldDoc {
                name: "board_state_event",
                description: "Event kind whose blocks carry board dumps",
                default_display: "forge.game.event.GameEventTurnPhase",
            },
            FieldDoc {
                name: "outcome_event",
                description: "Event kind whose block carries the game result",
                default_display: "forge.game.event.GameEventGameOutcome",
            },
            FieldDoc {
                name: "snapshot_phases",
                description: "Phase indicators selecting which board dumps become snapshots",
                default_display: r#"["Main phase, precombat phase", "Cleanup step phase"]"#,
            },
            FieldDoc {
                name: "board_marker",
                description: "Text every board dump contains",
                default_display: "Board state",
            },
        ],
    },
    SectionDoc {
        name: "batch",
        description: "Directory batch processing",
        fields: &[
            FieldDoc {
                name: "workers",
                description: "Number of parallel parse workers (auto-scale if unset)",
                default_display: "auto",
            },
            FieldDoc {
                name: "max_workers",
                description: "Upper bound for auto-scaled workers",
                default_display: "8",
            },
            FieldDoc {
                name: "log_extension",
                description: "Extension of game log files",
                default_display: "log",
            },
            FieldDoc {
                name: "logs_subdir",
                description: "Subdirectory of an experiment that holds the logs",
                default_display: "logs",
            },
            FieldDoc {
                name: "output_file",
                description: "Dataset file written into the experiment directory",
                default_display: "data.json",
            },
            FieldDoc {
                name: "record_prefix",
                description: "Prefix of per-game keys in the dataset",
                default_display: "game",
            },
        ],
    },
];

/// Insert `# description` lines above known sections and fields.
///
/// Commented-out template lines (`# workers = 4`) are annotated as well.
pub fn annotate_config(toml_str: &str) -> String {
    let mut lookup: HashMap<(&str, &str), &str> = HashMap::new();
    for section in CONFIG_SECTIONS {
        for field in section.fields {
            lookup.insert((section.name, field.name), field.description);
        }
    }

    let mut result = String::new();
    let mut current_section = String::new();

    for line in toml_str.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && !trimmed.starts_with("[[") {
            let name = trimmed
                .trim_start_matches('[')
                .split(']')
                .next()
                .unwrap_or("")
                .trim();
            current_section = name.to_string();
            if let Some(section) = CONFIG_SECTIONS.iter().find(|s| s.name == name) {
                result.push_str(&format!("# {}\n", section.description));
            }
            result.push_str(line);
            result.push('\n');
            continue;
        }

        if let Some((before_eq, _)) = trimmed.split_once('=') {
            let raw_key = before_eq.trim();
            let key = raw_key.strip_prefix('#').unwrap_or(raw_key).trim();
            if let Some(desc) = lookup.get(&(current_section.as_str(), key)) {
                result.push_str(&format!("# {}\n", desc));
            }
        }

        result.push_str(line);
        result.push('\n');
    }

    result
}

/// Append `# workers = auto` style templates for unset optional fields.
pub fn insert_optional_field_templates(toml_str: &str) -> String {
    let mut out = String::new();
    let mut current_section = String::new();
    let mut seen: Vec<String> = Vec::new();

    let flush = |section: &str, seen: &[String], out: &mut String| {
        if let Some(doc) = CONFIG_SECTIONS.iter().find(|s| s.name == section) {
            for field in doc.fields {
                if !seen.iter().any(|k| k == field.name) {
                    out.push_str(&format!("# {} = {}\n", field.name, field.default_display));
                }
            }
        }
    };

    for line in toml_str.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') && !trimmed.starts_with("[[") {
            flush(&current_section, &seen, &mut out);
            seen.clear();
            current_section = trimmed
                .trim_start_matches('[')
                .split(']')
                .next()
                .unwrap_or("")
                .trim()
                .to_string();
        } else if let Some((key, _)) = trimmed.split_once('=') {
            seen.push(key.trim().to_string());
        }
        out.push_str(line);
        out.push('\n');
    }
    flush(&current_section, &seen, &mut out);

    out
}

/// Generate the configuration reference as markdown.
pub fn generate_config_markdown() -> String {
    let mut md = String::new();

    md.push_str(
        "<!-- This file is auto-generated by `cargo xtask gen-docs`. Do not edit manually. -->\n\n",
    );
    md.push_str("# Configuration\n\n");
    md.push_str("FTL reads an optional TOML file at `~/.config/ftl/config.toml`.\n\n");

    for section in CONFIG_SECTIONS {
        md.push_str(&format!("## [{}]\n\n{}\n\n", section.name, section.description));
        md.push_str("| Field | Default | Description |\n|---|---|---|\n");
        for field in section.fields {
            md.push_str(&format!(
                "| `{}` | `{}` | {} |\n",
                field.name, field.default_display, field.description
            ));
        }
        md.push('\n');
    }

    md
}
