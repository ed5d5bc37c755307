//! Recover option records from command text.
//!
//! A single pattern finds roll commands and rule references anywhere in
//! freeform text; each body is then handed to its per-kind parser. Bodies
//! end at the first `]`, so text containing brackets is truncated there.
//! Nothing here fails: text that is not a command simply yields no match.

use enricher_data::{CommandKind, CommandOptions, RollMode};
use lazy_static::lazy_static;
use log::trace;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::serialize::serialize;

mod attack;
mod check;
mod damage;
mod heal;
mod helpers;
mod item;
mod reference;
mod roll;
mod save;

lazy_static! {
    static ref COMMAND: Regex = Regex::new(concat!(
        r"(?P<roll>\[\[/(?P<kind>check|skill|tool|attack|damage|heal|roll|publicroll|gmroll|blindroll|selfroll|save|concentration|item)",
        r"(?P<body>[^\]]*)\]\](?:\{(?P<label>[^}]*)\})?)",
        r"|(?P<reference>&Reference\[(?P<refbody>[^\]]*)\])",
    ))
    .expect("command pattern is valid");
}

/// A command found in text, with the byte span it occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCommand {
    pub kind: CommandKind,
    pub options: CommandOptions,
    pub original_text: String,
    pub start: usize,
    pub end: usize,
}

impl ParsedCommand {
    /// Serialize the recovered options back under the same kind.
    pub fn to_command_text(&self) -> String {
        serialize(self.kind, &self.options)
    }
}

/// Parse the first command in `text`.
///
/// ```
/// use enricher_data::{CommandKind, CommandOptions};
/// use enricher_script::parse_command;
///
/// let parsed = parse_command("[[/check dexterity]]").expect("a command");
/// assert_eq!(parsed.kind, CommandKind::Check);
/// let CommandOptions::Check(options) = parsed.options else { panic!("check options") };
/// assert_eq!(options.ability.as_deref(), Some("dexterity"));
///
/// assert!(parse_command("[[/frobnicate]]").is_none());
/// ```
pub fn parse_command(text: &str) -> Option<ParsedCommand> {
    COMMAND.captures(text).and_then(|caps| from_captures(&caps))
}

/// Every command in `text`, in document order.
pub fn scan_commands(text: &str) -> Vec<ParsedCommand> {
    COMMAND
        .captures_iter(text)
        .filter_map(|caps| from_captures(&caps))
        .collect()
}

fn from_captures(caps: &Captures<'_>) -> Option<ParsedCommand> {
    if let Some(reference) = caps.name("reference") {
        let body = caps.name("refbody").map_or("", |m| m.as_str());
        return Some(ParsedCommand {
            kind: CommandKind::Reference,
            options: CommandOptions::Reference(reference::parse_reference(body)),
            original_text: reference.as_str().to_string(),
            start: reference.start(),
            end: reference.end(),
        });
    }

    let whole = caps.name("roll")?;
    let keyword = caps.name("kind")?.as_str();
    let body = caps.name("body").map_or("", |m| m.as_str()).trim();
    let label = caps.name("label");

    // Only a plain `/roll` owns a trailing `{label}`.
    let end = match label {
        Some(label) if keyword != "roll" => label.start() - 1,
        _ => whole.end(),
    };
    let label = label.filter(|_| keyword == "roll").map(|m| m.as_str());

    let (kind, options) = if let Some(mode) = RollMode::from_command(keyword) {
        (CommandKind::Roll, CommandOptions::Roll(roll::parse_roll(body, Some(mode), None)))
    } else {
        let kind = CommandKind::from_keyword(keyword)?;
        (kind, parse_body(kind, body, label))
    };
    let original_text = whole.as_str()[..end - whole.start()].to_string();
    trace!("parsed {kind} command from '{original_text}'");

    Some(ParsedCommand {
        kind,
        options,
        original_text,
        start: whole.start(),
        end,
    })
}

fn parse_body(kind: CommandKind, body: &str, label: Option<&str>) -> CommandOptions {
    match kind {
        CommandKind::Check | CommandKind::Skill | CommandKind::Tool => {
            CommandOptions::Check(check::parse_check(body, kind))
        },
        CommandKind::Attack => CommandOptions::Attack(attack::parse_attack(body)),
        CommandKind::Damage => CommandOptions::Damage(damage::parse_damage(body)),
        CommandKind::Heal => CommandOptions::Heal(heal::parse_heal(body)),
        CommandKind::Save | CommandKind::Concentration => CommandOptions::Save(save::parse_save(body)),
        CommandKind::Item => CommandOptions::Item(item::parse_item(body)),
        CommandKind::Roll => CommandOptions::Roll(roll::parse_roll(body, None, label)),
        CommandKind::Reference => CommandOptions::Reference(reference::parse_reference(body)),
    }
}
