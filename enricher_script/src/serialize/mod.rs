//! Serializers from option records to canonical command text.
//!
//! Each command kind picks between a positional shorthand body and an
//! explicit `key=value` body. Shorthand patterns are tried most specific
//! first; anything they do not cover falls through to the explicit form,
//! which lists every present field in a fixed order.

mod attack;
mod check;
mod damage;
mod heal;
mod item;
mod reference;
mod roll;
mod save;

pub use attack::serialize_attack;
pub use check::serialize_check;
pub use damage::serialize_damage;
pub use heal::serialize_heal;
pub use item::serialize_item;
pub use reference::serialize_reference;
pub use roll::serialize_basic_roll;
pub use save::serialize_save;

use enricher_data::{CommandKind, CommandOptions};
use log::debug;

/// Serialize any options record under `kind`.
///
/// The record picks the serializer. `kind` only chooses between keywords
/// that share one (`check`/`skill`/`tool`, `save`/`concentration`); a kind
/// that does not fit the record falls back to the record's own keyword.
///
/// ```
/// use enricher_data::{CheckOptions, CommandKind, CommandOptions};
/// use enricher_script::serialize;
///
/// let options = CommandOptions::Check(CheckOptions {
///     skill: Some("prc".into()),
///     ..CheckOptions::default()
/// });
/// assert_eq!(serialize(CommandKind::Skill, &options), "[[/skill perception]]");
/// ```
pub fn serialize(kind: CommandKind, options: &CommandOptions) -> String {
    let kind = if options.accepts(kind) {
        kind
    } else {
        debug!(
            "kind '{kind}' does not fit {} options; using '{}'",
            options.default_kind(),
            options.default_kind()
        );
        options.default_kind()
    };
    match options {
        CommandOptions::Check(o) => serialize_check(o.clone(), kind),
        CommandOptions::Attack(o) => serialize_attack(o.clone()),
        CommandOptions::Damage(o) => serialize_damage(o.clone()),
        CommandOptions::Heal(o) => serialize_heal(o.clone()),
        CommandOptions::Save(o) => serialize_save(o.clone(), kind == CommandKind::Concentration),
        CommandOptions::Item(o) => serialize_item(o.clone()),
        CommandOptions::Roll(o) => serialize_basic_roll(o.clone()),
        CommandOptions::Reference(o) => serialize_reference(o.clone()),
    }
}

/// `[[/keyword part part ...]]`, or `[[/keyword]]` with no parts.
pub(crate) fn wrap(keyword: &str, parts: &[String]) -> String {
    let body = parts
        .iter()
        .filter(|p| !p.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    if body.is_empty() {
        format!("[[/{keyword}]]")
    } else {
        format!("[[/{keyword} {body}]]")
    }
}

/// Double-quote a value that would otherwise split into several tokens or
/// read as a key. Embedded quotes are not escaped.
pub(crate) fn quote_if_needed(value: &str) -> String {
    if value.contains(char::is_whitespace) || value.contains('=') {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

/// `key=value`, quoting the value when needed.
pub(crate) fn pair(key: &str, value: &str) -> String {
    format!("{key}={}", quote_if_needed(value))
}

/// Drop empty strings so `Some("")` behaves like an absent field.
pub(crate) fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}
