//! Serializer and parser for inline roll-command and reference enrichers.
//!
//! Option records from `enricher_data` are written out as `[[/check ...]]`,
//! `[[/damage ...]]`, `&Reference[...]` and friends, choosing a positional
//! shorthand where the field combination allows it and an explicit
//! `key=value` body otherwise. The parser reads those bodies back, and the
//! scanner and linter apply it across whole documents.

pub mod config;
pub mod lint;
mod parser;
mod serialize;

pub use config::{ConfigError, EnricherConfig};
pub use lint::{LintFinding, LintKind, lint_document};
pub use parser::{ParsedCommand, parse_command, scan_commands};
pub use serialize::{
    serialize, serialize_attack, serialize_basic_roll, serialize_check, serialize_damage, serialize_heal,
    serialize_item, serialize_reference, serialize_save,
};
