//! Shared data model for enricher commands.
//!
//! Holds the ability/skill vocabulary, the rule-reference tables, and the
//! option records that the serializers consume and the parser produces.

pub mod command;
pub mod options;
pub mod reference;
pub mod vocab;

pub use command::{CommandKind, CommandOptions};
pub use options::*;
pub use reference::{ReferenceCategory, infer_reference_category, is_reference, normalize_reference};
pub use vocab::{Ability, Skill, is_ability, is_skill, normalize_ability, normalize_skill, normalize_skills};
