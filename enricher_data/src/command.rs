//! Command kinds and the options union.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use variantly::Variantly;

use crate::{
    AttackOptions, BasicRollOptions, CheckOptions, DamageOptions, HealOptions, ItemOptions, ReferenceOptions,
    SaveOptions,
};

/// Every command keyword the enricher language knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Check,
    Skill,
    Tool,
    Attack,
    Damage,
    Heal,
    Save,
    Concentration,
    Item,
    Roll,
    Reference,
}

impl CommandKind {
    pub const ALL: [CommandKind; 11] = [
        CommandKind::Check,
        CommandKind::Skill,
        CommandKind::Tool,
        CommandKind::Attack,
        CommandKind::Damage,
        CommandKind::Heal,
        CommandKind::Save,
        CommandKind::Concentration,
        CommandKind::Item,
        CommandKind::Roll,
        CommandKind::Reference,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandKind::Check => "check",
            CommandKind::Skill => "skill",
            CommandKind::Tool => "tool",
            CommandKind::Attack => "attack",
            CommandKind::Damage => "damage",
            CommandKind::Heal => "heal",
            CommandKind::Save => "save",
            CommandKind::Concentration => "concentration",
            CommandKind::Item => "item",
            CommandKind::Roll => "roll",
            CommandKind::Reference => "reference",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<CommandKind> {
        Self::ALL.iter().find(|kind| kind.as_str() == keyword).copied()
    }

    /// An all-absent options record of the variant this kind uses.
    pub fn empty_options(self) -> CommandOptions {
        match self {
            CommandKind::Check | CommandKind::Skill | CommandKind::Tool => {
                CommandOptions::Check(CheckOptions::default())
            },
            CommandKind::Attack => CommandOptions::Attack(AttackOptions::default()),
            CommandKind::Damage => CommandOptions::Damage(DamageOptions::default()),
            CommandKind::Heal => CommandOptions::Heal(HealOptions::default()),
            CommandKind::Save | CommandKind::Concentration => CommandOptions::Save(SaveOptions::default()),
            CommandKind::Item => CommandOptions::Item(ItemOptions::default()),
            CommandKind::Roll => CommandOptions::Roll(BasicRollOptions::default()),
            CommandKind::Reference => CommandOptions::Reference(ReferenceOptions::default()),
        }
    }
}

impl Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for any command. Check/skill/tool share a record, as do
/// save/concentration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Variantly)]
#[serde(untagged)]
pub enum CommandOptions {
    Check(CheckOptions),
    Attack(AttackOptions),
    Damage(DamageOptions),
    Heal(HealOptions),
    Save(SaveOptions),
    Item(ItemOptions),
    Roll(BasicRollOptions),
    Reference(ReferenceOptions),
}

impl CommandOptions {
    /// The keyword this record serializes under when no other is requested.
    pub fn default_kind(&self) -> CommandKind {
        match self {
            CommandOptions::Check(_) => CommandKind::Check,
            CommandOptions::Attack(_) => CommandKind::Attack,
            CommandOptions::Damage(_) => CommandKind::Damage,
            CommandOptions::Heal(_) => CommandKind::Heal,
            CommandOptions::Save(_) => CommandKind::Save,
            CommandOptions::Item(_) => CommandKind::Item,
            CommandOptions::Roll(_) => CommandKind::Roll,
            CommandOptions::Reference(_) => CommandKind::Reference,
        }
    }

    /// True when `kind` is one of the keywords this record can serialize under.
    pub fn accepts(&self, kind: CommandKind) -> bool {
        kind.empty_options().default_kind() == self.default_kind()
    }
}
