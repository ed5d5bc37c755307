//! Ability and skill vocabulary used by roll commands.
//!
//! Lookups are table driven. Normalization lowercases its input, tries the
//! abbreviation table first and the full-name table second, and hands back the
//! input unchanged when neither matches so house-rule names pass through.

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::LazyLock;

use log::trace;
use serde::{Deserialize, Serialize};

/// One of the six core abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Ability::Strength => "strength",
            Ability::Dexterity => "dexterity",
            Ability::Constitution => "constitution",
            Ability::Intelligence => "intelligence",
            Ability::Wisdom => "wisdom",
            Ability::Charisma => "charisma",
        }
    }

    /// Three-letter abbreviation.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Ability::Strength => "str",
            Ability::Dexterity => "dex",
            Ability::Constitution => "con",
            Ability::Intelligence => "int",
            Ability::Wisdom => "wis",
            Ability::Charisma => "cha",
        }
    }

    /// Case-insensitive lookup by abbreviation or full name.
    pub fn lookup(input: &str) -> Option<Ability> {
        let lower = input.to_lowercase();
        ABILITY_ABBREVIATIONS
            .get(lower.as_str())
            .or_else(|| ABILITY_NAMES.get(lower.as_str()))
            .copied()
    }
}

impl Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the eighteen skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Skill {
    Acrobatics,
    AnimalHandling,
    Arcana,
    Athletics,
    Deception,
    History,
    Insight,
    Intimidation,
    Investigation,
    Medicine,
    Nature,
    Perception,
    Performance,
    Persuasion,
    Religion,
    SleightOfHand,
    Stealth,
    Survival,
}

impl Skill {
    pub const ALL: [Skill; 18] = [
        Skill::Acrobatics,
        Skill::AnimalHandling,
        Skill::Arcana,
        Skill::Athletics,
        Skill::Deception,
        Skill::History,
        Skill::Insight,
        Skill::Intimidation,
        Skill::Investigation,
        Skill::Medicine,
        Skill::Nature,
        Skill::Perception,
        Skill::Performance,
        Skill::Persuasion,
        Skill::Religion,
        Skill::SleightOfHand,
        Skill::Stealth,
        Skill::Survival,
    ];

    /// Canonical lowercase, hyphenated name.
    pub fn as_str(self) -> &'static str {
        match self {
            Skill::Acrobatics => "acrobatics",
            Skill::AnimalHandling => "animal-handling",
            Skill::Arcana => "arcana",
            Skill::Athletics => "athletics",
            Skill::Deception => "deception",
            Skill::History => "history",
            Skill::Insight => "insight",
            Skill::Intimidation => "intimidation",
            Skill::Investigation => "investigation",
            Skill::Medicine => "medicine",
            Skill::Nature => "nature",
            Skill::Perception => "perception",
            Skill::Performance => "performance",
            Skill::Persuasion => "persuasion",
            Skill::Religion => "religion",
            Skill::SleightOfHand => "sleight-of-hand",
            Skill::Stealth => "stealth",
            Skill::Survival => "survival",
        }
    }

    /// Roll-command abbreviation. Six skills have none.
    pub fn abbreviation(self) -> Option<&'static str> {
        match self {
            Skill::Acrobatics => Some("acr"),
            Skill::AnimalHandling => Some("ani"),
            Skill::Arcana => Some("arc"),
            Skill::Athletics => Some("ath"),
            Skill::Deception => Some("dec"),
            Skill::History => Some("his"),
            Skill::Insight => Some("ins"),
            Skill::Intimidation => Some("itm"),
            Skill::Investigation => Some("inv"),
            Skill::Medicine => Some("med"),
            Skill::Nature => Some("nat"),
            Skill::Perception => Some("prc"),
            Skill::Performance
            | Skill::Persuasion
            | Skill::Religion
            | Skill::SleightOfHand
            | Skill::Stealth
            | Skill::Survival => None,
        }
    }

    /// Case-insensitive lookup by abbreviation or full name.
    pub fn lookup(input: &str) -> Option<Skill> {
        let lower = input.to_lowercase();
        SKILL_ABBREVIATIONS
            .get(lower.as_str())
            .or_else(|| SKILL_NAMES.get(lower.as_str()))
            .copied()
    }
}

impl Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static ABILITY_NAMES: LazyLock<HashMap<&'static str, Ability>> =
    LazyLock::new(|| Ability::ALL.iter().map(|a| (a.as_str(), *a)).collect());

static ABILITY_ABBREVIATIONS: LazyLock<HashMap<&'static str, Ability>> =
    LazyLock::new(|| Ability::ALL.iter().map(|a| (a.abbreviation(), *a)).collect());

static SKILL_NAMES: LazyLock<HashMap<&'static str, Skill>> =
    LazyLock::new(|| Skill::ALL.iter().map(|s| (s.as_str(), *s)).collect());

static SKILL_ABBREVIATIONS: LazyLock<HashMap<&'static str, Skill>> = LazyLock::new(|| {
    Skill::ALL
        .iter()
        .filter_map(|s| s.abbreviation().map(|abbr| (abbr, *s)))
        .collect()
});

/// Normalize an ability name or abbreviation to its canonical lowercase name.
///
/// Unrecognized input comes back unchanged.
///
/// ```
/// use enricher_data::normalize_ability;
///
/// assert_eq!(normalize_ability("DEX"), "dexterity");
/// assert_eq!(normalize_ability("Wisdom"), "wisdom");
/// assert_eq!(normalize_ability("luck"), "luck");
/// ```
pub fn normalize_ability(input: &str) -> String {
    match Ability::lookup(input) {
        Some(ability) => ability.as_str().to_string(),
        None => {
            trace!("ability '{input}' not in vocabulary; passing through");
            input.to_string()
        },
    }
}

/// True for a canonical ability name (case-sensitive) or an abbreviation
/// (case-insensitive).
pub fn is_ability(input: &str) -> bool {
    ABILITY_NAMES.contains_key(input) || ABILITY_ABBREVIATIONS.contains_key(input.to_lowercase().as_str())
}

/// Normalize a skill name or abbreviation to its canonical hyphenated name.
///
/// Unrecognized input comes back unchanged.
pub fn normalize_skill(input: &str) -> String {
    match Skill::lookup(input) {
        Some(skill) => skill.as_str().to_string(),
        None => {
            trace!("skill '{input}' not in vocabulary; passing through");
            input.to_string()
        },
    }
}

/// Normalize each skill and join the results with a single space.
pub fn normalize_skills<S: AsRef<str>>(inputs: &[S]) -> String {
    inputs
        .iter()
        .map(|s| normalize_skill(s.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// True for a canonical skill name (case-sensitive) or an abbreviation
/// (case-insensitive).
pub fn is_skill(input: &str) -> bool {
    SKILL_NAMES.contains_key(input) || SKILL_ABBREVIATIONS.contains_key(input.to_lowercase().as_str())
}
