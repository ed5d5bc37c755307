//! Rule-reference name-space.
//!
//! `&Reference[...]` links point at one of nine closed categories or at an
//! arbitrary rule name. Each category has its own entry table and, for
//! abilities, skills and spell schools, its own abbreviation table.
//! Reference lookups ignore case and treat spaces as hyphens.

use std::fmt::Display;

use log::trace;
use serde::{Deserialize, Serialize};

/// Category a reference resolves into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceCategory {
    Ability,
    Skill,
    Condition,
    CreatureType,
    DamageType,
    AreaOfEffect,
    SpellComponent,
    SpellSchool,
    OtherRuleset,
    /// Open-ended rule name; has no table.
    Rule,
}

impl ReferenceCategory {
    /// Order in which an uncategorized rule name is matched against the tables.
    pub const INFERENCE_ORDER: [ReferenceCategory; 9] = [
        ReferenceCategory::Condition,
        ReferenceCategory::Ability,
        ReferenceCategory::Skill,
        ReferenceCategory::DamageType,
        ReferenceCategory::CreatureType,
        ReferenceCategory::SpellSchool,
        ReferenceCategory::AreaOfEffect,
        ReferenceCategory::SpellComponent,
        ReferenceCategory::OtherRuleset,
    ];

    /// Key used in `category=value` reference bodies.
    pub fn key(self) -> &'static str {
        match self {
            ReferenceCategory::Ability => "ability",
            ReferenceCategory::Skill => "skill",
            ReferenceCategory::Condition => "condition",
            ReferenceCategory::CreatureType => "creatureType",
            ReferenceCategory::DamageType => "damageType",
            ReferenceCategory::AreaOfEffect => "areaOfEffect",
            ReferenceCategory::SpellComponent => "spellComponent",
            ReferenceCategory::SpellSchool => "spellSchool",
            ReferenceCategory::OtherRuleset => "otherRuleset",
            ReferenceCategory::Rule => "rule",
        }
    }

    /// Inverse of [`ReferenceCategory::key`]. Exact match.
    pub fn from_key(key: &str) -> Option<ReferenceCategory> {
        Self::INFERENCE_ORDER
            .iter()
            .chain(std::iter::once(&ReferenceCategory::Rule))
            .find(|c| c.key() == key)
            .copied()
    }

    /// Canonical entries for the category. Empty for [`ReferenceCategory::Rule`].
    pub fn entries(self) -> &'static [&'static str] {
        match self {
            ReferenceCategory::Ability => ABILITIES,
            ReferenceCategory::Skill => SKILLS,
            ReferenceCategory::Condition => CONDITIONS,
            ReferenceCategory::CreatureType => CREATURE_TYPES,
            ReferenceCategory::DamageType => DAMAGE_TYPES,
            ReferenceCategory::AreaOfEffect => AREAS_OF_EFFECT,
            ReferenceCategory::SpellComponent => SPELL_COMPONENTS,
            ReferenceCategory::SpellSchool => SPELL_SCHOOLS,
            ReferenceCategory::OtherRuleset => OTHER_RULESET,
            ReferenceCategory::Rule => &[],
        }
    }

    /// `(abbreviation, canonical)` pairs for the category.
    pub fn abbreviations(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ReferenceCategory::Ability => ABILITY_ABBREVIATIONS,
            ReferenceCategory::Skill => SKILL_ABBREVIATIONS,
            ReferenceCategory::SpellSchool => SPELL_SCHOOL_ABBREVIATIONS,
            _ => &[],
        }
    }

    /// Resolve `input` within this category only.
    pub fn lookup(self, input: &str) -> Option<&'static str> {
        let key = fold(input);
        if let Some((_, canonical)) = self.abbreviations().iter().find(|(abbr, _)| *abbr == key) {
            return Some(*canonical);
        }
        self.entries().iter().find(|entry| **entry == key).copied()
    }
}

impl Display for ReferenceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

const ABILITIES: &[&str] = &[
    "strength",
    "dexterity",
    "constitution",
    "intelligence",
    "wisdom",
    "charisma",
];

const ABILITY_ABBREVIATIONS: &[(&str, &str)] = &[
    ("str", "strength"),
    ("dex", "dexterity"),
    ("con", "constitution"),
    ("int", "intelligence"),
    ("wis", "wisdom"),
    ("cha", "charisma"),
];

const SKILLS: &[&str] = &[
    "acrobatics",
    "animal-handling",
    "arcana",
    "athletics",
    "deception",
    "history",
    "insight",
    "intimidation",
    "investigation",
    "medicine",
    "nature",
    "perception",
    "performance",
    "persuasion",
    "religion",
    "sleight-of-hand",
    "stealth",
    "survival",
];

const SKILL_ABBREVIATIONS: &[(&str, &str)] = &[
    ("acr", "acrobatics"),
    ("ani", "animal-handling"),
    ("arc", "arcana"),
    ("ath", "athletics"),
    ("dec", "deception"),
    ("his", "history"),
    ("ins", "insight"),
    ("itm", "intimidation"),
    ("inv", "investigation"),
    ("med", "medicine"),
    ("nat", "nature"),
    ("prc", "perception"),
    ("prf", "performance"),
    ("per", "persuasion"),
    ("rel", "religion"),
    ("slt", "sleight-of-hand"),
    ("ste", "stealth"),
    ("sur", "survival"),
];

const CONDITIONS: &[&str] = &[
    "blinded",
    "charmed",
    "deafened",
    "exhaustion",
    "frightened",
    "grappled",
    "incapacitated",
    "invisible",
    "paralyzed",
    "petrified",
    "poisoned",
    "prone",
    "restrained",
    "stunned",
    "unconscious",
];

const CREATURE_TYPES: &[&str] = &[
    "aberration",
    "beast",
    "celestial",
    "construct",
    "dragon",
    "elemental",
    "fey",
    "fiend",
    "giant",
    "humanoid",
    "monstrosity",
    "ooze",
    "plant",
    "undead",
];

const DAMAGE_TYPES: &[&str] = &[
    "acid",
    "bludgeoning",
    "cold",
    "fire",
    "force",
    "lightning",
    "necrotic",
    "piercing",
    "poison",
    "psychic",
    "radiant",
    "slashing",
    "thunder",
];

const AREAS_OF_EFFECT: &[&str] = &["cone", "cube", "cylinder", "emanation", "line", "sphere"];

const SPELL_COMPONENTS: &[&str] = &["verbal", "somatic", "material", "concentration", "ritual"];

const SPELL_SCHOOLS: &[&str] = &[
    "abjuration",
    "conjuration",
    "divination",
    "enchantment",
    "evocation",
    "illusion",
    "necromancy",
    "transmutation",
];

const SPELL_SCHOOL_ABBREVIATIONS: &[(&str, &str)] = &[
    ("abj", "abjuration"),
    ("con", "conjuration"),
    ("div", "divination"),
    ("enc", "enchantment"),
    ("evo", "evocation"),
    ("ill", "illusion"),
    ("nec", "necromancy"),
    ("trs", "transmutation"),
];

const OTHER_RULESET: &[&str] = &[
    "advantage",
    "disadvantage",
    "inspiration",
    "cover",
    "half-cover",
    "three-quarters-cover",
    "total-cover",
    "difficult-terrain",
    "surprise",
    "initiative",
    "opportunity-attack",
    "resistance",
    "vulnerability",
    "immunity",
    "temporary-hit-points",
];

fn fold(input: &str) -> String {
    input.trim().to_lowercase().replace(' ', "-")
}

/// Normalize `input` within `category`, falling back to the raw input.
pub fn normalize_reference(category: ReferenceCategory, input: &str) -> String {
    match category.lookup(input) {
        Some(canonical) => canonical.to_string(),
        None => {
            trace!("'{input}' not found in reference category {category}; keeping raw value");
            input.to_string()
        },
    }
}

/// True when `input` resolves within `category`.
pub fn is_reference(category: ReferenceCategory, input: &str) -> bool {
    category.lookup(input).is_some()
}

/// Find the first category (in [`ReferenceCategory::INFERENCE_ORDER`]) that
/// recognizes `input`, with its canonical entry.
///
/// ```
/// use enricher_data::{ReferenceCategory, infer_reference_category};
///
/// assert_eq!(infer_reference_category("Prone"), Some((ReferenceCategory::Condition, "prone")));
/// assert_eq!(infer_reference_category("con"), Some((ReferenceCategory::Ability, "constitution")));
/// assert_eq!(infer_reference_category("flanking"), None);
/// ```
pub fn infer_reference_category(input: &str) -> Option<(ReferenceCategory, &'static str)> {
    ReferenceCategory::INFERENCE_ORDER
        .iter()
        .find_map(|category| category.lookup(input).map(|canonical| (*category, canonical)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn closed_categories_are_disjoint() {
        let mut seen = HashSet::new();
        for category in ReferenceCategory::INFERENCE_ORDER {
            for entry in category.entries() {
                assert!(seen.insert(*entry), "'{entry}' appears in more than one category");
            }
        }
    }

    #[test]
    fn every_abbreviation_targets_an_entry() {
        for category in ReferenceCategory::INFERENCE_ORDER {
            for (_, canonical) in category.abbreviations() {
                assert!(category.entries().contains(canonical));
            }
        }
    }

    #[test]
    fn keys_round_trip() {
        for category in ReferenceCategory::INFERENCE_ORDER {
            assert_eq!(ReferenceCategory::from_key(category.key()), Some(category));
        }
        assert_eq!(ReferenceCategory::from_key("rule"), Some(ReferenceCategory::Rule));
        assert_eq!(ReferenceCategory::from_key("Condition"), None);
    }

    #[test]
    fn lookup_stays_within_category() {
        assert_eq!(ReferenceCategory::SpellSchool.lookup("con"), Some("conjuration"));
        assert_eq!(ReferenceCategory::Condition.lookup("fire"), None);
        assert_eq!(normalize_reference(ReferenceCategory::Condition, "Lucky"), "Lucky");
    }

    #[test]
    fn spaces_fold_to_hyphens() {
        assert_eq!(
            infer_reference_category("Difficult Terrain"),
            Some((ReferenceCategory::OtherRuleset, "difficult-terrain"))
        );
        assert_eq!(ReferenceCategory::Skill.lookup("sleight of hand"), Some("sleight-of-hand"));
    }
}
