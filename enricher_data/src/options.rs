//! Option records for every enricher command.
//!
//! Records are plain values with all fields optional. Field names serialize in
//! camelCase so the JSON produced by editor dialogs deserializes directly.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::ReferenceCategory;

/// A field that holds one value or a list of values (skills, tools, types).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Build from parsed values: `None` for an empty list, `One` for a single
    /// value, `Many` otherwise.
    pub fn from_values(mut values: Vec<String>) -> Option<OneOrMany> {
        match values.len() {
            0 => None,
            1 => values.pop().map(OneOrMany::One),
            _ => Some(OneOrMany::Many(values)),
        }
    }

    pub fn values(&self) -> Vec<&str> {
        match self {
            OneOrMany::One(value) => vec![value.as_str()],
            OneOrMany::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value when exactly one is held (a one-element list counts).
    pub fn single(&self) -> Option<&str> {
        match self {
            OneOrMany::One(value) => Some(value.as_str()),
            OneOrMany::Many(values) if values.len() == 1 => Some(values[0].as_str()),
            OneOrMany::Many(_) => None,
        }
    }

    pub fn is_multiple(&self) -> bool {
        self.len() > 1
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<String> for OneOrMany {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

impl From<Vec<&str>> for OneOrMany {
    fn from(values: Vec<&str>) -> Self {
        OneOrMany::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(values: Vec<String>) -> Self {
        OneOrMany::Many(values)
    }
}

/// A literal integer or a formula string (DCs, attack bonuses).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(i64),
    Text(String),
}

impl NumberOrText {
    /// Parse a base-10 integer, keeping anything else as text.
    pub fn parse(raw: &str) -> NumberOrText {
        raw.parse::<i64>()
            .map_or_else(|_| NumberOrText::Text(raw.to_string()), NumberOrText::Number)
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            NumberOrText::Number(n) => Some(*n),
            NumberOrText::Text(_) => None,
        }
    }
}

impl Display for NumberOrText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberOrText::Number(n) => write!(f, "{n}"),
            NumberOrText::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NumberOrText {
    fn from(value: i64) -> Self {
        NumberOrText::Number(value)
    }
}

impl From<&str> for NumberOrText {
    fn from(value: &str) -> Self {
        NumberOrText::Text(value.to_string())
    }
}

impl From<String> for NumberOrText {
    fn from(value: String) -> Self {
        NumberOrText::Text(value)
    }
}

/// Damage/heal `average` setting: `true` shows the computed average, a
/// number or string overrides it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Average {
    Flag(bool),
    Number(i64),
    Text(String),
}

impl Average {
    /// Parse an `average=` value.
    pub fn parse(raw: &str) -> Average {
        match raw {
            "true" => Average::Flag(true),
            "false" => Average::Flag(false),
            _ => raw
                .parse::<i64>()
                .map_or_else(|_| Average::Text(raw.to_string()), Average::Number),
        }
    }

    /// True for any value other than a boolean flag.
    pub fn is_override(&self) -> bool {
        !matches!(self, Average::Flag(_))
    }
}

impl Display for Average {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Average::Flag(flag) => write!(f, "{flag}"),
            Average::Number(n) => write!(f, "{n}"),
            Average::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Exact keyword match.
            pub fn from_keyword(keyword: &str) -> Option<$name> {
                match keyword {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum!(
    /// Presentation of the rendered enricher.
    DisplayFormat {
        Short => "short",
        Long => "long",
        Extended => "extended",
    }
);

keyword_enum!(
    /// Rules edition a check is resolved under.
    RulesVersion {
        Legacy => "2014",
        Modern => "2024",
    }
);

keyword_enum!(
    /// Healing flavor. `Temp` and `TempHp` are synonyms.
    HealType {
        Healing => "healing",
        Temp => "temp",
        TempHp => "temphp",
    }
);

keyword_enum!(
    /// Visibility of a basic roll.
    RollMode {
        Public => "public",
        Gm => "gm",
        Blind => "blind",
        SelfOnly => "self",
    }
);

keyword_enum!(
    /// Inline roll rendering. Absent means a regular chat roll.
    InlineRoll {
        Immediate => "immediate",
        Deferred => "deferred",
    }
);

impl HealType {
    pub fn is_temporary(self) -> bool {
        matches!(self, HealType::Temp | HealType::TempHp)
    }
}

impl RollMode {
    /// Chat command emitted for an explicit mode.
    pub fn command(self) -> &'static str {
        match self {
            RollMode::Public => "publicroll",
            RollMode::Gm => "gmroll",
            RollMode::Blind => "blindroll",
            RollMode::SelfOnly => "selfroll",
        }
    }

    pub fn from_command(command: &str) -> Option<RollMode> {
        match command {
            "publicroll" => Some(RollMode::Public),
            "gmroll" => Some(RollMode::Gm),
            "blindroll" => Some(RollMode::Blind),
            "selfroll" => Some(RollMode::SelfOnly),
            _ => None,
        }
    }
}

/// `[[/check]]`, `[[/skill]]` and `[[/tool]]` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<OneOrMany>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<OneOrMany>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dc: Option<NumberOrText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<DisplayFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RulesVersion>,
}

/// `[[/attack]]` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttackOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<NumberOrText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<DisplayFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RulesVersion>,
}

/// Attack modes recognized positionally after an attack formula.
pub const ATTACK_MODES: [&str; 6] = ["oneHanded", "twoHanded", "offhand", "ranged", "thrown", "thrownOffhand"];

/// One part of a multi-part damage roll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageRoll {
    pub formula: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<OneOrMany>,
}

/// `[[/damage]]` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DamageOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<OneOrMany>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<Average>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<DisplayFormat>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rolls: Vec<DamageRoll>,
}

/// `[[/heal]]` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub heal_type: Option<HealType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<Average>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<DisplayFormat>,
}

/// `[[/save]]` and `[[/concentration]]` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ability: Option<OneOrMany>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dc: Option<NumberOrText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<DisplayFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
}

/// `[[/item]]` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_id: Option<String>,
}

/// A formula fragment with its own flavor text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceDescription {
    pub formula: String,
    pub description: String,
}

/// `[[/roll]]` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicRollOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<RollMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dice_descriptions: Vec<DiceDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<InlineRoll>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// `&Reference[...]` options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ReferenceCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply: Option<bool>,
}

/// Serializer input: an options record, or a legacy bare string/number
/// standing in for the command's most common field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CommandInput<T> {
    #[default]
    Empty,
    Options(T),
    Text(String),
    Number(i64),
}

impl<T> From<&str> for CommandInput<T> {
    fn from(value: &str) -> Self {
        CommandInput::Text(value.to_string())
    }
}

impl<T> From<String> for CommandInput<T> {
    fn from(value: String) -> Self {
        CommandInput::Text(value)
    }
}

impl<T> From<i64> for CommandInput<T> {
    fn from(value: i64) -> Self {
        CommandInput::Number(value)
    }
}

macro_rules! options_input {
    ($($options:ty),+ $(,)?) => {
        $(
            impl From<$options> for CommandInput<$options> {
                fn from(options: $options) -> Self {
                    CommandInput::Options(options)
                }
            }

            impl From<Option<$options>> for CommandInput<$options> {
                fn from(options: Option<$options>) -> Self {
                    options.map_or(CommandInput::Empty, CommandInput::Options)
                }
            }
        )+
    };
}

options_input!(
    CheckOptions,
    AttackOptions,
    DamageOptions,
    HealOptions,
    SaveOptions,
    ItemOptions,
    BasicRollOptions,
    ReferenceOptions,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_or_many_from_values() {
        assert_eq!(OneOrMany::from_values(vec![]), None);
        assert_eq!(
            OneOrMany::from_values(vec!["acrobatics".into()]),
            Some(OneOrMany::One("acrobatics".into()))
        );
        let many = OneOrMany::from_values(vec!["a".into(), "b".into()]).expect("two values");
        assert!(many.is_multiple());
        assert_eq!(many.values(), vec!["a", "b"]);
    }

    #[test]
    fn single_element_list_counts_as_single() {
        let list = OneOrMany::from(vec!["stealth"]);
        assert_eq!(list.single(), Some("stealth"));
        assert!(!list.is_multiple());
    }

    #[test]
    fn number_or_text_parses_clean_integers_only() {
        assert_eq!(NumberOrText::parse("15"), NumberOrText::Number(15));
        assert_eq!(NumberOrText::parse("+5"), NumberOrText::Number(5));
        assert_eq!(NumberOrText::parse("15ish"), NumberOrText::Text("15ish".into()));
        assert_eq!(
            NumberOrText::parse("@abilities.con.dc"),
            NumberOrText::Text("@abilities.con.dc".into())
        );
    }

    #[test]
    fn average_values() {
        assert_eq!(Average::parse("true"), Average::Flag(true));
        assert_eq!(Average::parse("7"), Average::Number(7));
        assert!(Average::parse("@mod").is_override());
        assert!(!Average::Flag(true).is_override());
    }

    #[test]
    fn keyword_enums_round_trip_their_text() {
        assert_eq!(RulesVersion::from_keyword("2024"), Some(RulesVersion::Modern));
        assert_eq!(RulesVersion::Legacy.as_str(), "2014");
        assert_eq!(HealType::from_keyword("temphp"), Some(HealType::TempHp));
        assert_eq!(RollMode::from_command("gmroll"), Some(RollMode::Gm));
        assert_eq!(DisplayFormat::from_keyword("LONG"), None);
    }

    #[test]
    fn options_deserialize_from_editor_json() {
        let options: CheckOptions =
            serde_json::from_str(r#"{"ability":"dex","skill":["acr","ath"],"dc":15,"passive":true}"#)
                .expect("valid check json");
        assert_eq!(options.ability.as_deref(), Some("dex"));
        assert_eq!(options.skill, Some(OneOrMany::from(vec!["acr", "ath"])));
        assert_eq!(options.dc, Some(NumberOrText::Number(15)));
        assert_eq!(options.passive, Some(true));

        let damage: DamageOptions =
            serde_json::from_str(r#"{"formula":"2d6","type":"fire","average":true}"#).expect("valid damage json");
        assert_eq!(damage.damage_type, Some(OneOrMany::from("fire")));
        assert_eq!(damage.average, Some(Average::Flag(true)));

        let attack: AttackOptions = serde_json::from_str(r#"{"attackMode":"thrown"}"#).expect("valid attack json");
        assert_eq!(attack.attack_mode.as_deref(), Some("thrown"));
    }

    #[test]
    fn empty_records_serialize_to_empty_objects() {
        assert_eq!(serde_json::to_string(&CheckOptions::default()).expect("json"), "{}");
        assert_eq!(serde_json::to_string(&DamageOptions::default()).expect("json"), "{}");
    }
}
