use enricher_data::{Average, CommandInput, DamageOptions, DamageRoll, OneOrMany};

use super::{pair, present, quote_if_needed, wrap};

const KEYWORD: &str = "damage";

/// Serialize a damage command, including multi-part `a & b` rolls.
///
/// ```
/// use enricher_data::{DamageOptions, DamageRoll};
/// use enricher_script::serialize_damage;
///
/// let options = DamageOptions {
///     rolls: vec![
///         DamageRoll { formula: "1d6".into(), damage_type: Some("bludgeoning".into()) },
///         DamageRoll { formula: "1d4".into(), damage_type: Some("fire".into()) },
///     ],
///     ..DamageOptions::default()
/// };
/// assert_eq!(serialize_damage(options), "[[/damage 1d6 bludgeoning & 1d4 fire]]");
/// ```
pub fn serialize_damage(input: impl Into<CommandInput<DamageOptions>>) -> String {
    match input.into() {
        CommandInput::Empty => wrap(KEYWORD, &[]),
        CommandInput::Text(text) => wrap(KEYWORD, &[text]),
        CommandInput::Number(n) => wrap(KEYWORD, &[n.to_string()]),
        CommandInput::Options(options) => wrap(KEYWORD, &damage_body(&options)),
    }
}

fn types_of(damage_type: Option<&OneOrMany>) -> Vec<&str> {
    damage_type
        .map(OneOrMany::values)
        .unwrap_or_default()
        .into_iter()
        .filter(|t| !t.is_empty())
        .collect()
}

/// `average` for `true`, `average=<v>` for an override, nothing for `false`.
pub(super) fn average_suffix(average: Option<&Average>) -> Option<String> {
    match average? {
        Average::Flag(true) => Some("average".to_string()),
        Average::Flag(false) => None,
        other => Some(pair("average", &other.to_string())),
    }
}

fn roll_segment(roll: &DamageRoll) -> String {
    let mut parts = vec![roll.formula.clone()];
    parts.extend(types_of(roll.damage_type.as_ref()).into_iter().map(str::to_string));
    parts.retain(|p| !p.is_empty());
    parts.join(" ")
}

fn damage_body(options: &DamageOptions) -> Vec<String> {
    let formula = present(options.formula.as_ref());
    let types = types_of(options.damage_type.as_ref());
    let activity = present(options.activity.as_ref());

    if !options.rolls.is_empty() {
        let segments = options.rolls.iter().map(roll_segment).collect::<Vec<_>>().join(" & ");
        let mut parts = vec![segments];
        parts.extend(average_suffix(options.average.as_ref()));
        if let Some(format) = options.format {
            parts.push(pair("format", format.as_str()));
        }
        if let Some(activity) = activity {
            parts.push(pair("activity", activity));
        }
        return parts;
    }

    let has_override = options.average.as_ref().is_some_and(Average::is_override);
    let activity_only = formula.is_none() && activity.is_some();
    if !activity_only && activity.is_none() && options.format.is_none() && !has_override {
        let mut parts: Vec<String> = formula.into_iter().map(str::to_string).collect();
        parts.extend(types.iter().map(|t| t.to_string()));
        parts.extend(average_suffix(options.average.as_ref()));
        return parts;
    }

    let mut parts = Vec::new();
    if let Some(formula) = formula {
        parts.push(pair("formula", formula));
    }
    if !types.is_empty() {
        parts.push(pair("type", &types.join("/")));
    }
    if let Some(average) = &options.average {
        if *average != Average::Flag(false) {
            parts.push(pair("average", &average.to_string()));
        }
    }
    if let Some(activity) = activity {
        parts.push(format!("activity={}", quote_if_needed(activity)));
    }
    if let Some(format) = options.format {
        parts.push(pair("format", format.as_str()));
    }
    parts
}
