use enricher_data::{Average, CommandInput, HealOptions, HealType};

use super::damage::average_suffix;
use super::{pair, present, quote_if_needed, wrap};

const KEYWORD: &str = "heal";

/// Serialize a heal command.
///
/// `temp` and `temphp` are interchangeable: shorthand writes `temp`, the
/// explicit form writes `type=temphp`. A `healing` type always goes explicit.
pub fn serialize_heal(input: impl Into<CommandInput<HealOptions>>) -> String {
    match input.into() {
        CommandInput::Empty => wrap(KEYWORD, &[]),
        CommandInput::Text(text) => wrap(KEYWORD, &[text]),
        CommandInput::Number(n) => wrap(KEYWORD, &[n.to_string()]),
        CommandInput::Options(options) => wrap(KEYWORD, &heal_body(&options)),
    }
}

fn heal_body(options: &HealOptions) -> Vec<String> {
    let formula = present(options.formula.as_ref());
    let activity = present(options.activity.as_ref());
    let has_override = options.average.as_ref().is_some_and(Average::is_override);
    let healing = options.heal_type == Some(HealType::Healing);

    if formula.is_none() && options.heal_type.is_none() && options.average.is_none() && options.format.is_none() {
        if let Some(activity) = activity {
            return vec![pair("activity", activity)];
        }
    }

    if activity.is_none() && options.format.is_none() && !has_override && !healing {
        let mut parts: Vec<String> = formula.into_iter().map(str::to_string).collect();
        if options.heal_type.is_some_and(HealType::is_temporary) {
            parts.push(HealType::Temp.as_str().to_string());
        }
        parts.extend(average_suffix(options.average.as_ref()));
        return parts;
    }

    let mut parts = Vec::new();
    if let Some(formula) = formula {
        parts.push(pair("formula", formula));
    }
    if let Some(heal_type) = options.heal_type {
        let written = if heal_type.is_temporary() { HealType::TempHp } else { HealType::Healing };
        parts.push(pair("type", written.as_str()));
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
