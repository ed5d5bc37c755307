use enricher_data::{BasicRollOptions, CommandInput, InlineRoll};
use log::debug;

use super::{present, wrap};

/// Serialize a basic dice roll.
///
/// Inline rolls carry an optional `{label}` after the brackets. A deferred
/// inline roll is always written as `/roll` regardless of `mode`.
///
/// ```
/// use enricher_data::{BasicRollOptions, InlineRoll, RollMode};
/// use enricher_script::serialize_basic_roll;
///
/// let options = BasicRollOptions {
///     formula: Some("1d20".into()),
///     mode: Some(RollMode::Gm),
///     description: Some("Secret".into()),
///     ..BasicRollOptions::default()
/// };
/// assert_eq!(serialize_basic_roll(options), "[[/gmroll 1d20 # Secret]]");
/// ```
pub fn serialize_basic_roll(input: impl Into<CommandInput<BasicRollOptions>>) -> String {
    match input.into() {
        CommandInput::Empty => wrap("roll", &[]),
        CommandInput::Text(text) => wrap("roll", &[text]),
        CommandInput::Number(n) => wrap("roll", &[n.to_string()]),
        CommandInput::Options(options) => roll_text(&options),
    }
}

/// `f1[d1]+f2[d2]...` when dice descriptions exist, else the formula.
fn expression(options: &BasicRollOptions) -> String {
    if options.dice_descriptions.is_empty() {
        return present(options.formula.as_ref()).unwrap_or_default().to_string();
    }
    options
        .dice_descriptions
        .iter()
        .map(|dice| {
            if dice.description.is_empty() {
                dice.formula.clone()
            } else {
                format!("{}[{}]", dice.formula, dice.description)
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

fn roll_text(options: &BasicRollOptions) -> String {
    let expression = expression(options);
    let label = present(options.label.as_ref())
        .map(|label| format!("{{{label}}}"))
        .unwrap_or_default();

    match options.inline {
        Some(InlineRoll::Immediate) => format!("[[{expression}]]{label}"),
        Some(InlineRoll::Deferred) => format!("{}{label}", wrap("roll", &[expression])),
        None => {
            if !label.is_empty() {
                debug!("roll label {label} ignored on a non-inline roll");
            }
            let command = options.mode.map_or("roll", |mode| mode.command());
            let mut parts = vec![expression];
            if let Some(description) = present(options.description.as_ref()) {
                parts.push(format!("# {description}"));
            }
            wrap(command, &parts)
        },
    }
}
