use enricher_data::{BasicRollOptions, InlineRoll, RollMode};

/// Parse a basic roll body. `mode` comes from the command keyword; a
/// `{label}` after `[[/roll ...]]` marks a deferred inline roll.
pub(super) fn parse_roll(body: &str, mode: Option<RollMode>, label: Option<&str>) -> BasicRollOptions {
    let (formula, description) = match body.split_once('#') {
        Some((formula, description)) => (formula.trim(), Some(description.trim())),
        None => (body.trim(), None),
    };
    let mut options = BasicRollOptions {
        formula: Some(formula.to_string()).filter(|f| !f.is_empty()),
        mode,
        description: description.filter(|d| !d.is_empty()).map(str::to_string),
        ..BasicRollOptions::default()
    };
    if let Some(label) = label {
        options.inline = Some(InlineRoll::Deferred);
        options.label = Some(label.to_string()).filter(|l| !l.is_empty());
    }
    options
}
