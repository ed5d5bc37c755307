use enricher_data::{CheckOptions, CommandInput, CommandKind, NumberOrText, normalize_ability, normalize_skill};
use log::debug;

use super::{pair, present, wrap};

/// Serialize a check, skill, or tool command.
///
/// `kind` must be `Check`, `Skill`, or `Tool`; anything else is written as
/// `check`.
///
/// ```
/// use enricher_data::{CheckOptions, CommandKind, NumberOrText};
/// use enricher_script::serialize_check;
///
/// let options = CheckOptions {
///     ability: Some("str".into()),
///     dc: Some(NumberOrText::Number(15)),
///     ..CheckOptions::default()
/// };
/// // A numeric DC next to a lone ability is dropped.
/// assert_eq!(serialize_check(options, CommandKind::Check), "[[/check strength]]");
/// ```
pub fn serialize_check(input: impl Into<CommandInput<CheckOptions>>, kind: CommandKind) -> String {
    let keyword = match kind {
        CommandKind::Check | CommandKind::Skill | CommandKind::Tool => kind.as_str(),
        other => {
            debug!("'{other}' is not a check keyword; writing 'check'");
            CommandKind::Check.as_str()
        },
    };
    match input.into() {
        CommandInput::Empty => wrap(keyword, &[]),
        CommandInput::Text(text) => wrap(keyword, &[text]),
        CommandInput::Number(n) => wrap(keyword, &[n.to_string()]),
        CommandInput::Options(options) => wrap(keyword, &check_body(&options)),
    }
}

fn check_body(options: &CheckOptions) -> Vec<String> {
    let ability = present(options.ability.as_ref()).map(normalize_ability);
    let skills: Vec<String> = options
        .skill
        .iter()
        .flat_map(|s| s.values())
        .filter(|s| !s.is_empty())
        .map(normalize_skill)
        .collect();
    let tools: Vec<&str> = options
        .tool
        .iter()
        .flat_map(|t| t.values())
        .filter(|t| !t.is_empty())
        .collect();
    let passive = options.passive.unwrap_or(false);
    let has_extras = !tools.is_empty()
        || present(options.vehicle.as_ref()).is_some()
        || options.format.is_some()
        || passive
        || present(options.activity.as_ref()).is_some()
        || options.rules.is_some();

    if !has_extras {
        if let Some(parts) = shorthand(ability.as_deref(), &skills, options.dc.as_ref()) {
            return parts;
        }
    }

    let mut parts = Vec::new();
    if let Some(ability) = &ability {
        parts.push(pair("ability", ability));
    }
    if !skills.is_empty() {
        parts.push(pair("skill", &skills.join("/")));
    }
    if !tools.is_empty() {
        parts.push(pair("tool", &tools.join("/")));
    }
    if let Some(vehicle) = present(options.vehicle.as_ref()) {
        parts.push(pair("vehicle", vehicle));
    }
    if let Some(dc) = &options.dc {
        parts.push(pair("dc", &dc.to_string()));
    }
    if let Some(format) = options.format {
        parts.push(pair("format", format.as_str()));
    }
    if passive {
        parts.push("passive=true".to_string());
    }
    if let Some(activity) = present(options.activity.as_ref()) {
        parts.push(pair("activity", activity));
    }
    if let Some(rules) = options.rules {
        parts.push(pair("rules", rules.as_str()));
    }
    parts
}

/// Positional body for the simple ability/skill/DC combinations.
///
/// A lone ability or a lone skill accepts a numeric DC and drops it, so the
/// ability+DC and skill+DC patterns never get a chance to match. Existing
/// content relies on that output.
fn shorthand(ability: Option<&str>, skills: &[String], dc: Option<&NumberOrText>) -> Option<Vec<String>> {
    let numeric_dc = match dc {
        None => None,
        Some(NumberOrText::Number(n)) => Some(*n),
        Some(NumberOrText::Text(_)) => return None,
    };
    let parts = match (ability, skills, numeric_dc) {
        (None, [], None) => Vec::new(),
        (Some(ability), [], dc) => {
            if dc.is_some() {
                debug!("check shorthand drops DC next to lone ability '{ability}'");
            }
            vec![ability.to_string()]
        },
        (None, [skill], dc) => {
            if dc.is_some() {
                debug!("check shorthand drops DC next to lone skill '{skill}'");
            }
            vec![skill.clone()]
        },
        (Some(ability), [skill], None) => vec![ability.to_string(), skill.clone()],
        (None, skills, None) if skills.len() > 1 => skills.to_vec(),
        (None, skills, Some(dc)) if skills.len() > 1 => {
            let mut parts = skills.to_vec();
            parts.push(dc.to_string());
            parts
        },
        (Some(ability), skills, Some(dc)) if skills.len() > 1 => {
            let mut parts = vec![ability.to_string()];
            parts.extend(skills.iter().cloned());
            parts.push(dc.to_string());
            parts
        },
        _ => return None,
    };
    Some(parts)
}
