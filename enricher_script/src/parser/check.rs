use enricher_data::{
    Ability, CheckOptions, CommandKind, DisplayFormat, NumberOrText, OneOrMany, RulesVersion, Skill, normalize_ability,
    normalize_skill,
};
use log::debug;

use super::helpers::{keyword, split_key_value, split_list, tokenize};

/// Parse a check, skill, or tool body.
///
/// Any `=` in the body switches to `key=value` parsing. Bare tokens are
/// classified as ability, skill, integer DC, and finally as a custom skill
/// (or a tool under `/tool`).
pub(super) fn parse_check(body: &str, kind: CommandKind) -> CheckOptions {
    let mut options = CheckOptions::default();
    let mut skills = Vec::new();
    let mut tools = Vec::new();
    let explicit = body.contains('=');

    for token in tokenize(body) {
        if explicit {
            if let Some((key, value)) = split_key_value(&token) {
                match key {
                    "ability" => options.ability = Some(normalize_ability(&value)),
                    "skill" => skills.extend(split_list(&value).iter().map(|s| normalize_skill(s))),
                    "tool" => tools.extend(split_list(&value)),
                    "vehicle" => options.vehicle = Some(value),
                    "dc" => options.dc = Some(NumberOrText::parse(&value)),
                    "format" => options.format = keyword(key, &value, DisplayFormat::from_keyword),
                    "passive" => options.passive = Some(value == "true"),
                    "activity" => options.activity = Some(value),
                    "rules" => options.rules = keyword(key, &value, RulesVersion::from_keyword),
                    other => debug!("ignoring unknown check key '{other}'"),
                }
                continue;
            }
        }

        if let Some(ability) = Ability::lookup(&token) {
            if options.ability.is_none() {
                options.ability = Some(ability.as_str().to_string());
            } else {
                debug!("second ability '{token}' in check kept as a skill");
                skills.push(ability.as_str().to_string());
            }
        } else if let Some(skill) = Skill::lookup(&token) {
            skills.push(skill.as_str().to_string());
        } else if let Ok(dc) = token.parse::<i64>() {
            options.dc = Some(NumberOrText::Number(dc));
        } else if kind == CommandKind::Tool {
            tools.push(token);
        } else {
            skills.push(token);
        }
    }

    options.skill = OneOrMany::from_values(skills);
    options.tool = OneOrMany::from_values(tools);
    options
}
