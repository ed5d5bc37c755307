use enricher_data::{ATTACK_MODES, AttackOptions, DisplayFormat, NumberOrText, RulesVersion};
use log::debug;

use super::helpers::{keyword, split_key_value, tokenize, unquote};

/// Parse an attack body. Bare tokens that are neither a display format nor
/// an attack mode make up the formula.
pub(super) fn parse_attack(body: &str) -> AttackOptions {
    let mut options = AttackOptions::default();
    let mut formula = Vec::new();
    let explicit = body.contains('=');

    for token in tokenize(body) {
        if explicit {
            if let Some((key, value)) = split_key_value(&token) {
                match key {
                    "formula" => options.formula = Some(NumberOrText::parse(&value)),
                    "activity" => options.activity = Some(value),
                    "attackMode" => options.attack_mode = Some(value),
                    "format" => options.format = keyword(key, &value, DisplayFormat::from_keyword),
                    "rules" => options.rules = keyword(key, &value, RulesVersion::from_keyword),
                    other => debug!("ignoring unknown attack key '{other}'"),
                }
                continue;
            }
        }
        if let Some(format) = DisplayFormat::from_keyword(&token) {
            options.format = Some(format);
        } else if ATTACK_MODES.contains(&token.as_str()) {
            options.attack_mode = Some(token);
        } else {
            formula.push(unquote(&token));
        }
    }

    if !formula.is_empty() {
        options.formula = Some(NumberOrText::parse(&formula.join(" ")));
    }
    options
}
