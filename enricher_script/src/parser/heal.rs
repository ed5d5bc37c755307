use enricher_data::{Average, DisplayFormat, HealOptions, HealType};
use log::debug;

use super::damage::peel_suffixes;
use super::helpers::{keyword, split_key_value, tokenize};

/// Parse a heal body. Like damage, explicit parsing needs `=` in the first
/// token.
pub(super) fn parse_heal(body: &str) -> HealOptions {
    let mut tokens = tokenize(body);
    let mut options = HealOptions::default();
    if tokens.is_empty() {
        return options;
    }

    if tokens[0].contains('=') {
        for token in tokens {
            if token == "average" {
                options.average = Some(Average::Flag(true));
                continue;
            }
            let Some((key, value)) = split_key_value(&token) else {
                debug!("ignoring bare token '{token}' in explicit heal");
                continue;
            };
            match key {
                "formula" => options.formula = Some(value),
                "type" => options.heal_type = keyword(key, &value, HealType::from_keyword),
                "average" => options.average = Some(Average::parse(&value)),
                "activity" => options.activity = Some(value),
                "format" => options.format = keyword(key, &value, DisplayFormat::from_keyword),
                other => debug!("ignoring unknown heal key '{other}'"),
            }
        }
        return options;
    }

    let suffixes = peel_suffixes(&mut tokens);
    options.average = suffixes.average;
    options.format = suffixes.format;
    options.activity = suffixes.activity;

    let mut formula = Vec::new();
    for token in tokens {
        match HealType::from_keyword(&token) {
            Some(heal_type) => options.heal_type = Some(heal_type),
            None => formula.push(token),
        }
    }
    if !formula.is_empty() {
        options.formula = Some(formula.join(" "));
    }
    options
}
