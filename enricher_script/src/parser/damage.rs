use enricher_data::{Average, DamageOptions, DamageRoll, DisplayFormat, HealType, OneOrMany, ReferenceCategory};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::helpers::{keyword, split_key_value, split_list, tokenize, unquote};

/// Shared `average`/`format`/`activity` suffix peeled off a shorthand body.
#[derive(Debug, Default)]
pub(super) struct Suffixes {
    pub average: Option<Average>,
    pub format: Option<DisplayFormat>,
    pub activity: Option<String>,
}

/// Pop trailing suffix tokens off `tokens`.
pub(super) fn peel_suffixes(tokens: &mut Vec<String>) -> Suffixes {
    let mut suffixes = Suffixes::default();
    while let Some(last) = tokens.last() {
        if last == "average" {
            suffixes.average = Some(Average::Flag(true));
        } else if let Some(value) = last.strip_prefix("average=") {
            suffixes.average = Some(Average::parse(&unquote(value)));
        } else if let Some(value) = last.strip_prefix("format=") {
            suffixes.format = keyword("format", &unquote(value), DisplayFormat::from_keyword);
        } else if let Some(value) = last.strip_prefix("activity=") {
            suffixes.activity = Some(unquote(value));
        } else {
            break;
        }
        tokens.pop();
    }
    suffixes
}

lazy_static! {
    static ref FORMULA_TERM: Regex =
        Regex::new(r"^(?:[\d@(+\-*/%]|d(?:\d|%))|[()]").expect("formula term pattern is valid");
}

fn is_damage_type(token: &str) -> bool {
    ReferenceCategory::DamageType.lookup(token).is_some() || HealType::from_keyword(token).is_some()
}

/// Split a positional segment into its formula and its types.
///
/// The first token is the formula unless it is a known type. Following
/// tokens join the formula while they read as operators, numbers, dice,
/// `@` references or parenthesized groups. Everything after that is a type,
/// known or not.
fn split_segment(tokens: &[String]) -> (String, Vec<String>) {
    let formula_len = match tokens.first() {
        Some(first) if !is_damage_type(first) => {
            1 + tokens[1..].iter().take_while(|t| FORMULA_TERM.is_match(t)).count()
        },
        _ => 0,
    };
    (tokens[..formula_len].join(" "), tokens[formula_len..].to_vec())
}

/// Parse a damage body.
///
/// Explicit parsing only applies when the first token is `key=value`, so a
/// shorthand body may still end in `average=5` or `format=long`.
pub(super) fn parse_damage(body: &str) -> DamageOptions {
    let mut tokens = tokenize(body);
    let mut options = DamageOptions::default();
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
                debug!("ignoring bare token '{token}' in explicit damage");
                continue;
            };
            match key {
                "formula" => options.formula = Some(value),
                "type" => options.damage_type = OneOrMany::from_values(split_list(&value)),
                "average" => options.average = Some(Average::parse(&value)),
                "activity" => options.activity = Some(value),
                "format" => options.format = keyword(key, &value, DisplayFormat::from_keyword),
                other => debug!("ignoring unknown damage key '{other}'"),
            }
        }
        return options;
    }

    let suffixes = peel_suffixes(&mut tokens);
    options.average = suffixes.average;
    options.format = suffixes.format;
    options.activity = suffixes.activity;

    if body.contains(" & ") {
        options.rolls = tokens
            .split(|t| t == "&")
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (formula, types) = split_segment(segment);
                DamageRoll {
                    formula,
                    damage_type: OneOrMany::from_values(types),
                }
            })
            .collect();
    } else {
        let (formula, types) = split_segment(&tokens);
        options.formula = Some(formula).filter(|f| !f.is_empty());
        options.damage_type = OneOrMany::from_values(types);
    }
    options
}
