use enricher_data::{Ability, DisplayFormat, NumberOrText, OneOrMany, SaveOptions, normalize_ability};
use log::debug;

use super::helpers::{keyword, split_key_value, split_list, tokenize};

/// Parse a save or concentration body.
pub(super) fn parse_save(body: &str) -> SaveOptions {
    let mut options = SaveOptions::default();
    let mut abilities = Vec::new();
    let explicit = body.contains('=');

    for token in tokenize(body) {
        if explicit {
            if let Some((key, value)) = split_key_value(&token) {
                match key {
                    "ability" => abilities.extend(split_list(&value).iter().map(|a| normalize_ability(a))),
                    "dc" => options.dc = Some(NumberOrText::parse(&value)),
                    "format" => options.format = keyword(key, &value, DisplayFormat::from_keyword),
                    "activity" => options.activity = Some(value),
                    other => debug!("ignoring unknown save key '{other}'"),
                }
                continue;
            }
        }
        if let Some(ability) = Ability::lookup(&token) {
            abilities.push(ability.as_str().to_string());
        } else if let Ok(dc) = token.parse::<i64>() {
            options.dc = Some(NumberOrText::Number(dc));
        } else {
            abilities.push(token);
        }
    }

    options.ability = OneOrMany::from_values(abilities);
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_abilities_and_dc() {
        let options = parse_save("str dex 14");
        assert_eq!(options.ability, Some(OneOrMany::from(vec!["strength", "dexterity"])));
        assert_eq!(options.dc, Some(NumberOrText::Number(14)));
    }

    #[test]
    fn explicit_keys() {
        let options = parse_save("ability=wis/cha dc=@abilities.wis.dc format=long activity=save01");
        assert_eq!(options.ability, Some(OneOrMany::from(vec!["wisdom", "charisma"])));
        assert_eq!(options.dc, Some(NumberOrText::Text("@abilities.wis.dc".into())));
        assert_eq!(options.format, Some(DisplayFormat::Long));
        assert_eq!(options.activity.as_deref(), Some("save01"));
    }

    #[test]
    fn house_ability_passes_through() {
        assert_eq!(parse_save("sanity").ability, Some(OneOrMany::from("sanity")));
    }
}
