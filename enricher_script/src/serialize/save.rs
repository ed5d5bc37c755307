use enricher_data::{CommandInput, NumberOrText, SaveOptions, normalize_ability};

use super::{pair, present, wrap};

/// Serialize a saving throw, or a concentration save when `concentration`
/// is set. The flag only changes the keyword.
///
/// ```
/// use enricher_data::{NumberOrText, SaveOptions};
/// use enricher_script::serialize_save;
///
/// let options = SaveOptions {
///     ability: Some("dex".into()),
///     dc: Some(NumberOrText::Number(15)),
///     ..SaveOptions::default()
/// };
/// assert_eq!(serialize_save(options, false), "[[/save dexterity 15]]");
/// ```
pub fn serialize_save(input: impl Into<CommandInput<SaveOptions>>, concentration: bool) -> String {
    let keyword = if concentration { "concentration" } else { "save" };
    match input.into() {
        CommandInput::Empty => wrap(keyword, &[]),
        CommandInput::Text(text) => wrap(keyword, &[text]),
        CommandInput::Number(n) => wrap(keyword, &[n.to_string()]),
        CommandInput::Options(options) => wrap(keyword, &save_body(&options)),
    }
}

fn save_body(options: &SaveOptions) -> Vec<String> {
    let abilities: Vec<String> = options
        .ability
        .iter()
        .flat_map(|a| a.values())
        .filter(|a| !a.is_empty())
        .map(normalize_ability)
        .collect();
    let activity = present(options.activity.as_ref());
    let text_dc = matches!(options.dc, Some(NumberOrText::Text(_)));

    if !text_dc && options.format.is_none() && activity.is_none() {
        match (abilities.is_empty(), options.dc.as_ref().and_then(NumberOrText::as_number)) {
            (_, None) => return abilities,
            (false, Some(dc)) => {
                let mut parts = abilities;
                parts.push(dc.to_string());
                return parts;
            },
            // A DC with no ability has no positional slot.
            (true, Some(_)) => {},
        }
    }

    let mut parts = Vec::new();
    if !abilities.is_empty() {
        parts.push(pair("ability", &abilities.join("/")));
    }
    if let Some(dc) = &options.dc {
        parts.push(pair("dc", &dc.to_string()));
    }
    if let Some(format) = options.format {
        parts.push(pair("format", format.as_str()));
    }
    if let Some(activity) = activity {
        parts.push(pair("activity", activity));
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use enricher_data::{DisplayFormat, OneOrMany};

    #[test]
    fn keyword_follows_flag() {
        assert_eq!(serialize_save(SaveOptions::default(), false), "[[/save]]");
        assert_eq!(serialize_save(CommandInput::<SaveOptions>::Empty, true), "[[/concentration]]");
        assert_eq!(serialize_save("dex", false), "[[/save dex]]");
    }

    #[test]
    fn shorthand_patterns() {
        let mut options = SaveOptions {
            ability: Some("con".into()),
            ..SaveOptions::default()
        };
        assert_eq!(serialize_save(options.clone(), false), "[[/save constitution]]");
        options.dc = Some(NumberOrText::Number(12));
        assert_eq!(serialize_save(options.clone(), true), "[[/concentration constitution 12]]");
        options.ability = Some(OneOrMany::from(vec!["str", "dex"]));
        assert_eq!(serialize_save(options.clone(), false), "[[/save strength dexterity 12]]");
        options.dc = None;
        assert_eq!(serialize_save(options, false), "[[/save strength dexterity]]");
    }

    #[test]
    fn dc_without_ability_is_explicit() {
        let options = SaveOptions {
            dc: Some(NumberOrText::Number(10)),
            ..SaveOptions::default()
        };
        assert_eq!(serialize_save(options, true), "[[/concentration dc=10]]");
    }

    #[test]
    fn explicit_order() {
        let options = SaveOptions {
            ability: Some(OneOrMany::from(vec!["wis", "cha"])),
            dc: Some(NumberOrText::Text("@abilities.wis.dc".into())),
            format: Some(DisplayFormat::Long),
            activity: Some("save01".into()),
        };
        assert_eq!(
            serialize_save(options, false),
            "[[/save ability=wisdom/charisma dc=@abilities.wis.dc format=long activity=save01]]"
        );
    }
}
