use enricher_data::{AttackOptions, CommandInput, NumberOrText, is_ability, normalize_ability};

use super::{pair, present, quote_if_needed, wrap};

const KEYWORD: &str = "attack";

/// Serialize an attack command.
///
/// A bare ability name uses the older `@attack[ability]` syntax.
///
/// ```
/// use enricher_data::{AttackOptions, NumberOrText};
/// use enricher_script::serialize_attack;
///
/// let options = AttackOptions {
///     formula: Some(NumberOrText::Number(5)),
///     ..AttackOptions::default()
/// };
/// assert_eq!(serialize_attack(options), "[[/attack +5]]");
/// assert_eq!(serialize_attack("str"), "@attack[strength]");
/// ```
pub fn serialize_attack(input: impl Into<CommandInput<AttackOptions>>) -> String {
    match input.into() {
        CommandInput::Empty => wrap(KEYWORD, &[]),
        CommandInput::Text(text) if is_ability(&text) => format!("@attack[{}]", normalize_ability(&text)),
        CommandInput::Text(text) => wrap(KEYWORD, &[text]),
        CommandInput::Number(n) => wrap(KEYWORD, &[signed(n)]),
        CommandInput::Options(options) => wrap(KEYWORD, &attack_body(&options)),
    }
}

/// Numbers always carry a sign.
fn signed(n: i64) -> String {
    if n >= 0 { format!("+{n}") } else { n.to_string() }
}

fn formula_text(formula: &NumberOrText) -> String {
    match formula {
        NumberOrText::Number(n) => signed(*n),
        NumberOrText::Text(text) => text.clone(),
    }
}

fn attack_body(options: &AttackOptions) -> Vec<String> {
    let formula = options
        .formula
        .as_ref()
        .map(formula_text)
        .filter(|f| !f.is_empty());
    let signed_formula = formula
        .as_deref()
        .is_some_and(|f| f.starts_with('+') || f.starts_with('-'));
    let activity = present(options.activity.as_ref());
    let attack_mode = present(options.attack_mode.as_ref());

    match (&formula, activity, attack_mode, options.format, options.rules) {
        (None, None, None, None, None) => return Vec::new(),
        (None, None, None, Some(format), None) => return vec![format.as_str().to_string()],
        (Some(formula), None, None, None, None) if signed_formula => return vec![formula.clone()],
        (Some(formula), None, Some(mode), None, None) => {
            let unsigned = formula.strip_prefix('+').unwrap_or(formula.as_str());
            return vec![unsigned.to_string(), mode.to_string()];
        },
        _ => {},
    }

    let mut parts = Vec::new();
    if let Some(formula) = &formula {
        if signed_formula {
            parts.push(quote_if_needed(formula));
        } else {
            parts.push(pair("formula", formula));
        }
    }
    if let Some(activity) = activity {
        parts.push(pair("activity", activity));
    }
    if let Some(mode) = attack_mode {
        parts.push(pair("attackMode", mode));
    }
    if let Some(format) = options.format {
        parts.push(pair("format", format.as_str()));
    }
    if let Some(rules) = options.rules {
        parts.push(pair("rules", rules.as_str()));
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use enricher_data::{DisplayFormat, RulesVersion};

    #[test]
    fn empty_and_legacy_inputs() {
        assert_eq!(serialize_attack(CommandInput::<AttackOptions>::Empty), "[[/attack]]");
        assert_eq!(serialize_attack(AttackOptions::default()), "[[/attack]]");
        assert_eq!(serialize_attack("strength"), "@attack[strength]");
        assert_eq!(serialize_attack("DEX"), "@attack[dexterity]");
        assert_eq!(serialize_attack("Strength"), "[[/attack Strength]]");
        assert_eq!(serialize_attack("+7"), "[[/attack +7]]");
        assert_eq!(serialize_attack(CommandInput::<AttackOptions>::Number(3)), "[[/attack +3]]");
        assert_eq!(serialize_attack(CommandInput::<AttackOptions>::Number(-1)), "[[/attack -1]]");
    }

    #[test]
    fn format_only() {
        let options = AttackOptions {
            format: Some(DisplayFormat::Extended),
            ..AttackOptions::default()
        };
        assert_eq!(serialize_attack(options), "[[/attack extended]]");
    }

    #[test]
    fn numeric_formula_gets_plus_sign() {
        let options = AttackOptions {
            formula: Some(NumberOrText::Number(5)),
            ..AttackOptions::default()
        };
        assert_eq!(serialize_attack(options), "[[/attack +5]]");
    }

    #[test]
    fn unsigned_string_formula_is_explicit() {
        let options = AttackOptions {
            formula: Some(NumberOrText::Text("1d4+2".into())),
            ..AttackOptions::default()
        };
        assert_eq!(serialize_attack(options), "[[/attack formula=1d4+2]]");
    }

    #[test]
    fn attack_mode_strips_plus() {
        let mut options = AttackOptions {
            formula: Some(NumberOrText::Number(5)),
            attack_mode: Some("thrown".into()),
            ..AttackOptions::default()
        };
        assert_eq!(serialize_attack(options.clone()), "[[/attack 5 thrown]]");
        options.formula = Some(NumberOrText::Text("-2".into()));
        assert_eq!(serialize_attack(options), "[[/attack -2 thrown]]");
    }

    #[test]
    fn signed_formula_stays_bare_in_explicit_form() {
        let options = AttackOptions {
            formula: Some(NumberOrText::Number(4)),
            activity: Some("swing".into()),
            attack_mode: Some("twoHanded".into()),
            format: Some(DisplayFormat::Long),
            rules: Some(RulesVersion::Legacy),
        };
        assert_eq!(
            serialize_attack(options),
            "[[/attack +4 activity=swing attackMode=twoHanded format=long rules=2014]]"
        );
    }

    #[test]
    fn activity_alone_is_explicit() {
        let options = AttackOptions {
            activity: Some("abc".into()),
            ..AttackOptions::default()
        };
        assert_eq!(serialize_attack(options), "[[/attack activity=abc]]");
    }
}
