use enricher_data::{ReferenceCategory, ReferenceOptions};

use super::helpers::{tokenize, unquote};

/// Parse a `&Reference[...]` body: `category=value` or a bare rule name,
/// optionally followed by `apply=true|false`.
pub(super) fn parse_reference(body: &str) -> ReferenceOptions {
    let mut options = ReferenceOptions::default();
    let mut tokens = tokenize(body);

    match tokens.last().map(String::as_str) {
        Some("apply=false") => options.apply = Some(false),
        Some("apply=true") => options.apply = Some(true),
        _ => {},
    }
    if options.apply.is_some() {
        tokens.pop();
    }

    let rest = tokens.join(" ");
    if rest.is_empty() {
        return options;
    }
    let categorized = rest
        .split_once('=')
        .and_then(|(key, value)| ReferenceCategory::from_key(key).map(|category| (category, value)));
    match categorized {
        Some((category, value)) => {
            options.category = Some(category);
            options.rule = Some(unquote(value)).filter(|v| !v.is_empty());
        },
        None => options.rule = Some(unquote(&rest)),
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_rule_with_apply() {
        let options = parse_reference("prone apply=false");
        assert_eq!(options.rule.as_deref(), Some("prone"));
        assert_eq!(options.apply, Some(false));
        assert_eq!(options.category, None);
    }

    #[test]
    fn explicit_category() {
        let options = parse_reference("damageType=\"psychic fire\"");
        assert_eq!(options.category, Some(ReferenceCategory::DamageType));
        assert_eq!(options.rule.as_deref(), Some("psychic fire"));
    }

    #[test]
    fn quoted_rule_keeps_equals() {
        let options = parse_reference("\"a=b\"");
        assert_eq!(options.category, None);
        assert_eq!(options.rule.as_deref(), Some("a=b"));
    }

    #[test]
    fn empty_body() {
        assert_eq!(parse_reference(""), ReferenceOptions::default());
    }
}
