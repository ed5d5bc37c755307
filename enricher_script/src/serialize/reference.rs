use enricher_data::{
    CommandInput, ReferenceCategory, ReferenceOptions, infer_reference_category, normalize_reference,
};

use super::{present, quote_if_needed};

/// Serialize a `&Reference[...]` rule link.
///
/// ```
/// use enricher_data::ReferenceOptions;
/// use enricher_script::serialize_reference;
///
/// let options = ReferenceOptions {
///     rule: Some("prone".into()),
///     apply: Some(false),
///     ..ReferenceOptions::default()
/// };
/// assert_eq!(serialize_reference(options), "&Reference[prone apply=false]");
/// ```
pub fn serialize_reference(input: impl Into<CommandInput<ReferenceOptions>>) -> String {
    match input.into() {
        CommandInput::Empty => "&Reference[]".to_string(),
        CommandInput::Text(text) => format!("&Reference[{text}]"),
        CommandInput::Number(n) => format!("&Reference[{n}]"),
        CommandInput::Options(options) => format!("&Reference[{}]", reference_body(&options)),
    }
}

fn reference_body(options: &ReferenceOptions) -> String {
    let Some(rule) = present(options.rule.as_ref()) else {
        return String::new();
    };
    let (category, value) = match options.category {
        Some(ReferenceCategory::Rule) => (ReferenceCategory::Rule, format!("rule={}", quote_if_needed(rule))),
        Some(category) => {
            let value = normalize_reference(category, rule);
            (category, format!("{}={}", category.key(), quote_if_needed(&value)))
        },
        None => match infer_reference_category(rule) {
            Some((category, canonical)) => (category, canonical.to_string()),
            None => (ReferenceCategory::Rule, quote_if_needed(rule)),
        },
    };
    if options.apply == Some(false) && category == ReferenceCategory::Condition {
        format!("{value} apply=false")
    } else {
        value
    }
}
