use enricher_data::ItemOptions;
use lazy_static::lazy_static;
use regex::Regex;

use super::helpers::{tokenize, unquote};

lazy_static! {
    static ref ITEM_UUID: Regex = Regex::new(r"^Actor\.[A-Za-z0-9]+\.Item\.[A-Za-z0-9]+$").expect("uuid pattern is valid");
    static ref RELATIVE_ID: Regex = Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("relative id pattern is valid");
}

/// Parse an item body.
///
/// A single plain word cannot be told apart from a relative id and is
/// always read as one, even when it was written as an item name.
pub(super) fn parse_item(body: &str) -> ItemOptions {
    let mut options = ItemOptions::default();
    let mut tokens = tokenize(body);

    if tokens.len() > 1 {
        if let Some(last) = tokens.last().filter(|t| t.len() > 1 && t.starts_with('"') && t.ends_with('"')) {
            options.activity = Some(unquote(last));
            tokens.pop();
        }
    }
    let Some(first) = tokens.first() else {
        return options;
    };

    let rest = || {
        let rest = tokens[1..].iter().map(|t| unquote(t)).collect::<Vec<_>>().join(" ");
        Some(rest).filter(|r| !r.is_empty())
    };

    if ITEM_UUID.is_match(first) {
        options.uuid = Some(first.clone());
        options.activity = options.activity.take().or_else(rest);
    } else if first.starts_with('.') {
        options.relative_id = Some(first.clone());
        options.activity = options.activity.take().or_else(rest);
    } else if tokens.len() == 1 && RELATIVE_ID.is_match(first) {
        options.relative_id = Some(first.clone());
    } else {
        options.item_name = Some(tokens.iter().map(|t| unquote(t)).collect::<Vec<_>>().join(" "));
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_with_activity() {
        let options = parse_item("Actor.abc.Item.def Swing");
        assert_eq!(options.uuid.as_deref(), Some("Actor.abc.Item.def"));
        assert_eq!(options.activity.as_deref(), Some("Swing"));
    }

    #[test]
    fn leading_dot_is_relative() {
        let options = parse_item(".Item.xyz \"Throw It\"");
        assert_eq!(options.relative_id.as_deref(), Some(".Item.xyz"));
        assert_eq!(options.activity.as_deref(), Some("Throw It"));
    }

    #[test]
    fn single_word_is_relative_id() {
        assert_eq!(
            parse_item("Bite"),
            ItemOptions {
                relative_id: Some("Bite".into()),
                ..ItemOptions::default()
            }
        );
    }

    #[test]
    fn spaced_name() {
        let options = parse_item("Flame Tongue");
        assert_eq!(options.item_name.as_deref(), Some("Flame Tongue"));
        assert_eq!(options.relative_id, None);
    }

    #[test]
    fn name_with_quoted_activity() {
        let options = parse_item("Flame Tongue \"Ignite Blade\"");
        assert_eq!(options.item_name.as_deref(), Some("Flame Tongue"));
        assert_eq!(options.activity.as_deref(), Some("Ignite Blade"));
    }

    #[test]
    fn empty_body() {
        assert_eq!(parse_item(""), ItemOptions::default());
    }
}
