use enricher_data::{CommandInput, ItemOptions};
use log::debug;

use super::{present, quote_if_needed, wrap};

const KEYWORD: &str = "item";

/// Serialize an item enricher.
///
/// Only one identifier is written: `uuid`, then `relative_id`, then
/// `item_name`, whichever is first non-empty.
///
/// ```
/// use enricher_data::ItemOptions;
/// use enricher_script::serialize_item;
///
/// let options = ItemOptions {
///     uuid: Some("Actor.A.Item.B".into()),
///     relative_id: Some("X".into()),
///     item_name: Some("Bite".into()),
///     ..ItemOptions::default()
/// };
/// assert_eq!(serialize_item(options), "[[/item Actor.A.Item.B]]");
/// ```
pub fn serialize_item(input: impl Into<CommandInput<ItemOptions>>) -> String {
    match input.into() {
        CommandInput::Empty => wrap(KEYWORD, &[]),
        CommandInput::Text(text) => wrap(KEYWORD, &[text]),
        CommandInput::Number(n) => wrap(KEYWORD, &[n.to_string()]),
        CommandInput::Options(options) => wrap(KEYWORD, &item_body(&options)),
    }
}

fn item_body(options: &ItemOptions) -> Vec<String> {
    let identifier = present(options.uuid.as_ref())
        .or_else(|| present(options.relative_id.as_ref()))
        .or_else(|| present(options.item_name.as_ref()));
    let Some(identifier) = identifier else {
        if let Some(activity) = present(options.activity.as_ref()) {
            debug!("item activity '{activity}' has no item to attach to; dropped");
        }
        return Vec::new();
    };
    let mut parts = vec![identifier.to_string()];
    if let Some(activity) = present(options.activity.as_ref()) {
        parts.push(quote_if_needed(activity));
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_item() {
        assert_eq!(serialize_item(ItemOptions::default()), "[[/item]]");
        assert_eq!(serialize_item(None::<ItemOptions>), "[[/item]]");
    }

    #[test]
    fn relative_id_beats_name() {
        let options = ItemOptions {
            relative_id: Some(".abc123".into()),
            item_name: Some("Longsword".into()),
            ..ItemOptions::default()
        };
        assert_eq!(serialize_item(options), "[[/item .abc123]]");
    }

    #[test]
    fn empty_uuid_does_not_win() {
        let options = ItemOptions {
            uuid: Some(String::new()),
            item_name: Some("Flame Tongue".into()),
            ..ItemOptions::default()
        };
        assert_eq!(serialize_item(options), "[[/item Flame Tongue]]");
    }

    #[test]
    fn activity_quoted_when_spaced() {
        let options = ItemOptions {
            item_name: Some("Dagger".into()),
            activity: Some("Throw It".into()),
            ..ItemOptions::default()
        };
        assert_eq!(serialize_item(options), "[[/item Dagger \"Throw It\"]]");
    }

    #[test]
    fn activity_without_item_is_dropped() {
        let options = ItemOptions {
            activity: Some("Swing".into()),
            ..ItemOptions::default()
        };
        assert_eq!(serialize_item(options), "[[/item]]");
    }
}
