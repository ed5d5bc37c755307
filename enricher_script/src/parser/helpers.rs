use log::debug;

/// Split a command body on whitespace, keeping double-quoted runs (including
/// the quotes) inside a single token. An unterminated quote runs to the end.
pub(super) fn tokenize(body: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in body.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            },
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            },
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Strip one pair of surrounding double quotes, if present.
pub(super) fn unquote(s: &str) -> String {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
        .to_string()
}

/// Split `key=value` at the first `=`, unquoting the value.
pub(super) fn split_key_value(token: &str) -> Option<(&str, String)> {
    let (key, value) = token.split_once('=')?;
    Some((key, unquote(value)))
}

/// Decode a keyword-valued field, logging values outside the vocabulary.
pub(super) fn keyword<T>(key: &str, value: &str, decode: fn(&str) -> Option<T>) -> Option<T> {
    let decoded = decode(value);
    if decoded.is_none() {
        debug!("ignoring unknown {key} value '{value}'");
    }
    decoded
}

/// Split a slash-joined list, dropping empty entries.
pub(super) fn split_list(value: &str) -> Vec<String> {
    value
        .split('/')
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
