//! `{{token}}` substitution for comment templates.

use super::tokens::TokenMap;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Replace every `{{name}}` whose name is in `tokens`
///
/// Unknown placeholders are kept verbatim. The template is scanned once and
/// inserted values are never scanned again, so a value containing `{{...}}`
/// is emitted as-is.
pub fn replace_tokens(template: &str, tokens: &TokenMap) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let replacement = after_open
            .find(CLOSE)
            .and_then(|end| tokens.get(&after_open[..end]).map(|value| (value, end)));

        match replacement {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after_open[end + CLOSE.len()..];
            }
            None => {
                // Not a known token: keep the braces and resume scanning right after them
                out.push_str(OPEN);
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}
