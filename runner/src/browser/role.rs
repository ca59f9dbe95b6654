use crate::browser::page::Role;

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// Quotes `value` as an XPath 1.0 string literal.
///
/// XPath has no escape sequences, so a value holding both quote kinds is
/// spliced together with `concat()`.
pub fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{}'", value);
    }
    if !value.contains('"') {
        return format!("\"{}\"", value);
    }

    let parts: Vec<String> = value
        .split('\'')
        .map(|part| format!("'{}'", part))
        .collect();
    format!("concat({})", parts.join(", \"'\", "))
}

fn lowercase(expr: &str) -> String {
    format!("translate({}, '{}', '{}')", expr, UPPER, LOWER)
}

/// Predicate comparing an accessible-name expression to `name`.
///
/// Exact matching compares whitespace-normalized text; loose matching is a
/// case-insensitive substring test.
fn name_predicate(expr: &str, name: &str, exact: bool) -> String {
    let normalized = format!("normalize-space({})", expr);
    if exact {
        format!("{} = {}", normalized, xpath_literal(name.trim()))
    } else {
        format!(
            "contains({}, {})",
            lowercase(&normalized),
            xpath_literal(&name.trim().to_lowercase())
        )
    }
}

/// XPath for an element with the given role and accessible name.
pub fn role_xpath(role: Role, name: &str, exact: bool) -> String {
    match role {
        Role::Button => {
            let by_text = name_predicate(".", name, exact);
            let by_label = name_predicate("@aria-label", name, exact);
            let by_value = name_predicate("@value", name, exact);
            format!(
                "//button[{t} or {l}] | //*[@role='button'][{t} or {l}] | //input[@type='submit' or @type='button'][{v}]",
                t = by_text,
                l = by_label,
                v = by_value
            )
        }
        Role::Textbox => {
            let by_label = name_predicate("@aria-label", name, exact);
            let by_placeholder = name_predicate("@placeholder", name, exact);
            let label_text = name_predicate(".", name, exact);
            let by_for = format!("@id = //label[{}]/@for", label_text);
            let by_wrapper = format!("ancestor::label[{}]", label_text);
            let textual =
                "not(@type) or @type='text' or @type='email' or @type='password' or @type='search' or @type='tel' or @type='url'";
            format!(
                "//input[{ty}][{l} or {p} or {f} or {w}] | //textarea[{l} or {p} or {f} or {w}] | //*[@role='textbox'][{l} or {f} or {w}]",
                ty = textual,
                l = by_label,
                p = by_placeholder,
                f = by_for,
                w = by_wrapper
            )
        }
    }
}
