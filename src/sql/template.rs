//! Positional `%s` templates for conditions (column, placeholder key) and update expressions (column).

/// Default WHERE comparison: `column=#{key}`.
pub const EQUAL: &str = "%s=#{%s}";

/// Number of `%s` slots in a template (`%%` is an escaped percent sign).
pub fn slot_count(template: &str) -> usize {
    let mut n = 0;
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c == '%' && chars.next() == Some('s') {
            n += 1;
        }
    }
    n
}

/// Fill `%s` slots in order. Missing arguments render as empty; `%%` renders as `%`.
/// e.g. `format_template("%s=#{%s}", &["user_name", "et.userName"])` -> `user_name=#{et.userName}`
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + args.iter().map(|a| a.len()).sum::<usize>());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('s') => {
                chars.next();
                if let Some(a) = args.next() {
                    out.push_str(a);
                }
            }
            Some('%') => {
                chars.next();
                out.push('%');
            }
            _ => out.push('%'),
        }
    }
    out
}
