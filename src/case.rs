//! Identifier naming conventions: property names (camelCase) -> column names (underscore form).

/// Convert a property name to lowercase underscore form, splitting before each interior uppercase letter.
/// e.g. "userName" -> "user_name", "createdAt" -> "created_at", "ID" -> "i_d".
/// Already-underscored lowercase text is returned unchanged; blank input yields "".
pub fn camel_to_underline(s: &str) -> String {
    if s.trim().is_empty() {
        return String::new();
    }
    s.char_indices()
        .fold(String::with_capacity(s.len() + 4), |mut out, (i, c)| {
            if i > 0 && c.is_uppercase() {
                out.push('_');
            }
            out.extend(c.to_lowercase());
            out
        })
}

/// Capital-mode column names.
pub fn to_upper_case(s: &str) -> String {
    s.to_uppercase()
}

/// True when `a` and `b` are different identifiers even after case folding.
pub fn differs_ignoring_case(a: &str, b: &str) -> bool {
    a.to_uppercase() != b.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_to_underline_basic() {
        assert_eq!(camel_to_underline("userName"), "user_name");
        assert_eq!(camel_to_underline("createdAtUtc"), "created_at_utc");
        assert_eq!(camel_to_underline("id"), "id");
        assert_eq!(camel_to_underline("Name"), "name");
        assert_eq!(camel_to_underline("  "), "");
    }

    #[test]
    fn camel_to_underline_is_idempotent() {
        for s in ["userName", "a", "orderLineItemId", "user_name", "x_y_z"] {
            let once = camel_to_underline(s);
            assert_eq!(camel_to_underline(&once), once, "input {s}");
        }
    }

    #[test]
    fn case_insensitive_difference() {
        assert!(!differs_ignoring_case("userName", "USERNAME"));
        assert!(differs_ignoring_case("userName", "user_name"));
        assert_eq!(to_upper_case("user_name"), "USER_NAME");
    }
}
