//! Declared attribute type, classified only as far as fragment generation needs.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Matches leading path segments such as `chrono::` or `std::string::`.
fn path_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[A-Za-z_][A-Za-z0-9_]*::").expect("static pattern"))
}

/// Matches a lifetime and its trailing separator, e.g. `'a ` in `&'a str` or `'a,` in `Cow<'a, str>`.
fn lifetime() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"'[A-Za-z_][A-Za-z0-9_]*\s*,?").expect("static pattern"))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Text,
    Integer,
    Float,
    Boolean,
    Temporal,
    Binary,
    Other(String),
}

impl FieldType {
    /// Classify a Rust type name as written in the entity definition.
    /// e.g. "String" -> Text, "Option<i64>" -> Integer, "chrono::NaiveDateTime" -> Temporal
    pub fn from_type_name(name: &str) -> FieldType {
        let name = lifetime().replace_all(name, "");
        let name: String = name.chars().filter(|c| !c.is_whitespace()).collect();
        let name = path_prefix().replace_all(&name, "").into_owned();
        let inner = name
            .strip_prefix("Option<")
            .and_then(|s| s.strip_suffix('>'))
            .unwrap_or(&name);
        if inner == "Vec<u8>" || inner == "&[u8]" || inner == "Bytes" {
            return FieldType::Binary;
        }
        match inner {
            "String" | "&str" | "str" | "Cow<str>" | "Box<str>" | "Arc<str>" | "Rc<str>" => {
                FieldType::Text
            }
            "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
            | "u128" | "usize" => FieldType::Integer,
            "f32" | "f64" | "Decimal" => FieldType::Float,
            "bool" => FieldType::Boolean,
            "NaiveDate" | "NaiveDateTime" | "NaiveTime" | "DateTime<Utc>" | "DateTime<Local>"
            | "SystemTime" | "OffsetDateTime" | "PrimitiveDateTime" => FieldType::Temporal,
            other => FieldType::Other(other.to_string()),
        }
    }

    /// Whether values of this type are character sequences (eligible for empty-string checks and LIKE).
    pub fn is_char_sequence(&self) -> bool {
        matches!(self, FieldType::Text)
    }
}

impl From<String> for FieldType {
    fn from(s: String) -> Self {
        FieldType::from_type_name(&s)
    }
}

impl From<FieldType> for String {
    fn from(t: FieldType) -> Self {
        match t {
            FieldType::Text => "String".into(),
            FieldType::Integer => "i64".into(),
            FieldType::Float => "f64".into(),
            FieldType::Boolean => "bool".into(),
            FieldType::Temporal => "NaiveDateTime".into(),
            FieldType::Binary => "Vec<u8>".into(),
            FieldType::Other(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_types() {
        for name in [
            "String",
            "&str",
            "Option<String>",
            "std::string::String",
            "Cow<'static, str>",
            "&'a str",
            "Option<&'a str>",
            "Cow<'a, str>",
            "std::borrow::Cow<'de, str>",
        ] {
            assert!(FieldType::from_type_name(name).is_char_sequence(), "{name}");
        }
    }

    #[test]
    fn non_text_types() {
        assert_eq!(FieldType::from_type_name("Option<i64>"), FieldType::Integer);
        assert_eq!(FieldType::from_type_name("chrono::NaiveDateTime"), FieldType::Temporal);
        assert_eq!(FieldType::from_type_name("chrono::DateTime<chrono::Utc>"), FieldType::Temporal);
        assert_eq!(FieldType::from_type_name("Vec<u8>"), FieldType::Binary);
        assert_eq!(FieldType::from_type_name("Uuid"), FieldType::Other("Uuid".into()));
        assert!(!FieldType::Integer.is_char_sequence());
    }

    #[test]
    fn single_char_is_not_a_sequence() {
        assert_eq!(FieldType::from_type_name("char"), FieldType::Other("char".into()));
        assert!(!FieldType::from_type_name("Option<char>").is_char_sequence());
    }
}
