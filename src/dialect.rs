//! Database dialects: LIKE comparison template and identifier quoting per database.

use serde::{Deserialize, Serialize};

/// Quotes identifiers for SELECT projections.
/// `is_column` is true for the column side and false for the property alias after `AS`.
pub trait IdentifierQuoter {
    fn quote(&self, ident: &str, is_column: bool) -> String;
}

impl<F> IdentifierQuoter for F
where
    F: Fn(&str, bool) -> String,
{
    fn quote(&self, ident: &str, is_column: bool) -> String {
        self(ident, is_column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    #[default]
    Mysql,
    Mariadb,
    H2,
    Sqlite,
    Postgres,
    Oracle,
    Db2,
    Sqlserver,
    Other,
}

impl DbType {
    /// Two-slot (column, placeholder key) LIKE condition for this database.
    pub fn like_template(&self) -> &'static str {
        match self {
            Self::Mysql | Self::Mariadb | Self::H2 | Self::Other => "%s LIKE CONCAT('%%',#{%s},'%%')",
            Self::Oracle | Self::Db2 => "%s LIKE CONCAT(CONCAT('%%',#{%s}),'%%')",
            Self::Postgres | Self::Sqlite => "%s LIKE '%%'||#{%s}||'%%'",
            Self::Sqlserver => "%s LIKE '%%'+#{%s}+'%%'",
        }
    }
}

fn is_quoted(ident: &str) -> bool {
    let mut chars = ident.chars();
    match (chars.next(), chars.last()) {
        (Some('`'), Some('`')) | (Some('"'), Some('"')) | (Some('['), Some(']')) => true,
        _ => false,
    }
}

fn backticks(s: &str) -> String {
    format!("`{}`", s.replace('`', "``"))
}

fn double_quotes(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

impl IdentifierQuoter for DbType {
    fn quote(&self, ident: &str, is_column: bool) -> String {
        if is_quoted(ident) {
            return ident.to_string();
        }
        match self {
            Self::Mysql | Self::Mariadb | Self::H2 | Self::Sqlite => backticks(ident),
            // Unquoted identifiers fold to lowercase; only mixed-case columns need quoting.
            Self::Postgres => {
                if is_column && ident.to_lowercase() == ident {
                    ident.to_string()
                } else {
                    double_quotes(ident)
                }
            }
            Self::Oracle | Self::Db2 => {
                if is_column {
                    ident.to_string()
                } else {
                    double_quotes(ident)
                }
            }
            Self::Sqlserver => format!("[{}]", ident.replace(']', "]]")),
            Self::Other => ident.to_string(),
        }
    }
}
