//! Inclusion strategy and fill policy of a mapped field.

use serde::{Deserialize, Serialize};

/// Controls the guard placed around INSERT/UPDATE fragments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldStrategy {
    Default,
    #[default]
    NotNull,
    NotEmpty,
    Ignored,
}

impl FieldStrategy {
    /// Effective strategy: an explicit per-field value wins, otherwise the global default.
    pub fn resolve(global: FieldStrategy, field: Option<FieldStrategy>) -> FieldStrategy {
        match field {
            Some(s) if s != global => s,
            _ => global,
        }
    }
}

/// Fields filled by an external mechanism are emitted without a guard on the matching statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FillPolicy {
    #[default]
    None,
    OnInsert,
    OnUpdate,
    OnInsertAndUpdate,
}

impl FillPolicy {
    pub fn fills_insert(&self) -> bool {
        matches!(self, Self::OnInsert | Self::OnInsertAndUpdate)
    }

    pub fn fills_update(&self) -> bool {
        matches!(self, Self::OnUpdate | Self::OnInsertAndUpdate)
    }
}
