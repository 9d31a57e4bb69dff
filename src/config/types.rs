//! Raw config types: global database settings, per-table naming, per-attribute overrides.

use crate::dialect::DbType;
use crate::field::{FieldStrategy, FieldType, FillPolicy};
use serde::{Deserialize, Serialize};

/// Global database settings shared read-only by every field descriptor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub db_type: DbType,
    /// Default inclusion strategy for fields without an explicit one.
    #[serde(default)]
    pub field_strategy: FieldStrategy,
    /// Global "deleted" marker. Logical delete is disabled when unset.
    #[serde(default)]
    pub logic_delete_value: Option<String>,
    #[serde(default)]
    pub logic_not_delete_value: Option<String>,
    /// camelCase properties map to underscore columns.
    #[serde(default = "default_true")]
    pub column_underline: bool,
    /// Uppercase generated column names.
    #[serde(default)]
    pub capital_mode: bool,
    /// Text fields without an explicit condition compare with the dialect LIKE template.
    #[serde(default)]
    pub column_like: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            db_type: DbType::default(),
            field_strategy: FieldStrategy::default(),
            logic_delete_value: None,
            logic_not_delete_value: None,
            column_underline: true,
            capital_mode: false,
            column_like: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Owning table as seen by its fields: only the naming convention is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableContext {
    pub under_camel: bool,
}

/// Per-attribute mapping override. Every unset entry falls back to the global rule.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldOverride {
    /// Explicit column name, used as-is.
    #[serde(default)]
    pub value: Option<String>,
    /// Explicit binding expression, e.g. `userName,typeHandler=JsonHandler`.
    #[serde(default)]
    pub el: Option<String>,
    #[serde(default)]
    pub jdbc_type: Option<String>,
    #[serde(default)]
    pub type_handler: Option<String>,
    #[serde(default = "default_true")]
    pub select: bool,
    #[serde(default)]
    pub fill: FillPolicy,
    #[serde(default)]
    pub strategy: Option<FieldStrategy>,
    /// Two-slot WHERE template (column, placeholder key).
    #[serde(default)]
    pub condition: Option<String>,
    /// One-slot UPDATE SET expression applied to the column, e.g. `%s+1`.
    #[serde(default)]
    pub update: Option<String>,
}

impl Default for FieldOverride {
    fn default() -> Self {
        FieldOverride {
            value: None,
            el: None,
            jdbc_type: None,
            type_handler: None,
            select: true,
            fill: FillPolicy::None,
            strategy: None,
            condition: None,
            update: None,
        }
    }
}

/// Marks an attribute as the logical-delete flag; empty values use the global markers.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LogicDeleteOverride {
    /// "Not deleted" marker.
    #[serde(default)]
    pub value: Option<String>,
    /// "Deleted" marker.
    #[serde(default)]
    pub delval: Option<String>,
}

/// One discovered attribute of a mapped entity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
    #[serde(default)]
    pub field: Option<FieldOverride>,
    #[serde(default)]
    pub logic: Option<LogicDeleteOverride>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Attribute {
            name: name.into(),
            ty,
            field: None,
            logic: None,
        }
    }

    pub fn with_field(mut self, field: FieldOverride) -> Self {
        self.field = Some(field);
        self
    }

    pub fn with_logic(mut self, logic: LogicDeleteOverride) -> Self {
        self.logic = Some(logic);
        self
    }
}

/// Attributes of one mapped entity, as produced by discovery.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableConfig {
    pub name: String,
    /// Overrides the global naming convention for this table.
    #[serde(default)]
    pub under_camel: Option<bool>,
    pub attributes: Vec<Attribute>,
}

impl TableConfig {
    pub fn context(&self, global: &GlobalConfig) -> TableContext {
        TableContext {
            under_camel: self.under_camel.unwrap_or(global.column_underline),
        }
    }
}
