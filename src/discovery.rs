//! Build the field descriptors of one table and derive its logical-delete flag.

use crate::config::{GlobalConfig, TableConfig};
use crate::field::FieldDescriptor;

/// Descriptors of one table, in attribute order.
#[derive(Clone, Debug)]
pub struct FieldSet {
    pub table: String,
    pub fields: Vec<FieldDescriptor>,
    /// True when any field is a logical-delete field. Never cleared by later fields.
    pub logic_delete: bool,
}

impl FieldSet {
    pub fn logic_delete_field(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.is_logic_delete())
    }

    pub fn field(&self, property: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.property() == property)
    }
}

/// Sequential startup step: one descriptor per attribute.
pub fn discover(config: &GlobalConfig, table: &TableConfig) -> FieldSet {
    let ctx = table.context(config);
    let fields: Vec<FieldDescriptor> = table
        .attributes
        .iter()
        .map(|attr| FieldDescriptor::new(config, ctx, attr))
        .collect();
    let logic_delete = fields.iter().any(FieldDescriptor::is_logic_delete);
    tracing::debug!(
        table = %table.name,
        fields = fields.len(),
        logic_delete,
        "table fields discovered"
    );
    FieldSet {
        table: table.name.clone(),
        fields,
        logic_delete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Attribute, LogicDeleteOverride};
    use crate::field::FieldType;

    #[test]
    fn one_logical_field_marks_the_table() {
        let config = GlobalConfig {
            logic_delete_value: Some("1".into()),
            logic_not_delete_value: Some("0".into()),
            ..GlobalConfig::default()
        };
        let table = TableConfig {
            name: "user".into(),
            under_camel: None,
            attributes: vec![
                Attribute::new("id", FieldType::Integer),
                Attribute::new("deleted", FieldType::Integer).with_logic(LogicDeleteOverride::default()),
                Attribute::new("userName", FieldType::Text),
            ],
        };
        let set = discover(&config, &table);
        assert!(set.logic_delete);
        assert_eq!(set.logic_delete_field().map(|f| f.property()), Some("deleted"));
        assert_eq!(set.field("userName").map(|f| f.column()), Some("user_name"));
    }

    #[test]
    fn table_naming_override() {
        let table = TableConfig {
            name: "legacy".into(),
            under_camel: Some(false),
            attributes: vec![Attribute::new("userName", FieldType::Text)],
        };
        let set = discover(&GlobalConfig::default(), &table);
        assert!(!set.logic_delete);
        assert_eq!(set.fields[0].column(), "userName");
    }
}
