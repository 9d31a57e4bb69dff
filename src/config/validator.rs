//! Config validation: marker sanity, attribute names, template slot counts.

use crate::config::{GlobalConfig, TableConfig};
use crate::error::ConfigError;
use crate::sql::slot_count;
use std::collections::HashSet;

pub fn validate_global(config: &GlobalConfig) -> Result<(), ConfigError> {
    if let Some(del) = &config.logic_delete_value {
        if del.is_empty() {
            return Err(ConfigError::Validation(
                "logic_delete_value must not be empty (omit it to disable logical delete)".into(),
            ));
        }
        if config.logic_not_delete_value.as_deref() == Some(del.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logic_delete_value and logic_not_delete_value are both '{}'",
                del
            )));
        }
    }
    Ok(())
}

pub fn validate_table(table: &TableConfig) -> Result<(), ConfigError> {
    if table.name.trim().is_empty() {
        return Err(ConfigError::Validation("table name must not be empty".into()));
    }
    let mut seen: HashSet<&str> = HashSet::new();
    for attr in &table.attributes {
        if attr.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "table {}: attribute name must not be empty",
                table.name
            )));
        }
        if !seen.insert(attr.name.as_str()) {
            return Err(ConfigError::DuplicateAttribute {
                table: table.name.clone(),
                attribute: attr.name.clone(),
            });
        }
        let Some(field) = &attr.field else { continue };
        if let Some(condition) = field.condition.as_deref().filter(|c| !c.is_empty()) {
            let found = slot_count(condition);
            if found != 2 {
                return Err(ConfigError::InvalidTemplate {
                    kind: "condition",
                    attribute: attr.name.clone(),
                    template: condition.to_string(),
                    found,
                    expected: "2",
                });
            }
        }
        if let Some(update) = field.update.as_deref().filter(|u| !u.is_empty()) {
            let found = slot_count(update);
            if found > 1 {
                return Err(ConfigError::InvalidTemplate {
                    kind: "update",
                    attribute: attr.name.clone(),
                    template: update.to_string(),
                    found,
                    expected: "at most 1",
                });
            }
        }
    }
    Ok(())
}
