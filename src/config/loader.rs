//! Load global and table config from JSON, validated.

use crate::config::{validate_global, validate_table, GlobalConfig, TableConfig};
use crate::error::ConfigError;

/// Parse and validate global settings.
pub fn load_global_config(json: &str) -> Result<GlobalConfig, ConfigError> {
    let config: GlobalConfig = serde_json::from_str(json)?;
    validate_global(&config)?;
    tracing::debug!(
        db_type = ?config.db_type,
        field_strategy = ?config.field_strategy,
        logic_delete = config.logic_delete_value.is_some(),
        "global config loaded"
    );
    Ok(config)
}

/// Parse and validate one table definition.
pub fn load_table_config(json: &str) -> Result<TableConfig, ConfigError> {
    let table: TableConfig = serde_json::from_str(json)?;
    validate_table(&table)?;
    tracing::debug!(table = %table.name, attributes = table.attributes.len(), "table config loaded");
    Ok(table)
}
