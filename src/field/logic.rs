//! Logical (soft) delete markers of a field.

use crate::config::{GlobalConfig, LogicDeleteOverride};

/// Which marker a logical-delete condition compares against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicState {
    Deleted,
    NotDeleted,
}

/// Resolved marker pair of a logical-delete field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogicMarkers {
    pub delete_value: Option<String>,
    pub not_delete_value: Option<String>,
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.is_empty())
}

/// Resolve markers for a field. `None` when logical delete is globally disabled
/// (no global "deleted" marker) or the field carries no logical-delete override.
pub fn resolve_logic_delete(
    config: &GlobalConfig,
    field: Option<&LogicDeleteOverride>,
) -> Option<LogicMarkers> {
    config.logic_delete_value.as_ref()?;
    let logic = field?;
    let not_delete_value = non_empty(&logic.value)
        .map(str::to_string)
        .or_else(|| config.logic_not_delete_value.clone());
    let delete_value = non_empty(&logic.delval)
        .map(str::to_string)
        .or_else(|| config.logic_delete_value.clone());
    Some(LogicMarkers {
        delete_value,
        not_delete_value,
    })
}
