//! FieldDescriptor: column mapping, inclusion policy and comparison template of one attribute.

use crate::case::{camel_to_underline, differs_ignoring_case, to_upper_case};
use crate::config::{Attribute, FieldOverride, GlobalConfig, TableContext};
use crate::field::logic::{resolve_logic_delete, LogicMarkers};
use crate::field::{FieldStrategy, FieldType, FillPolicy};
use crate::sql::EQUAL;
use std::sync::OnceLock;

/// Mapping metadata of one persistent attribute. Immutable after construction,
/// except for the lazily computed SELECT fragment.
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    pub(crate) property: String,
    pub(crate) property_type: FieldType,
    pub(crate) is_char_sequence: bool,
    pub(crate) column: String,
    /// Placeholder key inside `#{...}`.
    pub(crate) el: String,
    /// Column differs from property: SELECT needs an alias.
    pub(crate) related: bool,
    pub(crate) select: bool,
    pub(crate) strategy: FieldStrategy,
    pub(crate) fill: FillPolicy,
    pub(crate) condition: String,
    pub(crate) update: Option<String>,
    pub(crate) logic_delete_value: Option<String>,
    pub(crate) logic_not_delete_value: Option<String>,
    pub(crate) sql_select: OnceLock<String>,
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.is_empty())
}

/// Condition used when the field has no explicit one: LIKE for text fields when enabled globally.
fn default_condition(config: &GlobalConfig, is_char_sequence: bool) -> String {
    if config.column_like && is_char_sequence {
        config.db_type.like_template().to_string()
    } else {
        EQUAL.to_string()
    }
}

/// Binding expression from an override: explicit `el`, else property plus jdbcType/typeHandler options.
fn override_el(property: &str, field: &FieldOverride) -> String {
    if let Some(el) = non_empty(&field.el) {
        return el.to_string();
    }
    let mut el = property.to_string();
    if let Some(jdbc_type) = non_empty(&field.jdbc_type) {
        el.push_str(",jdbcType=");
        el.push_str(jdbc_type);
    }
    if let Some(handler) = non_empty(&field.type_handler) {
        el.push_str(",typeHandler=");
        el.push_str(handler);
    }
    el
}

impl FieldDescriptor {
    /// Build the descriptor of a discovered attribute. Never fails; every setting has a default.
    pub fn new(config: &GlobalConfig, table: TableContext, attribute: &Attribute) -> Self {
        let descriptor = match &attribute.field {
            Some(field) => Self::with_override(config, table, attribute, field),
            None => Self::without_override(config, table, attribute),
        };
        tracing::debug!(
            property = %descriptor.property,
            column = %descriptor.column,
            related = descriptor.related,
            strategy = ?descriptor.strategy,
            fill = ?descriptor.fill,
            logic_delete = descriptor.is_logic_delete(),
            "field resolved"
        );
        descriptor
    }

    fn with_override(
        config: &GlobalConfig,
        table: TableContext,
        attribute: &Attribute,
        field: &FieldOverride,
    ) -> Self {
        let property = attribute.name.clone();
        let is_char_sequence = attribute.ty.is_char_sequence();
        let column = match non_empty(&field.value) {
            Some(explicit) => explicit.to_string(),
            None if table.under_camel => camel_to_underline(&property),
            None => property.clone(),
        };
        let condition = match non_empty(&field.condition) {
            Some(c) => c.to_string(),
            None => default_condition(config, is_char_sequence),
        };
        let markers = resolve_logic_delete(config, attribute.logic.as_ref());
        Self::assemble(
            attribute,
            column,
            override_el(&property, field),
            field.select,
            FieldStrategy::resolve(config.field_strategy, field.strategy),
            field.fill,
            condition,
            non_empty(&field.update).map(str::to_string),
            markers,
        )
    }

    fn without_override(config: &GlobalConfig, table: TableContext, attribute: &Attribute) -> Self {
        let mut column = attribute.name.clone();
        if table.under_camel {
            column = camel_to_underline(&column);
        }
        if config.capital_mode {
            column = to_upper_case(&column);
        }
        let markers = resolve_logic_delete(config, attribute.logic.as_ref());
        Self::assemble(
            attribute,
            column,
            attribute.name.clone(),
            true,
            config.field_strategy,
            FillPolicy::None,
            default_condition(config, attribute.ty.is_char_sequence()),
            None,
            markers,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        attribute: &Attribute,
        column: String,
        el: String,
        select: bool,
        strategy: FieldStrategy,
        fill: FillPolicy,
        condition: String,
        update: Option<String>,
        markers: Option<LogicMarkers>,
    ) -> Self {
        let (logic_delete_value, logic_not_delete_value) = match markers {
            Some(m) => (m.delete_value, m.not_delete_value),
            None => (None, None),
        };
        FieldDescriptor {
            related: differs_ignoring_case(&attribute.name, &column),
            property: attribute.name.clone(),
            property_type: attribute.ty.clone(),
            is_char_sequence: attribute.ty.is_char_sequence(),
            column,
            el,
            select,
            strategy,
            fill,
            condition,
            update,
            logic_delete_value,
            logic_not_delete_value,
            sql_select: OnceLock::new(),
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn property_type(&self) -> &FieldType {
        &self.property_type
    }

    pub fn is_char_sequence(&self) -> bool {
        self.is_char_sequence
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn el(&self) -> &str {
        &self.el
    }

    pub fn is_related(&self) -> bool {
        self.related
    }

    pub fn is_select(&self) -> bool {
        self.select
    }

    pub fn strategy(&self) -> FieldStrategy {
        self.strategy
    }

    pub fn fill(&self) -> FillPolicy {
        self.fill
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn update(&self) -> Option<&str> {
        self.update.as_deref()
    }

    pub fn logic_delete_value(&self) -> Option<&str> {
        self.logic_delete_value.as_deref()
    }

    pub fn logic_not_delete_value(&self) -> Option<&str> {
        self.logic_not_delete_value.as_deref()
    }

    pub fn is_logic_delete(&self) -> bool {
        non_empty(&self.logic_delete_value).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogicDeleteOverride;
    use crate::dialect::DbType;

    fn text(name: &str) -> Attribute {
        Attribute::new(name, FieldType::Text)
    }

    fn under_camel() -> TableContext {
        TableContext { under_camel: true }
    }

    #[test]
    fn plain_field_uses_naming_convention() {
        let f = FieldDescriptor::new(&GlobalConfig::default(), under_camel(), &text("userName"));
        assert_eq!(f.column(), "user_name");
        assert_eq!(f.el(), "userName");
        assert!(f.is_related());
        assert!(f.is_select());
        assert_eq!(f.strategy(), FieldStrategy::NotNull);
        assert_eq!(f.condition(), EQUAL);
        assert!(!f.is_logic_delete());
    }

    #[test]
    fn plain_field_without_convention_keeps_property() {
        let f = FieldDescriptor::new(&GlobalConfig::default(), TableContext::default(), &text("userName"));
        assert_eq!(f.column(), "userName");
        assert!(!f.is_related());
    }

    #[test]
    fn capital_mode_uppercases_column() {
        let config = GlobalConfig {
            capital_mode: true,
            ..GlobalConfig::default()
        };
        let f = FieldDescriptor::new(&config, under_camel(), &text("userName"));
        assert_eq!(f.column(), "USER_NAME");
        assert!(f.is_related());

        let f = FieldDescriptor::new(&config, TableContext::default(), &text("name"));
        assert_eq!(f.column(), "NAME");
        assert!(!f.is_related());
    }

    #[test]
    fn explicit_column_is_used_as_is() {
        let attr = text("userName").with_field(FieldOverride {
            value: Some("UName".into()),
            ..FieldOverride::default()
        });
        let f = FieldDescriptor::new(&GlobalConfig::default(), under_camel(), &attr);
        assert_eq!(f.column(), "UName");
        assert!(f.is_related());
    }

    #[test]
    fn override_without_column_follows_convention() {
        let attr = text("userName").with_field(FieldOverride::default());
        let f = FieldDescriptor::new(&GlobalConfig::default(), under_camel(), &attr);
        assert_eq!(f.column(), "user_name");
        let f = FieldDescriptor::new(&GlobalConfig::default(), TableContext::default(), &attr);
        assert_eq!(f.column(), "userName");
    }

    #[test]
    fn override_settings_are_taken() {
        let attr = Attribute::new("version", FieldType::Integer).with_field(FieldOverride {
            select: false,
            fill: FillPolicy::OnUpdate,
            strategy: Some(FieldStrategy::Ignored),
            condition: Some("%s>=#{%s}".into()),
            update: Some("%s+1".into()),
            el: Some("version,jdbcType=BIGINT".into()),
            ..FieldOverride::default()
        });
        let f = FieldDescriptor::new(&GlobalConfig::default(), under_camel(), &attr);
        assert!(!f.is_select());
        assert_eq!(f.fill(), FillPolicy::OnUpdate);
        assert_eq!(f.strategy(), FieldStrategy::Ignored);
        assert_eq!(f.condition(), "%s>=#{%s}");
        assert_eq!(f.update(), Some("%s+1"));
        assert_eq!(f.el(), "version,jdbcType=BIGINT");
    }

    #[test]
    fn el_carries_jdbc_type_and_handler() {
        let attr = text("profile").with_field(FieldOverride {
            jdbc_type: Some("VARCHAR".into()),
            type_handler: Some("JsonHandler".into()),
            ..FieldOverride::default()
        });
        let f = FieldDescriptor::new(&GlobalConfig::default(), under_camel(), &attr);
        assert_eq!(f.el(), "profile,jdbcType=VARCHAR,typeHandler=JsonHandler");
    }

    #[test]
    fn column_like_promotes_text_fields_only() {
        let config = GlobalConfig {
            column_like: true,
            db_type: DbType::Postgres,
            ..GlobalConfig::default()
        };
        let name = FieldDescriptor::new(&config, under_camel(), &text("name"));
        assert_eq!(name.condition(), DbType::Postgres.like_template());
        let age = FieldDescriptor::new(&config, under_camel(), &Attribute::new("age", FieldType::Integer));
        assert_eq!(age.condition(), EQUAL);

        let explicit = text("code").with_field(FieldOverride {
            condition: Some(EQUAL.into()),
            ..FieldOverride::default()
        });
        let code = FieldDescriptor::new(&config, under_camel(), &explicit);
        assert_eq!(code.condition(), EQUAL);
    }

    #[test]
    fn logical_delete_with_global_defaults() {
        let config = GlobalConfig {
            logic_delete_value: Some("1".into()),
            logic_not_delete_value: Some("0".into()),
            ..GlobalConfig::default()
        };
        let attr = Attribute::new("deleted", FieldType::Integer).with_logic(LogicDeleteOverride::default());
        let f = FieldDescriptor::new(&config, under_camel(), &attr);
        assert!(f.is_logic_delete());
        assert_eq!(f.logic_delete_value(), Some("1"));
        assert_eq!(f.logic_not_delete_value(), Some("0"));
    }

    #[test]
    fn logical_delete_needs_global_marker() {
        let attr = Attribute::new("deleted", FieldType::Integer).with_logic(LogicDeleteOverride {
            value: Some("0".into()),
            delval: Some("1".into()),
        });
        let f = FieldDescriptor::new(&GlobalConfig::default(), under_camel(), &attr);
        assert!(!f.is_logic_delete());
        assert_eq!(f.logic_delete_value(), None);
        assert_eq!(f.logic_not_delete_value(), None);
    }
}
