//! SELECT / INSERT / UPDATE SET / WHERE fragments of a single field.
//!
//! INSERT and UPDATE fragments are guarded by the field strategy unless the fill
//! policy covers the statement. WHERE fragments only ever check for null.

use crate::dialect::IdentifierQuoter;
use crate::field::{FieldDescriptor, FieldStrategy, LogicState};
use crate::sql::{format_template, SqlFragment};

fn placeholder(key: &str) -> String {
    format!("#{{{}}}", key)
}

impl FieldDescriptor {
    /// Projection item: `column AS property` when the names differ, else `column`.
    /// Computed once; the first quoter used decides the quoting.
    pub fn select_fragment(&self, quoter: &dyn IdentifierQuoter) -> &str {
        self.sql_select.get_or_init(|| {
            let column = quoter.quote(&self.column, true);
            if self.related {
                format!("{} AS {}", column, quoter.quote(&self.property, false))
            } else {
                column
            }
        })
    }

    /// Column-list item of `INSERT INTO t (...)`.
    pub fn insert_column_fragment(&self) -> SqlFragment {
        let body = format!("{},", self.column);
        if self.fill.fills_insert() {
            return SqlFragment::always(body);
        }
        self.guard_by_strategy(body, &self.property)
    }

    /// Value-list item of `VALUES (...)`; guarded exactly like the column item.
    pub fn insert_value_fragment(&self) -> SqlFragment {
        let body = format!("{},", placeholder(&self.el));
        if self.fill.fills_insert() {
            return SqlFragment::always(body);
        }
        self.guard_by_strategy(body, &self.property)
    }

    /// `column=expr,` item of an UPDATE SET list. `prefix` names the parameter object, e.g. `et.`.
    pub fn update_set_fragment(&self, prefix: Option<&str>) -> SqlFragment {
        let prefix = prefix.unwrap_or_default();
        let expr = match &self.update {
            Some(update) => format_template(update, &[self.column.as_str()]),
            None => placeholder(&format!("{}{}", prefix, self.el)),
        };
        let body = format!("{}={},", self.column, expr);
        if self.fill.fills_update() {
            return SqlFragment::always(body);
        }
        self.guard_by_strategy(body, &format!("{}{}", prefix, self.property))
    }

    /// ` AND <condition>` item of a WHERE clause, included whenever the parameter is not null.
    pub fn where_fragment(&self, prefix: Option<&str>) -> SqlFragment {
        let prefix = prefix.unwrap_or_default();
        let key = format!("{}{}", prefix, self.el);
        let condition = format_template(&self.condition, &[self.column.as_str(), key.as_str()]);
        let body = format!(" AND {}", condition);
        SqlFragment::guarded(format!("{}{} != null", prefix, self.property), body)
    }

    /// Comparison against one logical-delete marker, e.g. `deleted=0` or `status='Y'`.
    /// A marker spelled `null` compares with `IS NULL`. `None` for non-logical fields.
    pub fn logic_delete_condition(&self, state: LogicState) -> Option<String> {
        if !self.is_logic_delete() {
            return None;
        }
        let value = match state {
            LogicState::Deleted => self.logic_delete_value.as_deref(),
            LogicState::NotDeleted => self.logic_not_delete_value.as_deref(),
        };
        Some(match value {
            None => format!("{} IS NULL", self.column),
            Some(v) if v.eq_ignore_ascii_case("null") => format!("{} IS NULL", self.column),
            Some(v) if self.is_char_sequence => format!("{}='{}'", self.column, v.replace('\'', "''")),
            Some(v) => format!("{}={}", self.column, v),
        })
    }

    fn guard_by_strategy(&self, body: String, property: &str) -> SqlFragment {
        match self.strategy {
            FieldStrategy::Ignored => SqlFragment::always(body),
            FieldStrategy::NotEmpty if self.is_char_sequence => SqlFragment::guarded(
                format!("{} != null and {} != ''", property, property),
                body,
            ),
            _ => SqlFragment::guarded(format!("{} != null", property), body),
        }
    }
}
