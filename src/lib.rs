//! Architect field mapping: per-attribute column metadata and the conditional SQL
//! fragments a dynamic-statement templating engine assembles into SELECT, INSERT,
//! UPDATE and WHERE clauses.

pub mod case;
pub mod config;
pub mod dialect;
pub mod discovery;
pub mod error;
pub mod field;
pub mod sql;

pub use config::{
    load_global_config, load_table_config, Attribute, FieldOverride, GlobalConfig, LogicDeleteOverride,
    TableConfig, TableContext,
};
pub use dialect::{DbType, IdentifierQuoter};
pub use discovery::{discover, FieldSet};
pub use error::ConfigError;
pub use field::{FieldDescriptor, FieldStrategy, FieldType, FillPolicy, LogicState};
pub use sql::SqlFragment;
