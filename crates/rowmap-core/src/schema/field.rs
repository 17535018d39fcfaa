use super::{ColumnType, Reference, Schema};
use crate::stmt::Value;

use std::sync::Arc;

/// Metadata describing one column: its type and constraints.
///
/// Fields are created unnamed and receive their name when registered on a
/// schema [`Builder`](super::Builder).
#[derive(Debug, Clone)]
pub struct Field {
    /// The column name. Empty until the field is registered.
    pub name: String,

    pub ty: ColumnType,

    /// True if the field is the table's primary key
    pub primary_key: bool,

    /// True if the column accepts `NULL`
    pub nullable: bool,

    /// Value used when none is provided
    pub default: Option<Value>,

    /// True if no two rows may share a non-null value
    pub unique: bool,

    /// Set for foreign key fields
    pub reference: Option<Reference>,
}

impl Field {
    pub fn new(ty: ColumnType) -> Field {
        Field {
            name: String::new(),
            ty,
            primary_key: false,
            nullable: true,
            default: None,
            unique: false,
            reference: None,
        }
    }

    pub fn integer() -> Field {
        Field::new(ColumnType::Integer)
    }

    /// A `VARCHAR` column with the given maximum length.
    pub fn string(max_length: u32) -> Field {
        Field::new(ColumnType::Varchar(max_length))
    }

    /// A `VARCHAR(255)` column.
    pub fn varchar() -> Field {
        Field::string(255)
    }

    pub fn float() -> Field {
        Field::new(ColumnType::Float)
    }

    pub fn boolean() -> Field {
        Field::new(ColumnType::Boolean)
    }

    pub fn datetime() -> Field {
        Field::new(ColumnType::DateTime)
    }

    /// An integer column holding the primary key of a row in `target`.
    ///
    /// Foreign keys are not nullable unless stated otherwise.
    pub fn foreign_key(target: &Arc<Schema>) -> Field {
        Field {
            nullable: false,
            reference: Some(Reference {
                schema: target.clone(),
                primary_key: target.primary_key().name.clone(),
            }),
            ..Field::new(ColumnType::Integer)
        }
    }

    pub fn primary_key(mut self) -> Field {
        self.primary_key = true;
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Field {
        self.nullable = nullable;
        self
    }

    pub fn not_null(self) -> Field {
        self.nullable(false)
    }

    /// Sets the default value. A null default is the same as no default.
    pub fn default(mut self, value: impl Into<Value>) -> Field {
        let value = value.into();
        self.default = (!value.is_null()).then_some(value);
        self
    }

    pub fn unique(mut self) -> Field {
        self.unique = true;
        self
    }

    pub fn is_foreign_key(&self) -> bool {
        self.reference.is_some()
    }

    /// The default value, or null when the field has none.
    pub fn default_value(&self) -> Value {
        self.default.clone().unwrap_or_default()
    }
}
