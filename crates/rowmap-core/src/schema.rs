mod builder;
pub use builder::Builder;

mod column_type;
pub use column_type::ColumnType;

mod field;
pub use field::Field;

mod reference;
pub use reference::Reference;

use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Registered metadata for one model: its table and its ordered fields.
///
/// A schema is produced once by [`Builder::build`] and is immutable from
/// then on. Exactly one field is the primary key.
#[derive(Debug)]
pub struct Schema {
    /// The model name as declared
    pub name: String,

    /// Name of the backing table: the model name, lower-cased
    pub table_name: String,

    /// Fields in declaration order, keyed by name
    pub fields: IndexMap<String, Field>,

    /// Key into `fields` of the primary key
    primary_key: String,
}

impl Schema {
    pub fn builder(name: impl Into<String>) -> Builder {
        Builder::new(name)
    }

    /// The primary key field.
    pub fn primary_key(&self) -> &Field {
        &self.fields[&self.primary_key]
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Looks up a field, failing with an unknown-field error.
    pub fn expect_field(&self, name: &str) -> Result<&Field> {
        self.field(name)
            .ok_or_else(|| Error::unknown_field(&self.table_name, name))
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.values()
    }

    /// Fields that reference another schema.
    pub fn references(&self) -> impl Iterator<Item = (&Field, &Reference)> + '_ {
        self.fields
            .values()
            .filter_map(|field| field.reference.as_ref().map(|r| (field, r)))
    }

    /// Fields carrying a `UNIQUE` constraint.
    pub fn unique_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.values().filter(|field| field.unique)
    }

    /// Two schemas are the same model when they are the same registration.
    pub fn is(self: &Arc<Self>, other: &Arc<Schema>) -> bool {
        Arc::ptr_eq(self, other)
    }
}
