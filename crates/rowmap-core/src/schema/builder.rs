use super::{Field, Schema};
use crate::{stmt::Value, Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Name of the primary key synthesized for models that do not declare one.
const IMPLICIT_PRIMARY_KEY: &str = "id";

/// Collects the field declarations of one model and produces its [`Schema`].
#[derive(Debug, Clone)]
pub struct Builder {
    name: String,
    fields: Vec<(String, Field)>,
}

impl Builder {
    pub fn new(name: impl Into<String>) -> Builder {
        Builder {
            name: name.into(),
            fields: vec![],
        }
    }

    /// Declares a field. Field order is the column order of the table.
    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.push((name.into(), field));
        self
    }

    /// Validates the declarations and registers the schema.
    ///
    /// Fails with a schema error, and registers nothing, when more than one
    /// field is a primary key, when two fields share a name, when a default
    /// does not fit its column type or is a non-finite float, or when a
    /// foreign key targets a schema without an integer primary key.
    pub fn build(self) -> Result<Arc<Schema>> {
        let table_name = self.name.to_lowercase();
        let mut fields = IndexMap::with_capacity(self.fields.len() + 1);

        for (name, mut field) in self.fields {
            field.name = name.clone();

            if let Some(default) = field.default.take() {
                let default = default.coerce(&field.ty).map_err(|err| {
                    err.context(Error::schema(format!(
                        "invalid default for `{table_name}.{name}`"
                    )))
                })?;
                if let Value::F64(v) = default {
                    if !v.is_finite() {
                        return Err(Error::schema(format!(
                            "invalid default for `{table_name}.{name}`: {v} is not a finite number"
                        )));
                    }
                }
                field.default = Some(default);
            }

            if let Some(reference) = &field.reference {
                let target = reference.schema.primary_key();
                if !target.ty.is_integer() {
                    return Err(Error::schema(format!(
                        "foreign key `{table_name}.{name}` targets `{}.{}` of type {}; \
                         foreign keys must reference an INTEGER primary key",
                        reference.schema.table_name, target.name, target.ty
                    )));
                }
            }

            if fields.insert(name.clone(), field).is_some() {
                return Err(Error::schema(format!(
                    "field `{name}` is declared more than once on `{table_name}`"
                )));
            }
        }

        let primary_keys: Vec<String> = fields
            .values()
            .filter(|field| field.primary_key)
            .map(|field| field.name.clone())
            .collect();

        let primary_key = match &primary_keys[..] {
            [] => {
                if fields.contains_key(IMPLICIT_PRIMARY_KEY) {
                    return Err(Error::schema(format!(
                        "field `{IMPLICIT_PRIMARY_KEY}` on `{table_name}` is not a primary key \
                         but clashes with the implicit one"
                    )));
                }

                let mut id = Field::integer().primary_key();
                id.name = IMPLICIT_PRIMARY_KEY.to_string();
                fields.shift_insert(0, IMPLICIT_PRIMARY_KEY.to_string(), id);
                IMPLICIT_PRIMARY_KEY.to_string()
            }
            [name] => name.clone(),
            names => {
                return Err(Error::schema(format!(
                    "multiple primary keys defined on `{table_name}`: {}",
                    names.join(", ")
                )));
            }
        };

        Ok(Arc::new(Schema {
            name: self.name,
            table_name,
            fields,
            primary_key,
        }))
    }
}
