mod field_value;
pub use field_value::FieldValue;

use crate::{Db, Related, Result};

use async_recursion::async_recursion;
use indexmap::IndexMap;
use rowmap_core::{
    err,
    schema::Field,
    stmt::{FromValue, Row, Value},
    Error, Schema,
};
use rowmap_sql::stmt::{Delete, Filter, Insert, Select, Update};
use std::{fmt, sync::Arc};
use tracing::{debug, warn};

/// A row of one schema, held in memory.
///
/// An entity is *transient* while its primary key is null and *persisted*
/// once it has been inserted or loaded. Every field of the schema always has
/// a slot; foreign keys hold a [`Related`].
#[derive(Clone)]
pub struct Entity {
    schema: Arc<Schema>,
    values: IndexMap<String, FieldValue>,
}

impl Entity {
    /// Builds a transient entity. Fields that are not assigned take their
    /// default.
    pub fn new<K: AsRef<str>>(
        schema: &Arc<Schema>,
        assignments: impl IntoIterator<Item = (K, FieldValue)>,
    ) -> Result<Entity> {
        let mut values = IndexMap::with_capacity(schema.fields.len());

        for field in schema.fields() {
            let value = normalize(schema, field, FieldValue::Value(field.default_value()))?;
            values.insert(field.name.clone(), value);
        }

        let mut entity = Entity {
            schema: schema.clone(),
            values,
        };

        for (name, value) in assignments {
            entity.set(name.as_ref(), value)?;
        }

        Ok(entity)
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Assigns one field, in memory only.
    ///
    /// Scalars are coerced to the column type. A foreign key accepts either
    /// an entity of the referenced schema or its key.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        let field = self.schema.expect_field(name)?;
        let value = normalize(&self.schema, field, value.into())?;
        self.values.insert(field.name.clone(), value);
        Ok(())
    }

    /// The column value of a field. Foreign keys reduce to the referenced key.
    pub fn value(&self, name: &str) -> Result<Value> {
        self.schema.expect_field(name)?;
        Ok(self.column_value(name))
    }

    /// The value of a field, converted to `T`.
    pub fn get<T: FromValue>(&self, name: &str) -> Result<T> {
        T::from_value(self.value(name)?).map_err(|err| {
            err.context(err!(
                "reading `{}.{name}`",
                self.schema.table_name
            ))
        })
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// The loaded entity behind a foreign key.
    pub fn related(&self, name: &str) -> Option<&Entity> {
        match self.values.get(name)? {
            FieldValue::Related(related) => related.get(),
            FieldValue::Value(_) => None,
        }
    }

    /// Loads the entity behind a foreign key, if it is not loaded yet.
    pub async fn resolve(&mut self, db: &Db, name: &str) -> Result<Option<&Entity>> {
        let field = self.schema.expect_field(name)?;
        let Some(reference) = &field.reference else {
            return Err(not_a_foreign_key(&self.schema, field));
        };
        let target = reference.schema.clone();

        match self.values.get_mut(name) {
            Some(FieldValue::Related(related)) => related.resolve(db, &target).await,
            _ => Ok(None),
        }
    }

    /// The primary key value; null while transient.
    pub fn id(&self) -> Value {
        self.column_value(&self.schema.primary_key().name)
    }

    pub fn is_persisted(&self) -> bool {
        !self.id().is_null()
    }

    /// Writes the entity: an `INSERT` while transient, an `UPDATE` of every
    /// non-key field once persisted.
    ///
    /// Unique fields are checked with a lookup before writing. The check and
    /// the write are separate statements, so a concurrent writer can still
    /// slip a duplicate in between; the table's `UNIQUE` constraint is the
    /// final word.
    pub async fn save(&mut self, db: &Db) -> Result<()> {
        if !self.is_persisted() {
            return self.insert(db).await;
        }

        let schema = self.schema.clone();
        let pk = &schema.primary_key().name;
        let fields = schema
            .fields()
            .filter(|field| !field.primary_key)
            .collect::<Vec<_>>();

        self.apply_defaults(&fields)?;
        self.check_unique(db, &fields).await?;

        let mut update = Update::new(&schema.table_name, Filter::eq(pk, self.id()));
        for field in &fields {
            update.set(&field.name, self.column_value(&field.name));
        }

        if update.assignments.is_empty() {
            return Ok(());
        }

        db.execute(update).await?;
        Ok(())
    }

    /// Inserts the entity as a new row, even when its primary key has been
    /// assigned. A null primary key is left to the backend, and the identity
    /// it assigns is written back.
    pub async fn insert(&mut self, db: &Db) -> Result<()> {
        let schema = self.schema.clone();
        let fields = schema.fields().collect::<Vec<_>>();

        self.apply_defaults(&fields)?;
        self.check_unique(db, &fields).await?;

        let pk = schema.primary_key();
        let mut insert = Insert::new(&schema.table_name);

        for field in &fields {
            let value = self.column_value(&field.name);
            if field.primary_key && value.is_null() {
                continue;
            }
            insert.push(&field.name, value);
        }

        let id = db.insert(insert).await?;

        if !self.is_persisted() {
            let id = id.coerce(&pk.ty)?;
            debug!(table = %schema.table_name, id = ?id, "inserted");
            self.values.insert(pk.name.clone(), FieldValue::Value(id));
        }

        Ok(())
    }

    /// Assigns fields and writes only those columns.
    ///
    /// The entity must be persisted. The primary key cannot be reassigned.
    /// When any assignment, check or the write itself fails, the entity is
    /// left as it was.
    pub async fn update<K: AsRef<str>>(
        &mut self,
        db: &Db,
        assignments: impl IntoIterator<Item = (K, FieldValue)>,
    ) -> Result<()> {
        if !self.is_persisted() {
            return Err(Error::state(format!(
                "cannot update a `{}` that has not been saved",
                self.schema.table_name
            )));
        }

        let schema = self.schema.clone();
        let mut next = self.clone();
        let mut fields: Vec<&Field> = vec![];

        for (name, value) in assignments {
            let field = schema.expect_field(name.as_ref())?;
            if field.primary_key {
                return Err(Error::state(format!(
                    "cannot reassign the primary key of a persisted `{}`",
                    schema.table_name
                )));
            }

            next.set(&field.name, value)?;
            if !fields.iter().any(|f| f.name == field.name) {
                fields.push(field);
            }
        }

        if fields.is_empty() {
            return Ok(());
        }

        next.apply_defaults(&fields)?;
        next.check_unique(db, &fields).await?;

        let pk = &schema.primary_key().name;
        let mut update = Update::new(&schema.table_name, Filter::eq(pk, next.id()));
        for field in &fields {
            update.set(&field.name, next.column_value(&field.name));
        }

        db.execute(update).await?;
        *self = next;
        Ok(())
    }

    /// Deletes the row. The entity becomes transient again.
    pub async fn delete(&mut self, db: &Db) -> Result<()> {
        if !self.is_persisted() {
            return Err(Error::state(format!(
                "cannot delete a `{}` that has not been saved",
                self.schema.table_name
            )));
        }

        let pk = &self.schema.primary_key().name;
        let delete = Delete::new(&self.schema.table_name, Filter::eq(pk, self.id()));
        db.execute(delete).await?;

        self.values
            .insert(pk.clone(), FieldValue::Value(Value::Null));
        Ok(())
    }

    /// Maps a result row onto `schema`.
    ///
    /// Values are coerced to their column types. Every non-null foreign key
    /// is loaded with a follow-up query; a key that matches no row is left
    /// unset.
    #[async_recursion]
    pub async fn from_row(db: &Db, schema: &Arc<Schema>, mut row: Row) -> Result<Entity> {
        let mut values = IndexMap::with_capacity(schema.fields.len());

        for field in schema.fields() {
            let value = row
                .shift_remove(&field.name)
                .unwrap_or_default()
                .coerce(&field.ty)?;

            let value = match &field.reference {
                Some(reference) => {
                    FieldValue::Related(Related::load(db, &reference.schema, value).await?)
                }
                None => FieldValue::Value(value),
            };

            values.insert(field.name.clone(), value);
        }

        Ok(Entity {
            schema: schema.clone(),
            values,
        })
    }

    fn column_value(&self, name: &str) -> Value {
        self.values
            .get(name)
            .map(FieldValue::to_value)
            .unwrap_or_default()
    }

    /// A null in a `NOT NULL` field takes the field's default, or fails.
    fn apply_defaults(&mut self, fields: &[&Field]) -> Result<()> {
        for field in fields {
            if field.primary_key || field.nullable || !self.column_value(&field.name).is_null() {
                continue;
            }

            let Some(default) = &field.default else {
                warn!(table = %self.schema.table_name, field = %field.name, "null in NOT NULL field");
                return Err(Error::null_constraint(&self.schema.table_name, &field.name));
            };

            let value = normalize(&self.schema, field, FieldValue::Value(default.clone()))?;
            self.values.insert(field.name.clone(), value);
        }

        Ok(())
    }

    /// Fails if another row already holds the value of one of the unique
    /// `fields`.
    async fn check_unique(&self, db: &Db, fields: &[&Field]) -> Result<()> {
        let pk = self.schema.primary_key();
        let id = self.id();

        let checked = self
            .schema
            .unique_fields()
            .filter(|field| fields.iter().any(|f| f.name == field.name));

        for field in checked {
            let value = self.column_value(&field.name);
            if value.is_null() {
                continue;
            }

            let select = Select::new(&self.schema.table_name)
                .filter(Filter::eq(&field.name, value.clone()));

            for mut row in db.select(select).await? {
                let other = row
                    .shift_remove(&pk.name)
                    .unwrap_or_default()
                    .coerce(&pk.ty)?;

                if id.is_null() || other != id {
                    warn!(
                        table = %self.schema.table_name,
                        field = %field.name,
                        value = ?value,
                        "unique constraint violated"
                    );
                    return Err(Error::unique_constraint(
                        &self.schema.table_name,
                        &field.name,
                        value,
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Shapes an assigned value for the slot of `field`.
fn normalize(schema: &Schema, field: &Field, value: FieldValue) -> Result<FieldValue> {
    let Some(reference) = &field.reference else {
        return match value {
            FieldValue::Value(value) => Ok(FieldValue::Value(coerce(schema, field, value)?)),
            FieldValue::Related(_) => Err(not_a_foreign_key(schema, field)),
        };
    };

    let related = match value {
        FieldValue::Value(value) if value.is_null() => Related::Unset,
        FieldValue::Value(value) => Related::Unresolved(coerce(schema, field, value)?),
        FieldValue::Related(Related::Resolved(entity)) => {
            if !entity.schema.is(&reference.schema) {
                return Err(err!(
                    "field `{}.{}` references `{}`, not `{}`",
                    schema.table_name,
                    field.name,
                    reference.schema.table_name,
                    entity.schema.table_name
                ));
            }
            Related::Resolved(entity)
        }
        FieldValue::Related(related) => related,
    };

    Ok(FieldValue::Related(related))
}

fn coerce(schema: &Schema, field: &Field, value: Value) -> Result<Value> {
    value
        .coerce(&field.ty)
        .map_err(|err| err.context(err!("assigning `{}.{}`", schema.table_name, field.name)))
}

fn not_a_foreign_key(schema: &Schema, field: &Field) -> Error {
    err!(
        "field `{}.{}` is not a foreign key",
        schema.table_name,
        field.name
    )
}

impl fmt::Debug for Entity {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = fmt.debug_struct(&self.schema.name);
        for (name, value) in &self.values {
            match value {
                FieldValue::Value(value) => s.field(name, value),
                FieldValue::Related(related) => s.field(name, related),
            };
        }
        s.finish()
    }
}
