use crate::{Db, Entity, Result};

use rowmap_core::{stmt::Value, Schema};
use rowmap_sql::stmt::{Filter, Select};

use std::{fmt, sync::Arc};

/// The state of a foreign-key field.
#[derive(Clone, Default)]
pub enum Related {
    /// No row is referenced
    #[default]
    Unset,

    /// The key of the referenced row, not loaded yet
    Unresolved(Value),

    /// The referenced row
    Resolved(Box<Entity>),
}

impl Related {
    /// The referenced entity, if it has been loaded.
    pub fn get(&self) -> Option<&Entity> {
        match self {
            Related::Resolved(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Related::Unset)
    }

    /// The value stored in the foreign-key column.
    pub fn key(&self) -> Value {
        match self {
            Related::Unset => Value::Null,
            Related::Unresolved(key) => key.clone(),
            Related::Resolved(entity) => entity.id(),
        }
    }

    /// Loads an unresolved key from `target`, the schema the field references.
    ///
    /// A key that matches no row leaves the field unset.
    pub async fn resolve(&mut self, db: &Db, target: &Arc<Schema>) -> Result<Option<&Entity>> {
        if let Related::Unresolved(key) = self {
            let key = key.clone();
            *self = Related::load(db, target, key).await?;
        }

        Ok(self.get())
    }

    /// Looks up the row of `target` whose primary key is `key`.
    pub(crate) async fn load(db: &Db, target: &Arc<Schema>, key: Value) -> Result<Related> {
        if key.is_null() {
            return Ok(Related::Unset);
        }

        let select = Select::new(&target.table_name)
            .filter(Filter::eq(&target.primary_key().name, key));

        match db.select(select).await?.into_iter().next() {
            Some(row) => Ok(Related::Resolved(Box::new(
                Entity::from_row(db, target, row).await?,
            ))),
            None => Ok(Related::Unset),
        }
    }
}

impl From<Entity> for Related {
    fn from(entity: Entity) -> Self {
        Related::Resolved(Box::new(entity))
    }
}

impl fmt::Debug for Related {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Related::Unset => write!(fmt, "<unset>"),
            Related::Unresolved(key) => write!(fmt, "<not loaded: {key:?}>"),
            Related::Resolved(entity) => fmt::Debug::fmt(entity, fmt),
        }
    }
}
