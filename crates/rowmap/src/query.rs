use crate::{Db, Entity, FieldValue, Related, Result};

use rowmap_core::{err, Error, Schema};
use rowmap_sql::stmt::{Filter, OrderBy, Select};

use std::sync::Arc;

/// `field = value`, one condition of a query.
#[derive(Debug, Clone)]
pub struct Clause {
    field: String,
    value: FieldValue,
}

/// Builds a `field = value` clause. An entity given for a foreign key
/// matches on its primary key.
pub fn eq(field: impl Into<String>, value: impl Into<FieldValue>) -> Clause {
    Clause {
        field: field.into(),
        value: value.into(),
    }
}

/// Filter, ordering and limit over the rows of one schema.
///
/// Each call accumulates into the query and runs it: a second `filter` on
/// the same query is combined with the first by `AND`. Start a fresh query
/// with [`Db::objects`] to drop earlier conditions.
#[derive(Debug, Clone)]
pub struct Query {
    db: Db,
    schema: Arc<Schema>,
    filter: Filter,
    order_by: Option<OrderBy>,
    limit: Option<u64>,
}

impl Query {
    pub fn new(db: &Db, schema: &Arc<Schema>) -> Query {
        Query {
            db: db.clone(),
            schema: schema.clone(),
            filter: Filter::new(),
            order_by: None,
            limit: None,
        }
    }

    /// Adds the clauses, then returns every matching entity.
    pub async fn filter(&mut self, clauses: impl IntoIterator<Item = Clause>) -> Result<Vec<Entity>> {
        self.push(clauses)?;
        self.all().await
    }

    /// Adds the clauses, then returns the first matching entity.
    pub async fn get(&mut self, clauses: impl IntoIterator<Item = Clause>) -> Result<Option<Entity>> {
        self.push(clauses)?;
        Ok(self.all().await?.into_iter().next())
    }

    /// Sets the ordering, then runs the query.
    pub async fn order_by(&mut self, order_by: impl Into<OrderBy>) -> Result<Vec<Entity>> {
        let order_by = order_by.into();
        self.schema.expect_field(&order_by.column)?;
        self.order_by = Some(order_by);
        self.all().await
    }

    /// Sets the maximum number of rows, then runs the query.
    pub async fn limit(&mut self, limit: u64) -> Result<Vec<Entity>> {
        self.limit = Some(limit);
        self.all().await
    }

    /// Runs the query with the conditions accumulated so far.
    pub async fn all(&self) -> Result<Vec<Entity>> {
        let rows = self.db.select(self.statement()).await?;

        let mut entities = Vec::with_capacity(rows.len());
        for row in rows {
            entities.push(Entity::from_row(&self.db, &self.schema, row).await?);
        }

        Ok(entities)
    }

    /// The `SELECT` the query currently compiles to.
    pub fn statement(&self) -> Select {
        Select::new(&self.schema.table_name)
            .filter(self.filter.clone())
            .order_by(self.order_by.clone())
            .limit(self.limit)
    }

    /// Validates every clause before adding any, so a failed call leaves the
    /// query unchanged.
    fn push(&mut self, clauses: impl IntoIterator<Item = Clause>) -> Result<()> {
        let mut resolved = vec![];

        for clause in clauses {
            let field = self.schema.expect_field(&clause.field)?;

            let value = match (&field.reference, &clause.value) {
                (None, FieldValue::Related(_)) => {
                    return Err(err!(
                        "field `{}.{}` is not a foreign key",
                        self.schema.table_name,
                        field.name
                    ));
                }
                (Some(_), FieldValue::Related(Related::Resolved(entity)))
                    if !entity.is_persisted() =>
                {
                    return Err(Error::state(format!(
                        "cannot filter `{}.{}` by a `{}` that has not been saved",
                        self.schema.table_name,
                        field.name,
                        entity.schema().name
                    )));
                }
                _ => clause.value.to_value().coerce(&field.ty)?,
            };

            resolved.push((field.name.clone(), value));
        }

        for (column, value) in resolved {
            self.filter.push(column, value);
        }

        Ok(())
    }
}
