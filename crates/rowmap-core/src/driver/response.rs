use crate::{
    err,
    stmt::{Row, Value},
    Result,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Rows returned by a query
    Rows(Vec<Row>),

    /// Number of rows affected by a mutation
    Count(u64),

    /// Identity assigned to an inserted row
    LastInsertId(Value),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self::Count(count)
    }

    pub fn rows(rows: Vec<Row>) -> Self {
        Self::Rows(rows)
    }

    pub fn last_insert_id(id: impl Into<Value>) -> Self {
        Self::LastInsertId(id.into())
    }

    pub fn into_rows(self) -> Result<Vec<Row>> {
        match self {
            Self::Rows(rows) => Ok(rows),
            other => Err(err!("invalid result: expected rows, got {other:?}")),
        }
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Self::Count(count) => Ok(count),
            other => Err(err!("invalid result: expected a row count, got {other:?}")),
        }
    }

    pub fn into_last_insert_id(self) -> Result<Value> {
        match self {
            Self::LastInsertId(id) => Ok(id),
            other => Err(err!("invalid result: expected an insert id, got {other:?}")),
        }
    }
}
