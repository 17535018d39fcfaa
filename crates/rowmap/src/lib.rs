pub mod db;
pub use db::{Connect, Db};

mod entity;
pub use entity::{Entity, FieldValue};

mod query;
pub use query::{eq, Clause, Query};

mod relation;
pub use relation::Related;

pub use rowmap_core::{
    bail, driver, err,
    schema::{self, ColumnType, Field, Schema},
    stmt::{DateTime, FromValue, Row, Value},
    Error, Result,
};
pub use rowmap_sql::stmt::{Direction, OrderBy};
