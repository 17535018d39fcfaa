use super::Statement;

use rowmap_core::schema::{Field, Schema};

/// `CREATE TABLE IF NOT EXISTS` for every field of a schema.
#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub table: String,

    /// Column definitions, in order
    pub columns: Vec<Field>,
}

impl Statement {
    pub fn create_table(schema: &Schema) -> Statement {
        CreateTable {
            table: schema.table_name.clone(),
            columns: schema.fields().cloned().collect(),
        }
        .into()
    }
}
