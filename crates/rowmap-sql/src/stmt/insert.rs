use super::Value;

/// Inserts one row.
#[derive(Debug, Clone)]
pub struct Insert {
    pub table: String,

    /// Columns being set. May be empty, in which case every column takes its
    /// default.
    pub columns: Vec<String>,

    /// One value per column
    pub values: Vec<Value>,
}

impl Insert {
    pub fn new(table: impl Into<String>) -> Insert {
        Insert {
            table: table.into(),
            columns: vec![],
            values: vec![],
        }
    }

    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        self.columns.push(column.into());
        self.values.push(value);
    }
}
