use super::{Filter, Value};

/// Sets columns on the rows matching a filter.
#[derive(Debug, Clone)]
pub struct Update {
    pub table: String,

    /// `(column, value)` pairs. Must not be empty.
    pub assignments: Vec<(String, Value)>,

    pub filter: Filter,
}

impl Update {
    pub fn new(table: impl Into<String>, filter: Filter) -> Update {
        Update {
            table: table.into(),
            assignments: vec![],
            filter,
        }
    }

    pub fn set(&mut self, column: impl Into<String>, value: Value) {
        self.assignments.push((column.into(), value));
    }
}
