use super::Value;

/// A conjunction of column equalities. Empty means every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub clauses: Vec<Clause>,
}

/// `column = value`, or `column IS NULL` when the value is null.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub column: String,
    pub value: Value,
}

impl Filter {
    pub fn new() -> Filter {
        Filter::default()
    }

    /// A filter matching one column value.
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Filter {
        let mut filter = Filter::new();
        filter.push(column, value);
        filter
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.clauses.push(Clause {
            column: column.into(),
            value: value.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
