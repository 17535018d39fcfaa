use super::Filter;

#[derive(Debug, Clone)]
pub struct Delete {
    pub table: String,
    pub filter: Filter,
}

impl Delete {
    pub fn new(table: impl Into<String>, filter: Filter) -> Delete {
        Delete {
            table: table.into(),
            filter,
        }
    }
}
