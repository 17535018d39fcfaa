use super::{Filter, OrderBy};

/// `SELECT *` over one table.
#[derive(Debug, Clone)]
pub struct Select {
    pub table: String,
    pub filter: Filter,
    pub order_by: Option<OrderBy>,
    pub limit: Option<u64>,
}

impl Select {
    pub fn new(table: impl Into<String>) -> Select {
        Select {
            table: table.into(),
            filter: Filter::new(),
            order_by: None,
            limit: None,
        }
    }

    pub fn filter(mut self, filter: Filter) -> Select {
        self.filter = filter;
        self
    }

    pub fn order_by(mut self, order_by: Option<OrderBy>) -> Select {
        self.order_by = order_by;
        self
    }

    pub fn limit(mut self, limit: Option<u64>) -> Select {
        self.limit = limit;
        self
    }
}
