use crate::stmt::Value;

/// A SQL statement to execute, with its parameters passed out of band.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Statement text, using the dialect's positional placeholders
    pub sql: String,

    /// Values bound to the placeholders, in order
    pub params: Vec<Value>,

    /// What the caller expects back
    pub ret: Returning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Returning {
    /// Result rows (`SELECT`)
    Rows,

    /// Number of affected rows
    Count,

    /// The identity value the backend assigned to the inserted row
    LastInsertId,
}

impl Operation {
    pub fn new(sql: impl Into<String>, params: Vec<Value>, ret: Returning) -> Operation {
        Operation {
            sql: sql.into(),
            params,
            ret,
        }
    }
}
