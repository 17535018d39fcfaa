use std::fmt;

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,

    /// Variable length string with a maximum length
    Varchar(u32),

    Float,

    Boolean,

    DateTime,
}

impl ColumnType {
    /// Bare SQL type name, without any length.
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Varchar(_) => "VARCHAR",
            ColumnType::Float => "FLOAT",
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::DateTime => "DATETIME",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, ColumnType::Integer)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Varchar(max_length) => write!(f, "VARCHAR({max_length})"),
            ty => f.write_str(ty.name()),
        }
    }
}
