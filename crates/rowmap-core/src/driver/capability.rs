/// What the application needs to know about a backend.
#[derive(Debug)]
pub struct Capability {
    /// SQL dialect accepted by the backend
    pub dialect: Dialect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Mysql,
    Sqlite,
}

impl Capability {
    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        dialect: Dialect::Mysql,
    };

    /// SQLite capabilities
    pub const SQLITE: Self = Self {
        dialect: Dialect::Sqlite,
    };
}
