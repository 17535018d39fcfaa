mod row;
pub use row::Row;

mod value;
pub use value::{FromValue, Value};

/// Date and time without a time zone, as held by `DATETIME` columns.
pub use jiff::civil::DateTime;
