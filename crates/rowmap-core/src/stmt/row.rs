use super::Value;

use indexmap::IndexMap;

/// A raw result row: column name to value, in the order the backend
/// returned the columns.
pub type Row = IndexMap<String, Value>;
