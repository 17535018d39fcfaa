use super::Error;
use crate::stmt::Value;

/// Error when a unique field already holds the value on another row.
///
/// Raised by the pre-write check. The check and the write are separate round
/// trips, so a concurrent writer can still slip a duplicate in between.
#[derive(Debug)]
pub(super) struct UniqueConstraintError {
    table: Box<str>,
    field: Box<str>,
    value: Value,
}

impl std::error::Error for UniqueConstraintError {}

impl core::fmt::Display for UniqueConstraintError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unique constraint violated: `{}.{}` already holds {:?}",
            self.table, self.field, self.value
        )
    }
}

impl Error {
    /// Creates a unique constraint error naming the field and the duplicate value.
    pub fn unique_constraint(
        table: impl Into<String>,
        field: impl Into<String>,
        value: Value,
    ) -> Error {
        Error::from(super::ErrorKind::UniqueConstraint(UniqueConstraintError {
            table: table.into().into(),
            field: field.into().into(),
            value,
        }))
    }

    /// Returns `true` if this error is a unique constraint error.
    pub fn is_unique_constraint(&self) -> bool {
        self.is_kind(|kind| matches!(kind, super::ErrorKind::UniqueConstraint(_)))
    }
}
