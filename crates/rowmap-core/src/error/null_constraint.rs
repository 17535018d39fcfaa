use super::Error;

/// Error when a non-nullable field resolves to null and has no default.
#[derive(Debug)]
pub(super) struct NullConstraintError {
    table: Box<str>,
    field: Box<str>,
}

impl std::error::Error for NullConstraintError {}

impl core::fmt::Display for NullConstraintError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}.{}` is NOT NULL and has no default",
            self.table, self.field
        )
    }
}

impl Error {
    /// Creates a null constraint error for `table.field`.
    pub fn null_constraint(table: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NullConstraint(NullConstraintError {
            table: table.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is a null constraint error.
    pub fn is_null_constraint(&self) -> bool {
        self.is_kind(|kind| matches!(kind, super::ErrorKind::NullConstraint(_)))
    }
}
