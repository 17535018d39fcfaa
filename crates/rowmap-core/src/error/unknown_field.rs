use super::Error;

/// Error when a field name does not exist on a schema.
#[derive(Debug)]
pub(super) struct UnknownFieldError {
    table: Box<str>,
    field: Box<str>,
}

impl std::error::Error for UnknownFieldError {}

impl core::fmt::Display for UnknownFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no field `{}` on `{}`", self.field, self.table)
    }
}

impl Error {
    pub fn unknown_field(table: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownField(UnknownFieldError {
            table: table.into().into(),
            field: field.into().into(),
        }))
    }

    pub fn is_unknown_field(&self) -> bool {
        self.is_kind(|kind| matches!(kind, super::ErrorKind::UnknownField(_)))
    }
}
