use super::Error;

/// Error when a model definition is invalid.
///
/// This occurs when:
/// - more than one field is marked as the primary key
/// - two fields share a name
/// - a foreign key targets a schema whose primary key is not an integer
///
/// Schema errors are raised while the schema is being built and are never
/// recovered from: the model does not exist.
#[derive(Debug)]
pub(super) struct SchemaError {
    message: Box<str>,
}

impl std::error::Error for SchemaError {}

impl core::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "schema error: {}", self.message)
    }
}

impl Error {
    /// Creates a schema error.
    pub fn schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Schema(SchemaError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a schema error.
    pub fn is_schema(&self) -> bool {
        self.is_kind(|kind| matches!(kind, super::ErrorKind::Schema(_)))
    }
}
