use super::Error;

/// Error raised by the execution service.
///
/// Access-denied and missing-database failures get their own category. Every
/// other backend failure carries the backend's error code and message, or the
/// driver's own error when the backend did not report a code.
#[derive(Debug)]
pub(super) struct ExecutionError {
    kind: ExecutionErrorKind,
}

#[derive(Debug)]
enum ExecutionErrorKind {
    AccessDenied,
    UnknownDatabase,
    Backend { code: i64, message: Box<str> },
    Driver(Box<dyn std::error::Error + Send + Sync>),
    ConnectionClosed,
}

impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ExecutionErrorKind::Driver(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ExecutionErrorKind::AccessDenied => f.write_str("invalid credentials"),
            ExecutionErrorKind::UnknownDatabase => f.write_str("database does not exist"),
            ExecutionErrorKind::Backend { code, message } => {
                write!(f, "backend error [{code}]: {message}")
            }
            ExecutionErrorKind::Driver(inner) => {
                // Display the error and walk its source chain
                core::fmt::Display::fmt(inner, f)?;
                let mut source = inner.source();
                while let Some(err) = source {
                    write!(f, ": {}", err)?;
                    source = err.source();
                }
                Ok(())
            }
            ExecutionErrorKind::ConnectionClosed => f.write_str("connection closed"),
        }
    }
}

impl Error {
    /// The backend rejected the credentials.
    pub fn access_denied() -> Error {
        Error::execution(ExecutionErrorKind::AccessDenied)
    }

    /// The backend does not know the requested database.
    pub fn unknown_database() -> Error {
        Error::execution(ExecutionErrorKind::UnknownDatabase)
    }

    /// Any other backend failure, with the backend's own code and message.
    pub fn backend(code: i64, message: impl Into<String>) -> Error {
        Error::execution(ExecutionErrorKind::Backend {
            code,
            message: message.into().into(),
        })
    }

    /// Creates an error from a driver error that did not come with a backend code.
    ///
    /// This is the preferred way to convert driver-specific errors (rusqlite,
    /// mysql_async, io errors, etc.) into rowmap errors.
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::execution(ExecutionErrorKind::Driver(Box::new(err)))
    }

    /// The `Db` handle was closed.
    pub fn connection_closed() -> Error {
        Error::execution(ExecutionErrorKind::ConnectionClosed)
    }

    /// Returns `true` if this error came from the execution service.
    pub fn is_execution(&self) -> bool {
        self.is_kind(|kind| matches!(kind, super::ErrorKind::Execution(_)))
    }

    /// Returns `true` if the backend rejected the credentials.
    pub fn is_access_denied(&self) -> bool {
        self.is_kind(|kind| {
            matches!(
                kind,
                super::ErrorKind::Execution(ExecutionError {
                    kind: ExecutionErrorKind::AccessDenied
                })
            )
        })
    }

    /// Returns `true` if the backend does not know the database.
    pub fn is_unknown_database(&self) -> bool {
        self.is_kind(|kind| {
            matches!(
                kind,
                super::ErrorKind::Execution(ExecutionError {
                    kind: ExecutionErrorKind::UnknownDatabase
                })
            )
        })
    }

    fn execution(kind: ExecutionErrorKind) -> Error {
        Error::from(super::ErrorKind::Execution(ExecutionError { kind }))
    }
}
