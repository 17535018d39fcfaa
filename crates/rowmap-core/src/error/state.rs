use super::Error;

/// Error when an operation requires a persisted entity but got a transient
/// one (or the other way around).
#[derive(Debug)]
pub(super) struct StateError {
    message: Box<str>,
}

impl std::error::Error for StateError {}

impl core::fmt::Display for StateError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid entity state: {}", self.message)
    }
}

impl Error {
    pub fn state(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::State(StateError {
            message: message.into().into(),
        }))
    }

    pub fn is_state(&self) -> bool {
        self.is_kind(|kind| matches!(kind, super::ErrorKind::State(_)))
    }
}
