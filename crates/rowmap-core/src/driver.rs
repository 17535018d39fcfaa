mod capability;
pub use capability::{Capability, Dialect};

mod operation;
pub use operation::{Operation, Returning};

mod response;
pub use response::Response;

use crate::{async_trait, Result};

use std::fmt::Debug;

/// A database backend: knows how to open connections to one database.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Describes the backend, which selects the SQL dialect statements are
    /// serialized in.
    fn capability(&self) -> &'static Capability;

    /// Open a connection to the database.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// An open connection: the execution service.
///
/// Executes one statement per call and blocks the caller until the backend
/// answers. Implementations release driver resources (statements, cursors)
/// before returning, on success and on failure.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a statement.
    async fn exec(&mut self, op: Operation) -> Result<Response>;

    /// Release the connection.
    async fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
