mod connect;
pub use connect::Connect;

use crate::{Query, Result};

use rowmap_core::{
    driver::{Capability, Connection, Driver, Operation, Response, Returning},
    stmt::{Row, Value},
    Error, Schema,
};
use rowmap_sql::{
    stmt::{Insert, Select, Statement},
    Serializer,
};

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// A database handle.
///
/// The handle owns a single connection, opened on first use and held until
/// [`Db::close`]. Statements are executed one at a time, in the order they
/// are awaited. Cloning the handle shares the same connection.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    driver: Box<dyn Driver>,
    serializer: Serializer,
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    connection: Option<Box<dyn Connection>>,
    closed: bool,
}

impl Db {
    /// Create a handle over `driver`. No connection is opened until the first
    /// statement runs.
    pub fn new(driver: impl Driver) -> Db {
        let capability = driver.capability();

        Db {
            shared: Arc::new(Shared {
                serializer: Serializer::for_capability(capability),
                driver: Box::new(driver),
                state: Mutex::new(State::default()),
            }),
        }
    }

    /// Connect to the database at `url`.
    ///
    /// Unlike [`Db::new`] the connection is opened right away, so a bad
    /// URL, rejected credentials or a missing database are reported here.
    pub async fn connect(url: &str) -> Result<Db> {
        let db = Db::new(Connect::new(url)?);
        db.connection(&mut *db.shared.state.lock().await).await?;
        Ok(db)
    }

    pub fn capability(&self) -> &'static Capability {
        self.shared.driver.capability()
    }

    /// Creates the table backing `schema`, if it does not already exist.
    pub async fn create_table(&self, schema: &Schema) -> Result<()> {
        self.exec(Statement::create_table(schema), Returning::Count)
            .await?;
        info!(table = %schema.table_name, "created table");
        Ok(())
    }

    /// Drops the table backing `schema`, if it exists.
    pub async fn drop_table(&self, schema: &Schema) -> Result<()> {
        self.exec(Statement::drop_table(schema), Returning::Count)
            .await?;
        info!(table = %schema.table_name, "dropped table");
        Ok(())
    }

    /// Start a query over the rows of `schema`.
    pub fn objects(&self, schema: &Arc<Schema>) -> Query {
        Query::new(self, schema)
    }

    /// Release the connection. Any later statement fails with a
    /// connection-closed error. Closing twice is a no-op.
    pub async fn close(&self) -> Result<()> {
        let mut state = self.shared.state.lock().await;
        state.closed = true;

        if let Some(mut connection) = state.connection.take() {
            connection.close().await?;
            info!("connection closed");
        }

        Ok(())
    }

    pub(crate) async fn select(&self, select: Select) -> Result<Vec<Row>> {
        self.exec(select, Returning::Rows).await?.into_rows()
    }

    /// Runs an `INSERT`, returning the backend-assigned identity.
    pub(crate) async fn insert(&self, insert: Insert) -> Result<Value> {
        self.exec(insert, Returning::LastInsertId)
            .await?
            .into_last_insert_id()
    }

    pub(crate) async fn execute(&self, stmt: impl Into<Statement>) -> Result<u64> {
        self.exec(stmt, Returning::Count).await?.into_count()
    }

    async fn exec(&self, stmt: impl Into<Statement>, ret: Returning) -> Result<Response> {
        let mut params: Vec<Value> = vec![];
        let sql = self.shared.serializer.serialize(&stmt.into(), &mut params);

        debug!(sql = %sql, params = ?params, "exec");
        let op = Operation::new(sql, params, ret);

        let mut state = self.shared.state.lock().await;
        self.connection(&mut state).await?.exec(op).await
    }

    /// The open connection, opening it if this is the first statement.
    async fn connection<'a>(&self, state: &'a mut State) -> Result<&'a mut Box<dyn Connection>> {
        if state.closed {
            return Err(Error::connection_closed());
        }

        if state.connection.is_none() {
            let connection = self.shared.driver.connect().await?;
            info!(dialect = ?self.capability().dialect, "connection opened");
            state.connection = Some(connection);
        }

        state
            .connection
            .as_mut()
            .ok_or_else(Error::connection_closed)
    }
}
