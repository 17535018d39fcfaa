mod value;
pub(crate) use value::Value;

use rowmap_core::{
    async_trait,
    driver::{Capability, Driver, Operation, Response, Returning},
    stmt::Row,
    Error, Result,
};
use rusqlite::{Connection as RusqliteConnection, ErrorCode};
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a `sqlite:<path>` or `sqlite::memory:`
    /// connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "missing database path in connection URL; url={url_str}"
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn connect(&self) -> Result<Box<dyn rowmap_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    /// Every in-memory connection is a fresh, empty database.
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(sqlite_error)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(sqlite_error)?;
        Ok(Self { connection })
    }
}

#[async_trait]
impl rowmap_core::driver::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        let mut stmt = self
            .connection
            .prepare_cached(&op.sql)
            .map_err(sqlite_error)?;

        let params = op.params.into_iter().map(Value::from).collect::<Vec<_>>();
        let params = rusqlite::params_from_iter(params.iter());

        match op.ret {
            Returning::Count => {
                let count = stmt.execute(params).map_err(sqlite_error)?;
                Ok(Response::count(count as u64))
            }
            Returning::LastInsertId => {
                stmt.execute(params).map_err(sqlite_error)?;
                Ok(Response::last_insert_id(self.connection.last_insert_rowid()))
            }
            Returning::Rows => {
                let columns = stmt
                    .column_names()
                    .into_iter()
                    .map(String::from)
                    .collect::<Vec<_>>();

                let mut rows = stmt.query(params).map_err(sqlite_error)?;
                let mut ret = vec![];

                while let Some(row) = rows.next().map_err(sqlite_error)? {
                    let mut record = Row::with_capacity(columns.len());

                    for (index, column) in columns.iter().enumerate() {
                        let value = Value::from_sql(row, index, column)?;
                        record.insert(column.clone(), value.into_inner());
                    }

                    ret.push(record);
                }

                Ok(Response::rows(ret))
            }
        }
    }
}

/// Maps a SQLite failure onto the execution error categories.
fn sqlite_error(err: rusqlite::Error) -> Error {
    match err {
        rusqlite::Error::SqliteFailure(failure, message) => match failure.code {
            ErrorCode::AuthorizationForStatementDenied => Error::access_denied(),
            ErrorCode::CannotOpen => Error::unknown_database(),
            _ => Error::backend(
                failure.extended_code as i64,
                message.unwrap_or_else(|| failure.to_string()),
            ),
        },
        err => Error::driver(err),
    }
}
