use crate::{ExecLog, LoggingDriver};

use rowmap::{
    driver::{Capability, Dialect, Driver},
    Db, Schema,
};
use std::sync::Arc;

/// Per-test database state: a handle over a logging driver, and the log.
pub struct DbTest {
    db: Db,
    log: ExecLog,
}

impl DbTest {
    pub fn new(driver: Box<dyn Driver>) -> DbTest {
        init_tracing();

        let driver = LoggingDriver::new(driver);
        let log = ExecLog::new(driver.ops_log_handle());

        DbTest {
            db: Db::new(driver),
            log,
        }
    }

    /// A fresh in-memory SQLite database.
    #[cfg(feature = "sqlite")]
    pub fn sqlite() -> DbTest {
        DbTest::new(Box::new(rowmap_driver_sqlite::Sqlite::in_memory()))
    }

    /// The MySQL database named by `ROWMAP_MYSQL_URL`.
    #[cfg(feature = "mysql")]
    pub fn mysql() -> DbTest {
        let url = std::env::var("ROWMAP_MYSQL_URL")
            .unwrap_or_else(|_| "mysql://root@localhost:3306/rowmap_test".to_string());
        let driver = rowmap_driver_mysql::MySQL::new(url).expect("valid ROWMAP_MYSQL_URL");
        DbTest::new(Box::new(driver))
    }

    pub fn capability(&self) -> &'static Capability {
        self.db.capability()
    }

    pub fn is_sqlite(&self) -> bool {
        self.capability().dialect == Dialect::Sqlite
    }

    /// Recreates the tables of `schemas`, then clears the log.
    ///
    /// Tables are dropped in reverse order, so a table is dropped before the
    /// tables it references.
    pub async fn setup_db(&mut self, schemas: &[&Arc<Schema>]) -> Db {
        for schema in schemas.iter().rev() {
            self.db.drop_table(schema).await.unwrap();
        }

        for schema in schemas {
            self.db.create_table(schema).await.unwrap();
        }

        self.log.clear();
        self.db.clone()
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    pub fn log(&mut self) -> &mut ExecLog {
        &mut self.log
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
