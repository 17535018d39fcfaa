#[macro_use]
mod macros;

mod db_test;
pub use db_test::DbTest;

mod exec_log;
pub use exec_log::ExecLog;

pub use logging_driver::{DriverOp, LoggingDriver};
