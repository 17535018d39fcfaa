use crate::DriverOp;

use rowmap::{driver::Operation, Value};
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Forget everything logged so far
    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// All logged operations, oldest first
    pub fn operations(&self) -> Vec<Operation> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| op.operation.clone())
            .collect()
    }

    /// The SQL text of every logged operation, oldest first
    pub fn sql(&self) -> Vec<String> {
        self.operations().into_iter().map(|op| op.sql).collect()
    }

    /// Every bound parameter of every logged operation
    pub fn params(&self) -> Vec<Value> {
        self.operations()
            .into_iter()
            .flat_map(|op| op.params)
            .collect()
    }

    /// Remove and return the oldest logged operation
    #[track_caller]
    pub fn pop_op(&mut self) -> Operation {
        let mut ops = self.ops.lock().unwrap();
        assert!(!ops.is_empty(), "no operations logged");
        ops.remove(0).operation
    }

    /// The most recently logged operation
    #[track_caller]
    pub fn last_op(&self) -> Operation {
        self.ops
            .lock()
            .unwrap()
            .last()
            .map(|op| op.operation.clone())
            .expect("no operations logged")
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    /// Count operations whose SQL starts with `prefix`
    pub fn count_sql(&self, prefix: &str) -> usize {
        self.count(|op| op.sql.starts_with(prefix))
    }
}
