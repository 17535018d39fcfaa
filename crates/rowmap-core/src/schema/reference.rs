use super::Schema;

use std::{fmt, sync::Arc};

/// The target of a foreign key field.
///
/// Holds the referenced schema and the name of its primary key. Rows are
/// linked by primary-key equality only: there is no `REFERENCES` constraint
/// on the backend.
#[derive(Clone)]
pub struct Reference {
    pub schema: Arc<Schema>,
    pub primary_key: String,
}

impl fmt::Debug for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The target schema is not printed in full; it may itself hold references.
        f.debug_struct("Reference")
            .field("table", &self.schema.table_name)
            .field("primary_key", &self.primary_key)
            .finish()
    }
}
