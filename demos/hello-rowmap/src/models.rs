use rowmap::{Field, Schema};
use std::sync::Arc;

pub fn user() -> rowmap::Result<Arc<Schema>> {
    Schema::builder("User")
        .field("id", Field::integer().primary_key())
        .field("name", Field::string(100).not_null().default("Default name"))
        .field("email", Field::string(100).not_null())
        .build()
}

pub fn employee(user: &Arc<Schema>) -> rowmap::Result<Arc<Schema>> {
    Schema::builder("employee")
        .field("name", Field::string(100).default("Default name"))
        .field("phonenum", Field::string(100).unique())
        .field("user", Field::foreign_key(user).nullable(true))
        .build()
}
