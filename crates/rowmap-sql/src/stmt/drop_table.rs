use super::Statement;

use rowmap_core::schema::Schema;

/// `DROP TABLE IF EXISTS`.
#[derive(Debug, Clone)]
pub struct DropTable {
    pub table: String,
}

impl Statement {
    pub fn drop_table(schema: &Schema) -> Statement {
        DropTable {
            table: schema.table_name.clone(),
        }
        .into()
    }
}
