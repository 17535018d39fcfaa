use super::{
    column_def::NamedColumnDef, ColumnDef, Comma, Delimited, Formatter, Ident, Param, Params,
    ToSql,
};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        let columns = Comma(self.columns.iter().map(|field| {
            NamedColumnDef(ColumnDef {
                field,
                auto_increment: true,
            })
        }));

        fmt!(f, "CREATE TABLE IF NOT EXISTS " table " (" columns ")");
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        fmt!(f, "DROP TABLE IF EXISTS " table);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        fmt!(f, "INSERT INTO " table);

        if self.columns.is_empty() {
            if f.serializer.is_mysql() {
                fmt!(f, " () VALUES ()");
            } else {
                fmt!(f, " DEFAULT VALUES");
            }
            return;
        }

        let columns = Comma(self.columns.iter().map(Ident));
        let values = Comma(self.values.iter().map(Param));
        fmt!(f, " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        let assignments = Comma(
            self.assignments
                .iter()
                .map(|(column, value)| Assignment(column, value)),
        );

        fmt!(f, "UPDATE " table " SET " assignments (&self.filter));
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        fmt!(f, "DELETE FROM " table (&self.filter));
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = Ident(&self.table);
        fmt!(f, "SELECT * FROM " table (&self.filter));

        if let Some(order_by) = &self.order_by {
            let column = Ident(&order_by.column);
            fmt!(f, " ORDER BY " column);
            if order_by.direction == stmt::Direction::Desc {
                fmt!(f, " DESC");
            }
        }

        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT " limit);
        }
    }
}

/// Renders ` WHERE a = ? AND b IS NULL`, or nothing for an empty filter.
impl ToSql for &stmt::Filter {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if self.is_empty() {
            return;
        }

        let clauses = Delimited(self.clauses.iter(), " AND ");
        fmt!(f, " WHERE " clauses);
    }
}

impl ToSql for &stmt::Clause {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = Ident(&self.column);

        if self.value.is_null() {
            fmt!(f, column " IS NULL");
        } else {
            let value = Param(&self.value);
            fmt!(f, column " = " value);
        }
    }
}

struct Assignment<'a>(&'a String, &'a stmt::Value);

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = Ident(self.0);
        let value = Param(self.1);
        fmt!(f, column " = " value);
    }
}
