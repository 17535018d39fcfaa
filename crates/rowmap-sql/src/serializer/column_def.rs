use super::{Flavor, Formatter, Ident, Literal, Params, ToSql};

use rowmap_core::schema::Field;

pub(super) struct ColumnDef<'a> {
    pub(super) field: &'a Field,
    pub(super) auto_increment: bool,
}

/// `<name> <column def>`, as listed in `CREATE TABLE`.
pub(super) struct NamedColumnDef<'a>(pub(super) ColumnDef<'a>);

impl ToSql for ColumnDef<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let field = self.field;
        let auto_increment = self.auto_increment && field.primary_key && field.ty.is_integer();

        fmt!(f, (&field.ty));

        match f.serializer.flavor {
            Flavor::Mysql => {
                if auto_increment {
                    fmt!(f, " AUTO_INCREMENT");
                }
                if field.primary_key {
                    fmt!(f, " PRIMARY KEY");
                }
            }
            // SQLite only aliases the rowid for the exact `INTEGER PRIMARY KEY`
            // and spells the keyword `AUTOINCREMENT`, after the key.
            Flavor::Sqlite => {
                if field.primary_key {
                    fmt!(f, " PRIMARY KEY");
                }
                if auto_increment {
                    fmt!(f, " AUTOINCREMENT");
                }
            }
        }

        if !field.nullable {
            fmt!(f, " NOT NULL");
        }

        if field.unique {
            fmt!(f, " UNIQUE");
        }

        if let Some(default) = &field.default {
            fmt!(f, " DEFAULT " (Literal(default)));
        }
    }
}

impl ToSql for NamedColumnDef<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Ident(&self.0.field.name);
        fmt!(f, name " " (self.0));
    }
}
