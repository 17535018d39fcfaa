#[macro_use]
mod fmt;
use fmt::ToSql;

mod column_def;
use column_def::ColumnDef;

mod delim;
use delim::{Comma, Delimited};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod statement;
mod value;
use value::{Literal, Param};

use crate::stmt::{Statement, Value};

use rowmap_core::schema::Field;

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    /// Serializes `stmt`, pushing every bound value onto `params` in
    /// placeholder order. Values never appear in the returned text.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    /// Renders the DDL of one field, without its name:
    /// `<TYPE> [AUTO_INCREMENT] [PRIMARY KEY] [NOT NULL] [UNIQUE] [DEFAULT <literal>]`.
    ///
    /// The auto-increment keyword is only rendered for an integer primary key,
    /// and only when `include_auto_increment` is set.
    pub fn column_def(&self, field: &Field, include_auto_increment: bool) -> String {
        self.fragment(ColumnDef {
            field,
            auto_increment: include_auto_increment,
        })
    }

    /// Renders a value as an SQL literal, as used for `DEFAULT` clauses.
    pub fn literal(&self, value: &Value) -> String {
        self.fragment(Literal(value))
    }

    fn fragment(&self, fragment: impl ToSql) -> String {
        let mut ret = String::new();
        let mut params = Vec::<Value>::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params: &mut params,
        };

        fragment.to_sql(&mut fmt);
        debug_assert!(params.is_empty(), "DDL fragments never bind parameters");
        ret
    }

    fn is_mysql(&self) -> bool {
        matches!(self.flavor, Flavor::Mysql)
    }
}
