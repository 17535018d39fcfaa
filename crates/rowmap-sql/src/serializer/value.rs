use super::{Formatter, Params, ToSql};

use crate::stmt::Value;

/// A value bound as a parameter.
pub(super) struct Param<'a>(pub(super) &'a Value);

/// A value rendered inline, for DDL only.
pub(super) struct Literal<'a>(pub(super) &'a Value);

impl ToSql for Param<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self.0);
        fmt!(f, placeholder);
    }
}

impl ToSql for Literal<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        match self.0 {
            Value::Null => f.dst.push_str("NULL"),
            Value::Bool(true) => f.dst.push('1'),
            Value::Bool(false) => f.dst.push('0'),
            Value::I64(v) => write!(f.dst, "{v}").expect("writing to a String cannot fail"),
            Value::F64(v) => write!(f.dst, "{v}").expect("writing to a String cannot fail"),
            Value::String(v) => quoted(v, f),
            Value::DateTime(v) => quoted(&v.to_string(), f),
        }
    }
}

fn quoted<P: Params>(s: &str, f: &mut Formatter<'_, P>) {
    let mysql = f.serializer.is_mysql();

    f.dst.push('\'');
    for c in s.chars() {
        match c {
            '\'' => f.dst.push_str("''"),
            // MySQL treats backslash as an escape inside string literals
            '\\' if mysql => f.dst.push_str("\\\\"),
            c => f.dst.push(c),
        }
    }
    f.dst.push('\'');
}
