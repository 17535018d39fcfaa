use super::{Formatter, Params};

use rowmap_core::schema::ColumnType;

/// Writes each fragment in turn. A fragment is a literal, an identifier, or
/// a parenthesized expression.
macro_rules! fmt {
    ($f:expr, $( $fragment:tt )*) => {{
        $(
            ($fragment).to_sql($f);
        )*
    }};
}

pub(super) trait ToSql {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>);
}

impl ToSql for &str {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(self);
    }
}

impl ToSql for u64 {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;
        write!(f.dst, "{self}").expect("writing to a String cannot fail");
    }
}

impl ToSql for &ColumnType {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;
        write!(f.dst, "{self}").expect("writing to a String cannot fail");
    }
}
