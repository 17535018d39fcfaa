use mysql_async::{prelude::ToValue, Row, Value as MySqlValue};
use rowmap_core::{err, stmt::Value as CoreValue, Result};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this MySQL driver value into the core rowmap value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Takes the value at `index` out of a result row.
    ///
    /// `BOOLEAN` is an alias of `TINYINT(1)` and comes back as an integer;
    /// the caller coerces it to the field's declared type.
    pub fn from_sql(index: usize, row: &mut Row, column: &str) -> Result<Self> {
        let value: MySqlValue = row.take(index).unwrap_or(MySqlValue::NULL);

        let core_value = match value {
            MySqlValue::NULL => CoreValue::Null,
            MySqlValue::Int(v) => CoreValue::I64(v),
            MySqlValue::UInt(v) => CoreValue::I64(
                i64::try_from(v)
                    .map_err(|_| err!("column `{column}` value {v} does not fit in an i64"))?,
            ),
            MySqlValue::Float(v) => CoreValue::F64(v as f64),
            MySqlValue::Double(v) => CoreValue::F64(v),
            MySqlValue::Bytes(v) => CoreValue::String(
                String::from_utf8(v)
                    .map_err(|e| err!("column `{column}` is not valid UTF-8: {e}"))?,
            ),
            MySqlValue::Date(year, month, day, hour, minute, second, micros) => {
                CoreValue::DateTime(jiff::civil::DateTime::new(
                    year as i16,
                    month as i8,
                    day as i8,
                    hour as i8,
                    minute as i8,
                    second as i8,
                    micros as i32 * 1000,
                )?)
            }
            MySqlValue::Time(..) => return Err(err!("column `{column}` holds a TIME value")),
        };

        Ok(Value(core_value))
    }
}

impl ToValue for Value {
    fn to_value(&self) -> MySqlValue {
        match &self.0 {
            CoreValue::Bool(value) => value.to_value(),
            CoreValue::I64(value) => value.to_value(),
            CoreValue::F64(value) => value.to_value(),
            CoreValue::String(value) => value.to_value(),
            CoreValue::DateTime(value) => MySqlValue::Date(
                value.year() as u16,
                value.month() as u8,
                value.day() as u8,
                value.hour() as u8,
                value.minute() as u8,
                value.second() as u8,
                (value.subsec_nanosecond() / 1000) as u32,
            ),
            CoreValue::Null => MySqlValue::NULL,
        }
    }
}
