use crate::{Entity, Related};

use rowmap_core::stmt::Value;

/// What an entity holds for one field.
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// A scalar column value
    Value(Value),

    /// A foreign key
    Related(Related),
}

impl FieldValue {
    /// The value stored in the column: a foreign key reduces to the key of
    /// the referenced row.
    pub fn to_value(&self) -> Value {
        match self {
            FieldValue::Value(value) => value.clone(),
            FieldValue::Related(related) => related.key(),
        }
    }
}

impl From<Related> for FieldValue {
    fn from(related: Related) -> Self {
        FieldValue::Related(related)
    }
}

impl From<Entity> for FieldValue {
    fn from(entity: Entity) -> Self {
        FieldValue::Related(entity.into())
    }
}

impl From<&Entity> for FieldValue {
    fn from(entity: &Entity) -> Self {
        FieldValue::Related(entity.clone().into())
    }
}

impl<T: Into<Value>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        FieldValue::Value(value.into())
    }
}

macro_rules! impl_from_value {
    ( $( $ty:ty ),* ) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::Value(value.into())
                }
            }
        )*
    };
}

impl_from_value!(
    Value,
    bool,
    i32,
    i64,
    f64,
    &str,
    String,
    &String,
    rowmap_core::stmt::DateTime
);
