use crate::types::TensorType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Static, serializable payload attached to an operation. `Integer` is a
/// 64-bit signless integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Attribute {
    Integer(i64),
    String(String),
    Array(Vec<Attribute>),
    Type(TensorType),
}

/// Attribute dictionary. Insertion order is preserved and observable in the
/// textual form.
pub type AttributeMap = IndexMap<String, Attribute>;

impl Attribute {
    pub fn integer_array(items: impl IntoIterator<Item = i64>) -> Self {
        Attribute::Array(items.into_iter().map(Attribute::Integer).collect())
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Attribute::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Attribute]> {
        match self {
            Attribute::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Integer(v) => write!(f, "{}", v),
            Attribute::String(s) => write!(f, "\"{}\"", s),
            Attribute::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Attribute::Type(ty) => write!(f, "{}", ty),
        }
    }
}
