use crate::{IrError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar element type of a tensor. Integers are signless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    I1,
    I8,
    I32,
    I64,
    F16,
    F32,
    F64,
}

impl ElementType {
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ElementType::I1 | ElementType::I8 | ElementType::I32 | ElementType::I64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, ElementType::F16 | ElementType::F32 | ElementType::F64)
    }

    pub fn bit_width(&self) -> u16 {
        match self {
            ElementType::I1 => 1,
            ElementType::I8 => 8,
            ElementType::I32 | ElementType::F32 => 32,
            ElementType::I64 | ElementType::F64 => 64,
            ElementType::F16 => 16,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::I1 => write!(f, "i1"),
            ElementType::I8 => write!(f, "i8"),
            ElementType::I32 => write!(f, "i32"),
            ElementType::I64 => write!(f, "i64"),
            ElementType::F16 => write!(f, "f16"),
            ElementType::F32 => write!(f, "f32"),
            ElementType::F64 => write!(f, "f64"),
        }
    }
}

/// Shape/dtype description of a value as the source tracer sees it, prior to
/// IR-level type conversion. `Opaque` covers source types the IR has no
/// representation for; converting one fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbstractType {
    Shaped { element: ElementType, dims: Vec<u64> },
    Opaque(String),
}

impl AbstractType {
    pub fn shaped(element: ElementType, dims: &[u64]) -> Self {
        AbstractType::Shaped {
            element,
            dims: dims.to_vec(),
        }
    }

    pub fn scalar(element: ElementType) -> Self {
        AbstractType::Shaped {
            element,
            dims: Vec::new(),
        }
    }

    pub fn rank(&self) -> Option<usize> {
        match self {
            AbstractType::Shaped { dims, .. } => Some(dims.len()),
            AbstractType::Opaque(_) => None,
        }
    }
}

impl fmt::Display for AbstractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbstractType::Shaped { element, dims } => {
                write!(f, "{}[", element)?;
                for (i, d) in dims.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", d)?;
                }
                write!(f, "]")
            }
            AbstractType::Opaque(name) => write!(f, "opaque<{}>", name),
        }
    }
}

/// Ranked tensor type of an IR value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TensorType {
    pub element: ElementType,
    pub dims: Vec<u64>,
}

impl TensorType {
    pub fn new(element: ElementType, dims: &[u64]) -> Self {
        Self {
            element,
            dims: dims.to_vec(),
        }
    }

    pub fn scalar(element: ElementType) -> Self {
        Self {
            element,
            dims: Vec::new(),
        }
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn from_abstract(aval: &AbstractType) -> Result<Self> {
        match aval {
            AbstractType::Shaped { element, dims } => Ok(TensorType {
                element: *element,
                dims: dims.clone(),
            }),
            AbstractType::Opaque(name) => Err(IrError::TypeError(format!(
                "no IR representation for abstract type opaque<{}>",
                name
            ))),
        }
    }
}

impl fmt::Display for TensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tensor<")?;
        for d in &self.dims {
            write!(f, "{}x", d)?;
        }
        write!(f, "{}>", self.element)
    }
}
