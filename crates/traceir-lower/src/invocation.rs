use crate::error::{LowerError, Result};
use crate::primitive::Primitive;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use traceir_core::{AbstractType, ValueId};

/// Operation-specific static configuration carried alongside an invocation.
/// Heterogeneous by design; the fallback path only encodes integer tuples and
/// drops the rest (see [`crate::fallback`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Tuple(Vec<ParamValue>),
}

impl ParamValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

pub type ParamMap = IndexMap<String, ParamValue>;

/// Result type(s) of an invocation: one abstract type or an ordered sequence
/// for multi-result primitives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputType {
    Single(AbstractType),
    Multi(Vec<AbstractType>),
}

impl OutputType {
    pub fn as_slice(&self) -> &[AbstractType] {
        match self {
            OutputType::Single(aval) => std::slice::from_ref(aval),
            OutputType::Multi(avals) => avals,
        }
    }

    pub fn single(&self) -> Option<&AbstractType> {
        match self {
            OutputType::Single(aval) => Some(aval),
            OutputType::Multi(_) => None,
        }
    }
}

impl From<AbstractType> for OutputType {
    fn from(aval: AbstractType) -> Self {
        OutputType::Single(aval)
    }
}

/// One source operation as handed down by the tracer: the primitive identity,
/// already-lowered operand handles with their abstract types (positionally
/// aligned), the output type(s), and static parameters. Constructed once,
/// consumed once by the driver, never mutated.
#[derive(Debug, Clone)]
pub struct Invocation {
    primitive: Primitive,
    operands: Vec<ValueId>,
    operand_types: Vec<AbstractType>,
    output: OutputType,
    params: ParamMap,
}

impl Invocation {
    pub fn new(
        primitive: Primitive,
        operands: Vec<ValueId>,
        operand_types: Vec<AbstractType>,
        output: OutputType,
        params: ParamMap,
    ) -> Result<Self> {
        if operands.len() != operand_types.len() {
            return Err(LowerError::OperandArityMismatch {
                operands: operands.len(),
                types: operand_types.len(),
            });
        }
        Ok(Self {
            primitive,
            operands,
            operand_types,
            output,
            params,
        })
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    pub fn operands(&self) -> &[ValueId] {
        &self.operands
    }

    pub fn operand_types(&self) -> &[AbstractType] {
        &self.operand_types
    }

    pub fn output(&self) -> &OutputType {
        &self.output
    }

    pub fn params(&self) -> &ParamMap {
        &self.params
    }
}
