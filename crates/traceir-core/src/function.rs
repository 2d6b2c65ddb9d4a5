use crate::operation::Operation;
use crate::types::TensorType;
use crate::values::ValueId;
use serde::{Deserialize, Serialize};

/// A single traced function: parameters and a flat, ordered operation body.
/// Constructed through [`crate::builder::FunctionBuilder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub params: Vec<(ValueId, TensorType)>,
    pub operations: Vec<Operation>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            operations: Vec::new(),
        }
    }

    /// Operation that defines `value`, if any (parameters have no defining op).
    pub fn defining_op(&self, value: ValueId) -> Option<&Operation> {
        self.operations
            .iter()
            .find(|op| op.results.contains(&value))
    }
}
