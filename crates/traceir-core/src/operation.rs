use crate::attributes::AttributeMap;
use crate::types::TensorType;
use crate::values::ValueId;
use serde::{Deserialize, Serialize};

/// Generic IR operation: a name, ordered operands, ordered results with their
/// types, and an attribute dictionary. No regions, no successors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    pub operands: Vec<ValueId>,
    pub results: Vec<ValueId>,
    pub result_types: Vec<TensorType>,
    pub attributes: AttributeMap,
}

impl Operation {
    pub fn result(&self, index: usize) -> Option<ValueId> {
        self.results.get(index).copied()
    }
}
