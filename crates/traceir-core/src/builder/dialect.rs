/*! Typed constructors for the `hlo` dialect.
 *
 * Each constructor builds exactly one operation with a fixed name. Binary ops
 * broadcast; when the caller knows the operand ranks differ it passes the
 * explicit `broadcast_dimensions` mapping, otherwise the attribute is omitted
 * and ranks are taken to agree.
 */

use super::FunctionBuilder;
use crate::{
    attributes::{Attribute, AttributeMap},
    types::TensorType,
    values::ValueId,
    IrError, Result,
};

impl FunctionBuilder {
    pub fn broadcast_add(
        &mut self,
        result_type: TensorType,
        lhs: ValueId,
        rhs: ValueId,
        broadcast_dimensions: Option<Vec<i64>>,
    ) -> Result<ValueId> {
        self.binary_op("hlo.add", result_type, lhs, rhs, broadcast_dimensions)
    }

    pub fn broadcast_sub(
        &mut self,
        result_type: TensorType,
        lhs: ValueId,
        rhs: ValueId,
        broadcast_dimensions: Option<Vec<i64>>,
    ) -> Result<ValueId> {
        self.binary_op("hlo.sub", result_type, lhs, rhs, broadcast_dimensions)
    }

    pub fn broadcast_mul(
        &mut self,
        result_type: TensorType,
        lhs: ValueId,
        rhs: ValueId,
        broadcast_dimensions: Option<Vec<i64>>,
    ) -> Result<ValueId> {
        self.binary_op("hlo.mul", result_type, lhs, rhs, broadcast_dimensions)
    }

    pub fn broadcast_div(
        &mut self,
        result_type: TensorType,
        lhs: ValueId,
        rhs: ValueId,
        broadcast_dimensions: Option<Vec<i64>>,
    ) -> Result<ValueId> {
        self.binary_op("hlo.div", result_type, lhs, rhs, broadcast_dimensions)
    }

    pub fn broadcast_max(
        &mut self,
        result_type: TensorType,
        lhs: ValueId,
        rhs: ValueId,
        broadcast_dimensions: Option<Vec<i64>>,
    ) -> Result<ValueId> {
        self.binary_op("hlo.max", result_type, lhs, rhs, broadcast_dimensions)
    }

    pub fn broadcast_min(
        &mut self,
        result_type: TensorType,
        lhs: ValueId,
        rhs: ValueId,
        broadcast_dimensions: Option<Vec<i64>>,
    ) -> Result<ValueId> {
        self.binary_op("hlo.min", result_type, lhs, rhs, broadcast_dimensions)
    }

    pub fn abs(&mut self, result_type: TensorType, operand: ValueId) -> Result<ValueId> {
        self.unary_op("hlo.abs", result_type, operand)
    }

    pub fn neg(&mut self, result_type: TensorType, operand: ValueId) -> Result<ValueId> {
        self.unary_op("hlo.neg", result_type, operand)
    }

    pub fn exp(&mut self, result_type: TensorType, operand: ValueId) -> Result<ValueId> {
        self.unary_op("hlo.exp", result_type, operand)
    }

    pub fn tanh(&mut self, result_type: TensorType, operand: ValueId) -> Result<ValueId> {
        self.unary_op("hlo.tanh", result_type, operand)
    }

    /// Element type cast; the shape of `result_type` must match the operand.
    pub fn convert(&mut self, result_type: TensorType, operand: ValueId) -> Result<ValueId> {
        self.unary_op("hlo.convert", result_type, operand)
    }

    fn binary_op(
        &mut self,
        name: &str,
        result_type: TensorType,
        lhs: ValueId,
        rhs: ValueId,
        broadcast_dimensions: Option<Vec<i64>>,
    ) -> Result<ValueId> {
        let mut attributes = AttributeMap::new();
        if let Some(dims) = broadcast_dimensions {
            attributes.insert(
                "broadcast_dimensions".to_string(),
                Attribute::integer_array(dims),
            );
        }
        let results = self.create_operation(name, vec![result_type], &[lhs, rhs], attributes)?;
        single_result(name, results)
    }

    fn unary_op(
        &mut self,
        name: &str,
        result_type: TensorType,
        operand: ValueId,
    ) -> Result<ValueId> {
        let results =
            self.create_operation(name, vec![result_type], &[operand], AttributeMap::new())?;
        single_result(name, results)
    }
}

fn single_result(name: &str, results: Vec<ValueId>) -> Result<ValueId> {
    results
        .into_iter()
        .next()
        .ok_or_else(|| IrError::InvalidOperation(format!("{} produced no result", name)))
}
