/*! Concrete lowering rules for the `hlo` dialect.
 *
 * Each handler converts the invocation's result type, builds the one typed
 * operation for its primitive, and returns its result. Handlers are total for
 * well-typed invocations; operand counts are checked only because the slice
 * destructuring needs them, types are left to the constructors.
 */

use crate::error::{LowerError, Result};
use crate::invocation::Invocation;
use crate::primitive::Primitive;
use crate::registry::{HandlerRegistry, PrimitiveHandler};
use traceir_core::{AbstractType, FunctionBuilder, IrError, TensorType, ValueId};

/// The default rule set, built from an explicit list rather than registration
/// side effects so the table's contents are visible in one place.
pub fn hlo_handlers() -> HandlerRegistry {
    let pairs: Vec<(Primitive, PrimitiveHandler)> = vec![
        (Primitive::new("add"), lower_add),
        (Primitive::new("sub"), lower_sub),
        (Primitive::new("mul"), lower_mul),
        (Primitive::new("div"), lower_div),
        (Primitive::new("max"), lower_max),
        (Primitive::new("min"), lower_min),
        (Primitive::new("abs"), lower_abs),
        (Primitive::new("neg"), lower_neg),
        (Primitive::new("exp"), lower_exp),
        (Primitive::new("tanh"), lower_tanh),
        (Primitive::new("convert"), lower_convert),
    ];
    HandlerRegistry::with_handlers(pairs)
}

fn lower_add(builder: &mut FunctionBuilder, inv: &Invocation) -> Result<Vec<ValueId>> {
    let rt = single_result_type(builder, inv)?;
    let (lhs, rhs) = binary_operands(inv)?;
    let dims = broadcast_dimensions(inv.operand_types());
    let out = builder.broadcast_add(rt, lhs, rhs, dims)?;
    Ok(vec![out])
}

fn lower_sub(builder: &mut FunctionBuilder, inv: &Invocation) -> Result<Vec<ValueId>> {
    let rt = single_result_type(builder, inv)?;
    let (lhs, rhs) = binary_operands(inv)?;
    let dims = broadcast_dimensions(inv.operand_types());
    let out = builder.broadcast_sub(rt, lhs, rhs, dims)?;
    Ok(vec![out])
}

fn lower_mul(builder: &mut FunctionBuilder, inv: &Invocation) -> Result<Vec<ValueId>> {
    let rt = single_result_type(builder, inv)?;
    let (lhs, rhs) = binary_operands(inv)?;
    let dims = broadcast_dimensions(inv.operand_types());
    let out = builder.broadcast_mul(rt, lhs, rhs, dims)?;
    Ok(vec![out])
}

fn lower_div(builder: &mut FunctionBuilder, inv: &Invocation) -> Result<Vec<ValueId>> {
    let rt = single_result_type(builder, inv)?;
    let (lhs, rhs) = binary_operands(inv)?;
    let dims = broadcast_dimensions(inv.operand_types());
    let out = builder.broadcast_div(rt, lhs, rhs, dims)?;
    Ok(vec![out])
}

fn lower_max(builder: &mut FunctionBuilder, inv: &Invocation) -> Result<Vec<ValueId>> {
    let rt = single_result_type(builder, inv)?;
    let (lhs, rhs) = binary_operands(inv)?;
    let dims = broadcast_dimensions(inv.operand_types());
    let out = builder.broadcast_max(rt, lhs, rhs, dims)?;
    Ok(vec![out])
}

fn lower_min(builder: &mut FunctionBuilder, inv: &Invocation) -> Result<Vec<ValueId>> {
    let rt = single_result_type(builder, inv)?;
    let (lhs, rhs) = binary_operands(inv)?;
    let dims = broadcast_dimensions(inv.operand_types());
    let out = builder.broadcast_min(rt, lhs, rhs, dims)?;
    Ok(vec![out])
}

fn lower_abs(builder: &mut FunctionBuilder, inv: &Invocation) -> Result<Vec<ValueId>> {
    let rt = single_result_type(builder, inv)?;
    let operand = unary_operand(inv)?;
    let out = builder.abs(rt, operand)?;
    Ok(vec![out])
}

fn lower_neg(builder: &mut FunctionBuilder, inv: &Invocation) -> Result<Vec<ValueId>> {
    let rt = single_result_type(builder, inv)?;
    let operand = unary_operand(inv)?;
    let out = builder.neg(rt, operand)?;
    Ok(vec![out])
}

fn lower_exp(builder: &mut FunctionBuilder, inv: &Invocation) -> Result<Vec<ValueId>> {
    let rt = single_result_type(builder, inv)?;
    let operand = unary_operand(inv)?;
    let out = builder.exp(rt, operand)?;
    Ok(vec![out])
}

fn lower_tanh(builder: &mut FunctionBuilder, inv: &Invocation) -> Result<Vec<ValueId>> {
    let rt = single_result_type(builder, inv)?;
    let operand = unary_operand(inv)?;
    let out = builder.tanh(rt, operand)?;
    Ok(vec![out])
}

fn lower_convert(builder: &mut FunctionBuilder, inv: &Invocation) -> Result<Vec<ValueId>> {
    let rt = single_result_type(builder, inv)?;
    let operand = unary_operand(inv)?;
    let out = builder.convert(rt, operand)?;
    Ok(vec![out])
}

fn single_result_type(builder: &FunctionBuilder, inv: &Invocation) -> Result<TensorType> {
    let aval = inv.output().single().ok_or_else(|| {
        IrError::InvalidOperation(format!(
            "primitive {} produces a single result",
            inv.primitive()
        ))
    })?;
    Ok(builder.convert_type(aval)?)
}

fn binary_operands(inv: &Invocation) -> Result<(ValueId, ValueId)> {
    let &[lhs, rhs] = inv.operands() else {
        return Err(operand_count(inv, 2));
    };
    Ok((lhs, rhs))
}

fn unary_operand(inv: &Invocation) -> Result<ValueId> {
    let &[operand] = inv.operands() else {
        return Err(operand_count(inv, 1));
    };
    Ok(operand)
}

fn operand_count(inv: &Invocation, expected: usize) -> LowerError {
    IrError::InvalidOperation(format!(
        "primitive {} expects {} operands, got {}",
        inv.primitive(),
        expected,
        inv.operands().len()
    ))
    .into()
}

/// Mapping of the lower-rank operand's dimensions into the result for a
/// broadcasting binary op, numpy trailing alignment. `None` when the ranks
/// agree (or are unknown) and no explicit mapping is needed.
fn broadcast_dimensions(operand_types: &[AbstractType]) -> Option<Vec<i64>> {
    let [lhs, rhs] = operand_types else {
        return None;
    };
    let lhs_rank = lhs.rank()?;
    let rhs_rank = rhs.rank()?;
    if lhs_rank == rhs_rank {
        return None;
    }
    let small = lhs_rank.min(rhs_rank);
    let large = lhs_rank.max(rhs_rank);
    Some(((large - small)..large).map(|d| d as i64).collect())
}
