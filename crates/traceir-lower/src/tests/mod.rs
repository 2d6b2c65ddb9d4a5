/*! Test coverage for the lowering engine.
 *
 * The driver's contract is thin but precise: pass-through for registered
 * handlers, placeholder synthesis for everything else, verbatim failure
 * propagation. These tests pin each branch down.
 */

mod fallback_tests;
mod registry_tests;

use crate::invocation::{Invocation, OutputType, ParamMap};
use crate::primitive::Primitive;
use traceir_core::{AbstractType, ElementType, FunctionBuilder, ValueId};

pub(crate) fn f32_vec(len: u64) -> AbstractType {
    AbstractType::shaped(ElementType::F32, &[len])
}

pub(crate) fn builder_with_params(avals: &[AbstractType]) -> (FunctionBuilder, Vec<ValueId>) {
    let mut builder = FunctionBuilder::new("test");
    let params = avals
        .iter()
        .map(|aval| builder.add_param(aval).unwrap())
        .collect();
    (builder, params)
}

pub(crate) fn invocation(
    name: &str,
    operands: Vec<ValueId>,
    operand_types: Vec<AbstractType>,
    output: OutputType,
) -> Invocation {
    Invocation::new(
        Primitive::new(name),
        operands,
        operand_types,
        output,
        ParamMap::new(),
    )
    .unwrap()
}
