use crate::error::Result;
use crate::invocation::{Invocation, ParamValue};
use traceir_core::{Attribute, AttributeMap, FunctionBuilder, ValueId};

/// Namespace for placeholder operations, so downstream tooling can grep the
/// emitted IR for everything that never had a real lowering rule.
pub const UNRECOGNIZED_PREFIX: &str = "unrecognized";

/// Synthesize a generic placeholder operation for a primitive with no
/// registered handler: `unrecognized.<name>` with the invocation's operands in
/// order, one result per output type, and whatever parameters survive
/// attribute encoding. The result is semantically opaque; it keeps the trace
/// going, it is not a production lowering.
///
/// Only fails if an output type has no IR representation.
pub fn emit_fallback(
    builder: &mut FunctionBuilder,
    invocation: &Invocation,
) -> Result<Vec<ValueId>> {
    let op_name = format!("{}.{}", UNRECOGNIZED_PREFIX, invocation.primitive().name());

    let mut result_types = Vec::with_capacity(invocation.output().as_slice().len());
    for aval in invocation.output().as_slice() {
        result_types.push(builder.convert_type(aval)?);
    }

    let attributes = encode_params(invocation);

    let results = builder.create_operation(
        &op_name,
        result_types,
        invocation.operands(),
        attributes,
    )?;
    Ok(results)
}

/// Integer tuples become i64 array attributes; every other parameter variant
/// is dropped. The match is exhaustive on purpose: this is the documented
/// information-loss boundary of the fallback path, not an error.
fn encode_params(invocation: &Invocation) -> AttributeMap {
    let mut attributes = AttributeMap::new();
    for (key, value) in invocation.params() {
        match value {
            ParamValue::Tuple(items) => {
                let ints: Vec<Attribute> = items
                    .iter()
                    .filter_map(ParamValue::as_int)
                    .map(Attribute::Integer)
                    .collect();
                attributes.insert(key.clone(), Attribute::Array(ints));
            }
            ParamValue::Int(_) | ParamValue::Float(_) | ParamValue::Bool(_) | ParamValue::Str(_) => {}
        }
    }
    attributes
}
