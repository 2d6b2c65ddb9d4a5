use crate::error::Result;
use crate::fallback::emit_fallback;
use crate::invocation::Invocation;
use crate::registry::HandlerRegistry;
use traceir_core::{FunctionBuilder, ValueId};

/// Lower one invocation: a registered handler's return value passes through
/// unchanged, an unregistered primitive takes the fallback path. Handler and
/// builder failures propagate verbatim; a registry miss never fails.
///
/// The handler is trusted to respect the invocation's output type; the hot
/// path does not re-validate results.
pub fn lower(
    builder: &mut FunctionBuilder,
    registry: &HandlerRegistry,
    invocation: &Invocation,
) -> Result<Vec<ValueId>> {
    match registry.lookup(invocation.primitive()) {
        Some(handler) => handler(builder, invocation),
        None => emit_fallback(builder, invocation),
    }
}
