use thiserror::Error;
use traceir_core::IrError;

/// Failures surfaced by the lowering layer. A missing handler is not one of
/// them; that case is the defined fallback path. Builder and type-conversion
/// failures pass through unchanged.
#[derive(Error, Debug)]
pub enum LowerError {
    #[error("invocation has {operands} operands but {types} operand types")]
    OperandArityMismatch { operands: usize, types: usize },

    #[error(transparent)]
    Ir(#[from] IrError),
}

pub type Result<T> = std::result::Result<T, LowerError>;
