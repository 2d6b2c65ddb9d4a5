/*! Core IR types and builder for traced numeric programs.
 *
 * A tracer walking a source-level numeric program needs somewhere to put the
 * operations it discovers. This crate provides that target: a small tensor IR
 * with a generic operation record, a builder that owns the insertion point,
 * and the abstract-type to IR-type conversion the lowering layer relies on.
 */

pub mod attributes;
pub mod builder;
pub mod format;
pub mod function;
pub mod ir_persist;
pub mod operation;
pub mod types;
pub mod values;

pub use attributes::{Attribute, AttributeMap};
pub use builder::FunctionBuilder;
pub use format::{format_function, format_operation};
pub use function::Function;
pub use operation::Operation;
pub use types::{AbstractType, ElementType, TensorType};
pub use values::ValueId;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IrError {
    #[error("Type error: {0}")]
    TypeError(String),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Builder error: {0}")]
    BuilderError(String),
}

pub type Result<T> = std::result::Result<T, IrError>;

#[cfg(test)]
mod tests;
