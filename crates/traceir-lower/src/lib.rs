/*! Lowering of traced numeric-program primitives into traceir operations.
 *
 * A tracer hands this crate one [`Invocation`] per source operation. The
 * driver looks the primitive up in a [`HandlerRegistry`]; a registered handler
 * emits the semantically-correct operation, and anything unregistered falls
 * back to a generic `unrecognized.*` placeholder so tracing always makes
 * forward progress.
 */

pub mod driver;
pub mod error;
pub mod fallback;
pub mod handlers;
pub mod invocation;
pub mod primitive;
pub mod registry;

pub use driver::lower;
pub use error::{LowerError, Result};
pub use fallback::{emit_fallback, UNRECOGNIZED_PREFIX};
pub use handlers::hlo_handlers;
pub use invocation::{Invocation, OutputType, ParamMap, ParamValue};
pub use primitive::Primitive;
pub use registry::{HandlerRegistry, PrimitiveHandler};

#[cfg(test)]
mod tests;
