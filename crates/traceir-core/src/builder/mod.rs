/*! Builder for constructing traced functions operation by operation.
 *
 * The builder owns the function under construction and the insertion point at
 * the end of its body. Value handles are issued here and validated here; an
 * operand the builder never produced is rejected rather than silently wired.
 */

pub mod dialect;
pub mod function_builder;

pub use function_builder::FunctionBuilder;
