use crate::{function::Function, operation::Operation};
use std::fmt::Write;

/// Textual form of a function, one operation per line. The generic syntax
/// keeps unlowered operations greppable by name.
pub fn format_function(function: &Function) -> String {
    let mut output = String::new();

    write!(&mut output, "func @{}(", function.name).unwrap();
    for (i, (id, ty)) in function.params.iter().enumerate() {
        if i > 0 {
            write!(&mut output, ", ").unwrap();
        }
        write!(&mut output, "{}: {}", id, ty).unwrap();
    }
    writeln!(&mut output, ") {{").unwrap();

    for op in &function.operations {
        writeln!(&mut output, "  {}", format_operation(op)).unwrap();
    }

    writeln!(&mut output, "}}").unwrap();
    output
}

pub fn format_operation(op: &Operation) -> String {
    let mut output = String::new();

    for (i, result) in op.results.iter().enumerate() {
        if i > 0 {
            write!(&mut output, ", ").unwrap();
        }
        write!(&mut output, "{}", result).unwrap();
    }
    if !op.results.is_empty() {
        write!(&mut output, " = ").unwrap();
    }

    write!(&mut output, "\"{}\"(", op.name).unwrap();
    for (i, operand) in op.operands.iter().enumerate() {
        if i > 0 {
            write!(&mut output, ", ").unwrap();
        }
        write!(&mut output, "{}", operand).unwrap();
    }
    write!(&mut output, ")").unwrap();

    if !op.attributes.is_empty() {
        write!(&mut output, " {{").unwrap();
        for (i, (key, attr)) in op.attributes.iter().enumerate() {
            if i > 0 {
                write!(&mut output, ", ").unwrap();
            }
            write!(&mut output, "{} = {}", key, attr).unwrap();
        }
        write!(&mut output, "}}").unwrap();
    }

    write!(&mut output, " : ").unwrap();
    for (i, ty) in op.result_types.iter().enumerate() {
        if i > 0 {
            write!(&mut output, ", ").unwrap();
        }
        write!(&mut output, "{}", ty).unwrap();
    }

    output
}
