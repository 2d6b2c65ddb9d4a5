use crate::invocation::Invocation;
use crate::primitive::Primitive;
use crate::registry::{HandlerRegistry, PrimitiveHandler};
use crate::Result;
use traceir_core::{FunctionBuilder, ValueId};

fn handler_one(_: &mut FunctionBuilder, _: &Invocation) -> Result<Vec<ValueId>> {
    Ok(vec![ValueId(1)])
}

fn handler_two(_: &mut FunctionBuilder, _: &Invocation) -> Result<Vec<ValueId>> {
    Ok(vec![ValueId(2)])
}

#[test]
fn test_lookup_miss_is_none_not_error() {
    let registry = HandlerRegistry::new();
    assert!(registry.lookup(&Primitive::new("nope")).is_none());
    assert!(registry.is_empty());
}

#[test]
fn test_register_and_lookup() {
    let mut registry = HandlerRegistry::new();
    registry.register(Primitive::new("add"), handler_one);

    assert!(registry.contains(&Primitive::new("add")));
    assert!(registry.lookup(&Primitive::new("add")).is_some());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_reregistration_last_write_wins() {
    let mut registry = HandlerRegistry::new();
    let id = Primitive::new("add");
    registry.register(id.clone(), handler_one);
    registry.register(id.clone(), handler_two);

    assert_eq!(registry.len(), 1);
    let handler = registry.lookup(&id).unwrap();
    assert_eq!(handler as usize, handler_two as usize);
}

#[test]
fn test_with_handlers_builds_from_pair_list() {
    let pairs: Vec<(Primitive, PrimitiveHandler)> = vec![
        (Primitive::new("add"), handler_one),
        (Primitive::new("mul"), handler_two),
        (Primitive::new("add"), handler_two),
    ];
    let registry = HandlerRegistry::with_handlers(pairs);

    assert_eq!(registry.len(), 2);
    let handler = registry.lookup(&Primitive::new("add")).unwrap();
    assert_eq!(handler as usize, handler_two as usize);
}
