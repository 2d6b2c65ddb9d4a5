use super::{builder_with_params, f32_vec};
use crate::fallback::{emit_fallback, UNRECOGNIZED_PREFIX};
use crate::invocation::{Invocation, OutputType, ParamMap, ParamValue};
use crate::primitive::Primitive;
use pretty_assertions::assert_eq;
use traceir_core::{Attribute, ElementType, TensorType};

#[test]
fn test_operand_and_result_wiring() {
    let (mut builder, params) = builder_with_params(&[f32_vec(4), f32_vec(4)]);

    let inv = Invocation::new(
        Primitive::new("gather"),
        params.clone(),
        vec![f32_vec(4), f32_vec(4)],
        OutputType::Single(f32_vec(2)),
        ParamMap::new(),
    )
    .unwrap();
    let results = emit_fallback(&mut builder, &inv).unwrap();

    assert_eq!(results.len(), 1);
    let op = builder.function().defining_op(results[0]).unwrap();
    assert_eq!(op.name, format!("{}.gather", UNRECOGNIZED_PREFIX));
    assert_eq!(op.operands, params);
    assert_eq!(
        op.result_types,
        vec![TensorType::new(ElementType::F32, &[2])]
    );
    assert_eq!(
        builder.value_type(results[0]),
        Some(&TensorType::new(ElementType::F32, &[2]))
    );
}

#[test]
fn test_integer_tuples_become_array_attributes_and_strings_are_dropped() {
    let (mut builder, params) = builder_with_params(&[f32_vec(4)]);

    let mut param_map = ParamMap::new();
    param_map.insert(
        "window".to_string(),
        ParamValue::Tuple(vec![
            ParamValue::Int(1),
            ParamValue::Int(2),
            ParamValue::Int(3),
        ]),
    );
    param_map.insert("label".to_string(), ParamValue::Str("x".to_string()));

    let inv = Invocation::new(
        Primitive::new("reduce_window"),
        params,
        vec![f32_vec(4)],
        OutputType::Single(f32_vec(2)),
        param_map,
    )
    .unwrap();
    let results = emit_fallback(&mut builder, &inv).unwrap();

    let op = builder.function().defining_op(results[0]).unwrap();
    assert_eq!(op.attributes.len(), 1);
    assert_eq!(
        op.attributes.get("window"),
        Some(&Attribute::integer_array([1, 2, 3]))
    );
    assert_eq!(op.attributes.get("label"), None);
}

#[test]
fn test_non_integer_tuple_elements_are_filtered() {
    let (mut builder, params) = builder_with_params(&[f32_vec(4)]);

    let mut param_map = ParamMap::new();
    param_map.insert(
        "strides".to_string(),
        ParamValue::Tuple(vec![
            ParamValue::Int(1),
            ParamValue::Str("a".to_string()),
            ParamValue::Float(0.5),
            ParamValue::Int(2),
        ]),
    );

    let inv = Invocation::new(
        Primitive::new("conv"),
        params,
        vec![f32_vec(4)],
        OutputType::Single(f32_vec(4)),
        param_map,
    )
    .unwrap();
    let results = emit_fallback(&mut builder, &inv).unwrap();

    let op = builder.function().defining_op(results[0]).unwrap();
    assert_eq!(
        op.attributes.get("strides"),
        Some(&Attribute::integer_array([1, 2]))
    );
}

#[test]
fn test_scalar_params_are_dropped() {
    let (mut builder, params) = builder_with_params(&[f32_vec(4)]);

    let mut param_map = ParamMap::new();
    param_map.insert("axis".to_string(), ParamValue::Int(0));
    param_map.insert("keepdims".to_string(), ParamValue::Bool(true));
    param_map.insert("epsilon".to_string(), ParamValue::Float(1e-6));

    let inv = Invocation::new(
        Primitive::new("reduce_sum"),
        params,
        vec![f32_vec(4)],
        OutputType::Single(f32_vec(1)),
        param_map,
    )
    .unwrap();
    let results = emit_fallback(&mut builder, &inv).unwrap();

    let op = builder.function().defining_op(results[0]).unwrap();
    assert!(op.attributes.is_empty());
}

#[test]
fn test_multi_result_gets_one_value_per_output_type() {
    let (mut builder, params) = builder_with_params(&[f32_vec(4)]);

    let inv = Invocation::new(
        Primitive::new("split"),
        params,
        vec![f32_vec(4)],
        OutputType::Multi(vec![f32_vec(2), f32_vec(2)]),
        ParamMap::new(),
    )
    .unwrap();
    let results = emit_fallback(&mut builder, &inv).unwrap();

    assert_eq!(results.len(), 2);
    assert_ne!(results[0], results[1]);
    let op = builder.function().defining_op(results[0]).unwrap();
    assert_eq!(op.name, "unrecognized.split");
    assert_eq!(op.results, results);
}

#[test]
fn test_invocation_arity_invariant() {
    let err = Invocation::new(
        Primitive::new("add"),
        vec![],
        vec![f32_vec(4)],
        OutputType::Single(f32_vec(4)),
        ParamMap::new(),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "invocation has 0 operands but 1 operand types"
    );
}
