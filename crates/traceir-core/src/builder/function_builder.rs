use crate::{
    attributes::AttributeMap,
    function::Function,
    operation::Operation,
    types::{AbstractType, TensorType},
    values::ValueId,
    IrError, Result,
};
use indexmap::IndexMap;

pub struct FunctionBuilder {
    function: Function,
    value_types: IndexMap<ValueId, TensorType>,
    next_value: u32,
}

impl FunctionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            function: Function::new(name),
            value_types: IndexMap::new(),
            next_value: 0,
        }
    }

    /// Convert a tracer-level abstract type to its IR tensor type.
    pub fn convert_type(&self, aval: &AbstractType) -> Result<TensorType> {
        TensorType::from_abstract(aval)
    }

    pub fn add_param(&mut self, aval: &AbstractType) -> Result<ValueId> {
        let ty = self.convert_type(aval)?;
        let id = self.alloc_value(ty.clone());
        self.function.params.push((id, ty));
        Ok(id)
    }

    /// Append one generic operation at the insertion point and return its
    /// result handles, one per entry in `result_types`.
    pub fn create_operation(
        &mut self,
        name: &str,
        result_types: Vec<TensorType>,
        operands: &[ValueId],
        attributes: AttributeMap,
    ) -> Result<Vec<ValueId>> {
        for operand in operands {
            if !self.value_types.contains_key(operand) {
                return Err(IrError::BuilderError(format!(
                    "operand {} of {} is not a value of this function",
                    operand, name
                )));
            }
        }

        let results: Vec<ValueId> = result_types
            .iter()
            .map(|ty| self.alloc_value(ty.clone()))
            .collect();

        self.function.operations.push(Operation {
            name: name.to_string(),
            operands: operands.to_vec(),
            results: results.clone(),
            result_types,
            attributes,
        });

        Ok(results)
    }

    pub fn value_type(&self, value: ValueId) -> Option<&TensorType> {
        self.value_types.get(&value)
    }

    pub fn function(&self) -> &Function {
        &self.function
    }

    pub fn finish(self) -> Function {
        self.function
    }

    fn alloc_value(&mut self, ty: TensorType) -> ValueId {
        let id = ValueId(self.next_value);
        self.next_value += 1;
        self.value_types.insert(id, ty);
        id
    }
}
