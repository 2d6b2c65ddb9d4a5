use crate::error::Result;
use crate::invocation::Invocation;
use crate::primitive::Primitive;
use std::collections::HashMap;
use traceir_core::{FunctionBuilder, ValueId};

/// A lowering rule: emit IR for one invocation and return the produced
/// value(s), whose types must match the invocation's output type(s). Must not
/// retain the invocation beyond the call.
pub type PrimitiveHandler = fn(&mut FunctionBuilder, &Invocation) -> Result<Vec<ValueId>>;

/// Mapping from primitive identity to lowering rule. Populated before any
/// lookup happens and treated as read-only afterwards; pass it explicitly so
/// independent registries (one per target dialect) can coexist.
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    table: HashMap<Primitive, PrimitiveHandler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from an explicit, ordered list of rules.
    pub fn with_handlers(pairs: impl IntoIterator<Item = (Primitive, PrimitiveHandler)>) -> Self {
        let mut registry = Self::new();
        for (primitive, handler) in pairs {
            registry.register(primitive, handler);
        }
        registry
    }

    /// Insert or overwrite the rule for `primitive`. Last write wins;
    /// re-registration is not an error so call sites can redefine rules.
    pub fn register(&mut self, primitive: Primitive, handler: PrimitiveHandler) {
        self.table.insert(primitive, handler);
    }

    /// Rule for `primitive`, if any. A miss is an expected outcome handled by
    /// the driver's fallback path, never an error.
    pub fn lookup(&self, primitive: &Primitive) -> Option<PrimitiveHandler> {
        self.table.get(primitive).copied()
    }

    pub fn contains(&self, primitive: &Primitive) -> bool {
        self.table.contains_key(primitive)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
