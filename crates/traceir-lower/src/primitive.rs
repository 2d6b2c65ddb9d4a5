use serde::{Deserialize, Serialize};

/// Identity of a source-level primitive ("add", "abs", ...). Opaque and
/// comparable; a registry holds at most one handler per identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Primitive(String);

impl Primitive {
    pub fn new(name: impl Into<String>) -> Self {
        Primitive(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Primitive {
    fn from(name: &str) -> Self {
        Primitive::new(name)
    }
}
