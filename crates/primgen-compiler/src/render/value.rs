use primgen_core::{PrimitiveDescriptor, PropertyValue};

/// What an expression evaluates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Bool(bool),
    Primitive(&'static PrimitiveDescriptor),
}

impl Value {
    /// Booleans by value, text when non-empty, primitives always.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Text(text) => !text.is_empty(),
            Value::Bool(b) => *b,
            Value::Primitive(_) => true,
        }
    }

    /// Text as it appears in output. A primitive renders as its type keyword.
    pub fn render(&self) -> String {
        match self {
            Value::Text(text) => text.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Primitive(descriptor) => descriptor.type_name.to_string(),
        }
    }

    pub fn as_primitive(&self) -> Option<&'static PrimitiveDescriptor> {
        match self {
            Value::Primitive(descriptor) => Some(descriptor),
            _ => None,
        }
    }
}

impl From<PropertyValue> for Value {
    fn from(value: PropertyValue) -> Self {
        match value {
            PropertyValue::Text(text) => Value::Text(text.to_string()),
            PropertyValue::Flag(flag) => Value::Bool(flag),
        }
    }
}

impl From<&'static PrimitiveDescriptor> for Value {
    fn from(descriptor: &'static PrimitiveDescriptor) -> Self {
        Value::Primitive(descriptor)
    }
}
