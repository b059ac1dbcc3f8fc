#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Primitive type descriptors.
//!
//! The closed set of primitive variants a template is expanded over, plus the
//! per-type rules templates rely on: literal formatting, casts, hash codes,
//! and the property table exposed as `<primitive.xyz>`.

mod literal;
mod primitive;
pub mod utils;

#[cfg(test)]
mod literal_tests;
#[cfg(test)]
mod utils_tests;

pub use literal::LiteralError;
pub use primitive::{
    PRIMITIVES, PROPERTY_NAMES, PrimitiveDescriptor, PrimitiveKind, PropertyValue,
    UnknownPrimitive,
};
