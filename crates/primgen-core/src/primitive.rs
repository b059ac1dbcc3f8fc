use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// The primitive variants, in canonical (alphabetical) order.
///
/// The discriminant doubles as the index into [`PRIMITIVES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PrimitiveKind {
    Boolean = 0,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
        PrimitiveKind::Double,
        PrimitiveKind::Float,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Short,
    ];

    /// The language keyword, e.g. `int`.
    pub fn keyword(self) -> &'static str {
        self.descriptor().type_name
    }

    pub fn descriptor(self) -> &'static PrimitiveDescriptor {
        &PRIMITIVES[self as usize]
    }

    pub fn is_floating_point(self) -> bool {
        matches!(self, Self::Double | Self::Float)
    }

    pub fn is_integral(self) -> bool {
        matches!(self, Self::Byte | Self::Short | Self::Int | Self::Long)
    }

    /// Resolves a keyword (`int`), a descriptor name (`Int`) or a wrapper
    /// name (`Integer`), ignoring case.
    pub fn lookup(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL.into_iter().find(|kind| {
            let d = kind.descriptor();
            d.type_name.eq_ignore_ascii_case(text)
                || d.name.eq_ignore_ascii_case(text)
                || d.wrapper_name.eq_ignore_ascii_case(text)
        })
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown primitive `{0}` (expected one of boolean, byte, char, double, float, int, long, short)")]
pub struct UnknownPrimitive(pub String);

impl FromStr for PrimitiveKind {
    type Err = UnknownPrimitive;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| UnknownPrimitive(s.to_string()))
    }
}

/// Metadata for one primitive variant, bound to templates as `primitive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimitiveDescriptor {
    pub kind: PrimitiveKind,
    #[serde(rename = "type")]
    pub type_name: &'static str,
    /// Capitalized name used in generated class names (`IntArrayStack`).
    pub name: &'static str,
    pub wrapper_name: &'static str,
    /// Tolerance argument appended to equality assertions; empty unless floating point.
    pub delta: &'static str,
    pub supports_sum: bool,
    /// Accumulator type for sums; empty when sums are unsupported.
    pub sum_type: &'static str,
    pub zero: &'static str,
}

pub static PRIMITIVES: [PrimitiveDescriptor; 8] = [
    PrimitiveDescriptor {
        kind: PrimitiveKind::Boolean,
        type_name: "boolean",
        name: "Boolean",
        wrapper_name: "Boolean",
        delta: "",
        supports_sum: false,
        sum_type: "",
        zero: "false",
    },
    PrimitiveDescriptor {
        kind: PrimitiveKind::Byte,
        type_name: "byte",
        name: "Byte",
        wrapper_name: "Byte",
        delta: "",
        supports_sum: true,
        sum_type: "long",
        zero: "(byte) 0",
    },
    PrimitiveDescriptor {
        kind: PrimitiveKind::Char,
        type_name: "char",
        name: "Char",
        wrapper_name: "Character",
        delta: "",
        supports_sum: false,
        sum_type: "",
        zero: "(char) 0",
    },
    PrimitiveDescriptor {
        kind: PrimitiveKind::Double,
        type_name: "double",
        name: "Double",
        wrapper_name: "Double",
        delta: ", 0.0",
        supports_sum: true,
        sum_type: "double",
        zero: "0.0",
    },
    PrimitiveDescriptor {
        kind: PrimitiveKind::Float,
        type_name: "float",
        name: "Float",
        wrapper_name: "Float",
        delta: ", 0.0",
        supports_sum: true,
        sum_type: "double",
        zero: "0.0f",
    },
    PrimitiveDescriptor {
        kind: PrimitiveKind::Int,
        type_name: "int",
        name: "Int",
        wrapper_name: "Integer",
        delta: "",
        supports_sum: true,
        sum_type: "long",
        zero: "0",
    },
    PrimitiveDescriptor {
        kind: PrimitiveKind::Long,
        type_name: "long",
        name: "Long",
        wrapper_name: "Long",
        delta: "",
        supports_sum: true,
        sum_type: "long",
        zero: "0L",
    },
    PrimitiveDescriptor {
        kind: PrimitiveKind::Short,
        type_name: "short",
        name: "Short",
        wrapper_name: "Short",
        delta: "",
        supports_sum: true,
        sum_type: "long",
        zero: "(short) 0",
    },
];

/// Value of a descriptor property as seen by templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyValue {
    Text(&'static str),
    Flag(bool),
}

/// Every property name a template may read from a descriptor.
pub const PROPERTY_NAMES: &[&str] = &[
    "type",
    "name",
    "wrapperName",
    "delta",
    "zero",
    "sumType",
    "floatingPoint",
    "integral",
    "supportsSum",
    "booleanPrimitive",
    "bytePrimitive",
    "charPrimitive",
    "doublePrimitive",
    "floatPrimitive",
    "intPrimitive",
    "longPrimitive",
    "shortPrimitive",
];

impl PrimitiveDescriptor {
    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        use PropertyValue::{Flag, Text};

        let value = match name {
            "type" => Text(self.type_name),
            "name" => Text(self.name),
            "wrapperName" => Text(self.wrapper_name),
            "delta" => Text(self.delta),
            "zero" => Text(self.zero),
            "sumType" => Text(self.sum_type),
            "floatingPoint" => Flag(self.kind.is_floating_point()),
            "integral" => Flag(self.kind.is_integral()),
            "supportsSum" => Flag(self.supports_sum),
            "booleanPrimitive" => Flag(self.kind == PrimitiveKind::Boolean),
            "bytePrimitive" => Flag(self.kind == PrimitiveKind::Byte),
            "charPrimitive" => Flag(self.kind == PrimitiveKind::Char),
            "doublePrimitive" => Flag(self.kind == PrimitiveKind::Double),
            "floatPrimitive" => Flag(self.kind == PrimitiveKind::Float),
            "intPrimitive" => Flag(self.kind == PrimitiveKind::Int),
            "longPrimitive" => Flag(self.kind == PrimitiveKind::Long),
            "shortPrimitive" => Flag(self.kind == PrimitiveKind::Short),
            _ => return None,
        };
        Some(value)
    }

    pub fn is_property(name: &str) -> bool {
        PROPERTY_NAMES.contains(&name)
    }
}
