//! Per-type source rules: literals, casts and hash codes.

use crate::primitive::{PrimitiveDescriptor, PrimitiveKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    #[error("`{value}` is not a numeric literal")]
    NotNumeric { value: String },

    #[error("`{value}` is not a valid {kind} literal")]
    Fractional { kind: PrimitiveKind, value: String },

    #[error("{kind} values cannot be cast")]
    NoCast { kind: PrimitiveKind },
}

/// Decimal number as written in a template, validated but not converted.
struct Number<'a> {
    text: &'a str,
    fractional: bool,
}

impl<'a> Number<'a> {
    fn parse(text: &'a str) -> Option<Self> {
        let digits = text.strip_prefix('-').unwrap_or(text);
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits, None),
        };

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !fraction.is_none_or(all_digits) {
            return None;
        }

        Some(Self {
            text,
            fractional: fraction.is_some(),
        })
    }

    fn is_zero(&self) -> bool {
        self.text.bytes().all(|b| matches!(b, b'0' | b'.' | b'-'))
    }

    /// The number with a fraction part, as floating-point literals need one.
    fn with_fraction(&self) -> String {
        if self.fractional {
            self.text.to_string()
        } else {
            format!("{}.0", self.text)
        }
    }
}

impl PrimitiveDescriptor {
    /// Formats a decimal value as a source literal of this type.
    ///
    /// `1` becomes `1` for int, `1L` for long, `1.0f` for float, `1.0` for
    /// double and `(short) 1` for the narrow integral types. Booleans map
    /// zero to `false` and anything else to `true`.
    pub fn format_literal(&self, value: &str) -> Result<String, LiteralError> {
        let value = value.trim();
        if self.kind == PrimitiveKind::Boolean {
            return boolean_literal(value);
        }

        let number = Number::parse(value).ok_or_else(|| LiteralError::NotNumeric {
            value: value.to_string(),
        })?;

        match self.kind {
            PrimitiveKind::Double => Ok(number.with_fraction()),
            PrimitiveKind::Float => Ok(format!("{}f", number.with_fraction())),
            _ if number.fractional => Err(LiteralError::Fractional {
                kind: self.kind,
                value: value.to_string(),
            }),
            PrimitiveKind::Int => Ok(number.text.to_string()),
            PrimitiveKind::Long => Ok(format!("{}L", number.text)),
            _ => Ok(format!("({}) {}", self.type_name, number.text)),
        }
    }

    /// Wraps `expr` in a cast to this type.
    pub fn cast(&self, expr: &str) -> Result<String, LiteralError> {
        if self.kind == PrimitiveKind::Boolean {
            return Err(LiteralError::NoCast { kind: self.kind });
        }
        Ok(format!("({}) {}", self.type_name, expr))
    }

    /// Expression computing the hash code of `expr`, matching the wrapper
    /// type's `hashCode()`.
    pub fn hash_code(&self, expr: &str) -> String {
        match self.kind {
            PrimitiveKind::Int => expr.to_string(),
            PrimitiveKind::Byte | PrimitiveKind::Char | PrimitiveKind::Short => {
                format!("(int) {expr}")
            }
            PrimitiveKind::Long => format!("(int) ({expr} ^ {expr} >>> 32)"),
            PrimitiveKind::Float => format!("Float.floatToIntBits({expr})"),
            PrimitiveKind::Double => format!(
                "(int) (Double.doubleToLongBits({expr}) ^ Double.doubleToLongBits({expr}) >>> 32)"
            ),
            PrimitiveKind::Boolean => format!("({expr} ? 1231 : 1237)"),
        }
    }
}

fn boolean_literal(value: &str) -> Result<String, LiteralError> {
    if value == "true" || value == "false" {
        return Ok(value.to_string());
    }
    let number = Number::parse(value).ok_or_else(|| LiteralError::NotNumeric {
        value: value.to_string(),
    })?;
    Ok(if number.is_zero() { "false" } else { "true" }.to_string())
}
