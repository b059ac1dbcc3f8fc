use crate::{LiteralError, PRIMITIVES, PrimitiveKind};

fn literal(kind: PrimitiveKind, value: &str) -> String {
    kind.descriptor().format_literal(value).unwrap()
}

#[test]
fn literal_per_type() {
    let rendered: Vec<_> = PRIMITIVES
        .iter()
        .map(|d| format!("{}: {}", d.type_name, d.format_literal("1").unwrap()))
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    boolean: true
    byte: (byte) 1
    char: (char) 1
    double: 1.0
    float: 1.0f
    int: 1
    long: 1L
    short: (short) 1
    ");
}

#[test]
fn floating_point_keeps_fraction() {
    assert_eq!(literal(PrimitiveKind::Float, "2.5"), "2.5f");
    assert_eq!(literal(PrimitiveKind::Double, "-0.25"), "-0.25");
}

#[test]
fn negative_integral() {
    assert_eq!(literal(PrimitiveKind::Int, "-7"), "-7");
    assert_eq!(literal(PrimitiveKind::Short, "-7"), "(short) -7");
    assert_eq!(literal(PrimitiveKind::Long, "-7"), "-7L");
}

#[test]
fn boolean_literals() {
    assert_eq!(literal(PrimitiveKind::Boolean, "0"), "false");
    assert_eq!(literal(PrimitiveKind::Boolean, "0.0"), "false");
    assert_eq!(literal(PrimitiveKind::Boolean, "2"), "true");
    assert_eq!(literal(PrimitiveKind::Boolean, "false"), "false");
    assert_eq!(literal(PrimitiveKind::Boolean, " true "), "true");
}

#[test]
fn integral_rejects_fraction() {
    let err = PrimitiveKind::Int
        .descriptor()
        .format_literal("1.5")
        .unwrap_err();
    assert_eq!(
        err,
        LiteralError::Fractional {
            kind: PrimitiveKind::Int,
            value: "1.5".to_string()
        }
    );
    insta::assert_snapshot!(err, @"`1.5` is not a valid int literal");
}

#[test]
fn rejects_non_numeric() {
    for text in ["", "abc", "1.", ".5", "--1", "1e3", "true"] {
        let result = PrimitiveKind::Long.descriptor().format_literal(text);
        assert!(
            matches!(result, Err(LiteralError::NotNumeric { .. })),
            "{text:?} should be rejected"
        );
    }
}

#[test]
fn cast_expression() {
    assert_eq!(
        PrimitiveKind::Byte.descriptor().cast("value").unwrap(),
        "(byte) value"
    );
    let err = PrimitiveKind::Boolean.descriptor().cast("value").unwrap_err();
    insta::assert_snapshot!(err, @"boolean values cannot be cast");
}

#[test]
fn hash_code_strategies() {
    let rendered: Vec<_> = PRIMITIVES
        .iter()
        .map(|d| format!("{}: {}", d.type_name, d.hash_code("item")))
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    boolean: (item ? 1231 : 1237)
    byte: (int) item
    char: (int) item
    double: (int) (Double.doubleToLongBits(item) ^ Double.doubleToLongBits(item) >>> 32)
    float: Float.floatToIntBits(item)
    int: item
    long: (int) (item ^ item >>> 32)
    short: (int) item
    ");
}
