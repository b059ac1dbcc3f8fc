use super::primitives::{render_json, render_table};

#[test]
fn table() {
    insta::assert_snapshot!(render_table(), @r#"
    type     name     wrapper    delta    sum  sumType  zero
    boolean  Boolean  Boolean    -        no   -        false
    byte     Byte     Byte       -        yes  long     (byte) 0
    char     Char     Character  -        no   -        (char) 0
    double   Double   Double     ", 0.0"  yes  double   0.0
    float    Float    Float      ", 0.0"  yes  double   0.0f
    int      Int      Integer    -        yes  long     0
    long     Long     Long       -        yes  long     0L
    short    Short    Short      -        yes  long     (short) 0

    Properties: type, name, wrapperName, delta, zero, sumType, floatingPoint, integral, supportsSum, booleanPrimitive, bytePrimitive, charPrimitive, doublePrimitive, floatPrimitive, intPrimitive, longPrimitive, shortPrimitive
    "#);
}

#[test]
fn json_listing() {
    let json: serde_json::Value = serde_json::from_str(&render_json().unwrap()).unwrap();

    let primitives = json["primitives"].as_array().unwrap();
    assert_eq!(primitives.len(), 8);
    assert_eq!(primitives[2]["kind"], "char");
    assert_eq!(primitives[2]["wrapperName"], "Character");
    assert_eq!(primitives[3]["delta"], ", 0.0");
    assert_eq!(primitives[5]["type"], "int");
    assert_eq!(primitives[5]["supportsSum"], true);
    assert_eq!(json["properties"].as_array().unwrap().len(), 17);
}
