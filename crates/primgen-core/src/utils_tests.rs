use crate::utils::{specialized_name, to_pascal_case};

#[test]
fn pascal_case_from_camel() {
    assert_eq!(to_pascal_case("arrayStack"), "ArrayStack");
    assert_eq!(to_pascal_case("a"), "A");
}

#[test]
fn pascal_case_from_separators() {
    assert_eq!(to_pascal_case("hash_set"), "HashSet");
    assert_eq!(to_pascal_case("hash-set-test"), "HashSetTest");
    assert_eq!(to_pascal_case("hash.set"), "HashSet");
    assert_eq!(to_pascal_case("_set_"), "Set");
}

#[test]
fn pascal_case_idempotent() {
    assert_eq!(to_pascal_case("ArrayStack"), "ArrayStack");
    assert_eq!(to_pascal_case(""), "");
}

#[test]
fn specialized_name_replaces_placeholder() {
    assert_eq!(specialized_name("primitiveArrayStack", "Int"), "IntArrayStack");
    assert_eq!(
        specialized_name("primitiveArrayStackTest", "Double"),
        "DoubleArrayStackTest"
    );
}

#[test]
fn specialized_name_prepends_without_placeholder() {
    assert_eq!(specialized_name("arrayList", "Char"), "CharArrayList");
    assert_eq!(specialized_name("bag", "Byte"), "ByteBag");
}

#[test]
fn specialized_name_bare_placeholder() {
    assert_eq!(specialized_name("primitive", "Short"), "Short");
}
