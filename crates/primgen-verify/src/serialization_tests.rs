use serde::{Deserialize, Serialize};

use crate::{assert_post_serialized_equals_and_hash_code, assert_serialized_form, named};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Stack {
    elements: Vec<i32>,
    wrapper_name: String,
}

fn stack() -> Stack {
    Stack {
        elements: vec![1, 2],
        wrapper_name: "Integer".to_string(),
    }
}

#[test]
fn round_trip_returns_equal_copy() {
    let copy = assert_post_serialized_equals_and_hash_code(&stack());
    assert_eq!(copy.elements, vec![1, 2]);
}

#[test]
fn serialized_form() {
    assert_serialized_form(r#"{"elements":[1,2],"wrapperName":"Integer"}"#, &stack());
}

#[test]
#[should_panic(expected = "Serialization was broken. expected:<\"[]\"> but was:<")]
fn serialized_form_mismatch() {
    assert_serialized_form("[]", &stack());
}

#[test]
#[should_panic(expected = "stack: Serialization was broken. expected:<\"{}\"> but was:<")]
fn named_serialized_form_mismatch() {
    named("stack").assert_serialized_form("{}", &stack());
}

#[test]
fn named_round_trip() {
    let copy = named("stack").assert_post_serialized_equals_and_hash_code(&stack());
    assert_eq!(copy, stack());
}
