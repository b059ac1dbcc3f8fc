use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use insta::assert_snapshot;

use crate::test_utils::failure_of;
use crate::{
    assert_all_values_satisfy, assert_any_value_satisfies, assert_contains_all_entries,
    assert_contains_all_key_values, assert_contains_entry, assert_contains_key,
    assert_contains_key_value, assert_maps_equal, assert_no_values_satisfy,
    assert_not_contains_key, deny_contains_key, named,
};

fn wrappers() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([("int", "Integer"), ("char", "Character"), ("long", "Long")])
}

#[test]
fn keys() {
    let map = wrappers();
    assert_contains_key(&"int", &map);
    assert_not_contains_key(&"string", &map);
    deny_contains_key(&"void", &map);

    let message = failure_of(|| assert_contains_key(&"void", &map));
    assert_snapshot!(message, @r#"map did not contain expectedKey:<"void">"#);

    let message = failure_of(|| named("wrappers").deny_contains_key(&"int", &map));
    assert_snapshot!(message, @r#"wrappers contained unexpectedKey:<"int">"#);
}

#[test]
fn key_values() {
    let map = wrappers();
    assert_contains_key_value(&"long", &"Long", &map);
    assert_contains_all_key_values(&map, &[("int", "Integer"), ("char", "Character")]);

    let message = failure_of(|| assert_contains_key_value(&"int", &"Int", &map));
    assert_snapshot!(message, @r#"map entry with expectedKey:<"int"> did not contain expectedValue:<"Int">, but had actualValue:<"Integer">"#);

    let message = failure_of(|| assert_contains_all_key_values(&map, &[("int", "Int"), ("long", "Long")]));
    assert_snapshot!(message, @r#"map has incorrect values for keys:[key:<"int",expectedValue:<"Int">, actualValue:<"Integer">> ]"#);

    let message = failure_of(|| assert_contains_all_key_values(&map, &[("byte", "Byte")]));
    assert_snapshot!(message, @r#"map.keys() did not contain these items:<["byte"]>"#);
}

#[test]
fn maps_equal_across_kinds() {
    let hashed: HashMap<&str, &str> = wrappers().into_iter().collect();
    let indexed: IndexMap<&str, &str> = wrappers().into_iter().rev().collect();
    assert_maps_equal(&hashed, &indexed);
}

#[test]
fn maps_equal_failures() {
    let expected = wrappers();

    let mut fewer = wrappers();
    fewer.remove("int");
    let message = failure_of(|| assert_maps_equal(&expected, &fewer));
    assert_snapshot!(message, @"Incorrect size for map keys; expected:<3> but was:<2>");

    let mut changed = wrappers();
    changed.insert("int", "Int");
    let message = failure_of(|| assert_maps_equal(&expected, &changed));
    assert_snapshot!(message, @r#"map entries: 1 elements different. expected:<[("int", "Integer")]> but was:<[("int", "Int")]>"#);
}

#[test]
fn values_satisfy() {
    let sizes = HashMap::from([("byte", 1), ("int", 4), ("long", 8)]);
    assert_all_values_satisfy(&sizes, |size| *size > 0);
    assert_any_value_satisfies(&sizes, |size| *size == 8);
    assert_no_values_satisfy(&sizes, |size| *size > 8);

    let message = failure_of(|| assert_no_values_satisfy(&sizes, |size| *size == 4));
    assert_snapshot!(message, @"The following items satisfied the condition <[4]>");

    let message = failure_of(|| named("sizes").assert_all_values_satisfy(&sizes, |size| *size < 8));
    assert_snapshot!(message, @"sizes: The following items failed to satisfy the condition <[8]>");

    let message = failure_of(|| named("sizes").assert_any_value_satisfies(&sizes, |size| *size == 2));
    assert_snapshot!(message, @"sizes: No items satisfied the condition");

    named("sizes").assert_no_values_satisfy(&sizes, |size| *size == 2);
}

#[test]
fn multimap_entries() {
    let multimap = BTreeMap::from([("even", vec![2, 4]), ("odd", vec![1, 3])]);
    assert_contains_entry(&"even", &4, &multimap);
    assert_contains_all_entries(&multimap, &[("odd", 1), ("odd", 3)]);

    let message = failure_of(|| assert_contains_entry(&"odd", &2, &multimap));
    assert_snapshot!(message, @r#"multimap did not contain entry: <"odd", 2>"#);

    let message = failure_of(|| assert_contains_all_entries(&multimap, &[("odd", 1), ("even", 3), ("zero", 0)]));
    assert_snapshot!(message, @r#"multimap is missing entries: [("even", 3), ("zero", 0)]"#);
}
