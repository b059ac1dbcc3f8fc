use std::path::PathBuf;

use crate::{MemoryLoader, TemplateSet};

fn load(loader: &MemoryLoader, root: &str) -> TemplateSet {
    TemplateSet::load(&[PathBuf::from(root)], loader).unwrap()
}

#[test]
fn local_definitions_override_imports_and_first_import_wins() {
    let loader = MemoryLoader::new()
        .file(
            "t/main.stg",
            r#"import "a.stg" import "lib/b.stg" class(primitive) ::= "<primitive><helper()>" helper() ::= "main""#,
        )
        .file("t/a.stg", r#"helper() ::= "a" fromA() ::= "a" shared() ::= "a""#)
        .file("t/lib/b.stg", r#"shared() ::= "b" fromB() ::= "b""#);

    let set = load(&loader, "t/main.stg");
    assert!(set.is_valid(), "{}", set.diagnostics().render_plain());

    let unit = &set.units()[0];
    let names: Vec<&str> = unit.scope().template_names().collect();
    assert_eq!(names, ["class", "helper", "fromA", "shared", "fromB"]);

    let stem = |name: &str| {
        let def = unit.scope().template(name).unwrap();
        set.source_map().stem(def.source).unwrap().to_string()
    };
    assert_eq!(stem("helper"), "main");
    assert_eq!(stem("shared"), "a");
    assert_eq!(stem("fromB"), "b");
    assert_eq!(unit.members().len(), 3);
}

#[test]
fn imported_templates_resolve_in_importer_scope() {
    let loader = MemoryLoader::new()
        .file(
            "main.stg",
            r#"import "base.stg" class(primitive) ::= "<body(primitive)>" helper(a, b) ::= "<a><b>""#,
        )
        .file("base.stg", r#"body(p) ::= "<helper()><p>""#);

    let set = load(&loader, "main.stg");
    insta::assert_snapshot!(set.diagnostics().render_plain(), @"error at 14..20: `helper` expects 2 arguments, found 0");
}

#[test]
fn shared_library_reports_once() {
    let loader = MemoryLoader::new()
        .file("one.stg", r#"import "lib.stg" class(primitive) ::= "<primitive>""#)
        .file("two.stg", r#"import "lib.stg" class(primitive) ::= "<primitive>""#)
        .file("lib.stg", r#"broken() ::= "<missing>""#);

    let set = TemplateSet::load(
        &[PathBuf::from("one.stg"), PathBuf::from("two.stg")],
        &loader,
    )
    .unwrap();
    assert_eq!(set.units().len(), 2);
    assert_eq!(set.diagnostics().error_count(), 1);
}

#[test]
fn missing_import() {
    let set = TemplateSet::from_source(r#"import "missing.stg""#);
    insta::assert_snapshot!(set.diagnostics().render_plain(), @"error at 7..20: cannot load `missing.stg` (hint: no such group: missing.stg)");
}

#[test]
fn import_cycle() {
    let loader = MemoryLoader::new()
        .file("a.stg", r#"import "b.stg" a() ::= "a""#)
        .file("b.stg", r#"import "./a.stg" b() ::= "b""#);

    let set = load(&loader, "a.stg");
    insta::assert_snapshot!(set.diagnostics().render_plain(), @"error at 7..16: importing `./a.stg` forms a cycle");

    // The edge that closes the cycle is dropped; everything else still resolves.
    let unit = &set.units()[0];
    assert!(unit.scope().has_template("b"));
}

#[test]
fn unreadable_root_is_an_error() {
    let result = TemplateSet::load(&[PathBuf::from("nope.stg")], &MemoryLoader::new());
    assert!(matches!(result, Err(crate::Error::Read { .. })));
}

#[test]
fn library_units() {
    let set = TemplateSet::from_source(r#"helper() ::= "x""#);
    assert_eq!(set.units()[0].kind(), crate::UnitKind::Library);
    assert_eq!(set.generators().count(), 0);
}
