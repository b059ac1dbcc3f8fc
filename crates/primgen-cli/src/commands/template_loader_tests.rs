use std::fs;
use std::path::PathBuf;

use super::template_loader::{load_templates, template_roots};

#[test]
fn file_is_its_own_root() {
    let roots = template_roots(&PathBuf::from("stack.stg")).unwrap();
    assert_eq!(roots, [PathBuf::from("stack.stg")]);
}

#[test]
fn directory_roots_are_sorted_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.stg"), "").unwrap();
    fs::write(dir.path().join("a.stg"), "").unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();
    fs::create_dir(dir.path().join("lib")).unwrap();
    fs::write(dir.path().join("lib/common.stg"), "").unwrap();

    let roots = template_roots(dir.path()).unwrap();
    assert_eq!(roots, [dir.path().join("a.stg"), dir.path().join("b.stg")]);
}

#[test]
fn empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let err = template_roots(dir.path()).unwrap_err();
    assert!(err.starts_with("no .stg files found in"), "{}", err);
}

#[test]
fn missing_root_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.stg");
    let err = load_templates(&path).unwrap_err();
    assert!(err.starts_with("failed to read"), "{}", err);
}

#[test]
fn loads_imports_next_to_the_root() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("lib")).unwrap();
    fs::write(dir.path().join("lib/common.stg"), r#"header() ::= "// header""#).unwrap();
    fs::write(
        dir.path().join("list.stg"),
        r#"import "lib/common.stg" class(primitive) ::= "<header()> <primitive>""#,
    )
    .unwrap();

    let set = load_templates(dir.path()).unwrap();
    assert!(set.is_valid(), "{}", set.diagnostics().render_plain());
    assert_eq!(set.generators().count(), 1);
}
