// crates/marker_elider/tests/cpp_snippets.rs

use marker_elider::{count_markers, elide, ElideError, MarkerSpec};
use pretty_assertions::assert_eq;

const PLUGIN_SNIPPET: &str = r#"PluginManager::Manager<AbstractFilesystem> manager{
    DOXYGEN_IGNORE(Utility::Path::join(PLUGINS_DIR, "filesystems"))};
Containers::Pointer<AbstractFilesystem> fs = manager.loadAndInstantiate("ZipFilesystem");
fs->open(DOXYGEN_IGNORE("archive.zip"));
"#;

#[test]
fn elides_every_marker_in_a_realistic_snippet() {
    let expected = r#"PluginManager::Manager<AbstractFilesystem> manager{
    …};
Containers::Pointer<AbstractFilesystem> fs = manager.loadAndInstantiate("ZipFilesystem");
fs->open(…);
"#;
    assert_eq!(elide(PLUGIN_SNIPPET).unwrap(), expected);
    assert_eq!(
        count_markers(PLUGIN_SNIPPET, &MarkerSpec::default()).unwrap(),
        2
    );
}

#[test]
fn leaves_snippets_without_markers_untouched() {
    let snippet = "UnsignedInt a = Utility::Endianness::bigEndian(0x12345678u);\n";
    assert_eq!(elide(snippet).unwrap(), snippet);
}

#[test]
fn fails_on_marker_left_open() {
    let snippet = "int a = DOXYGEN_IGNORE(compute(1, 2);\nint b = 3;\n";
    let err = elide(snippet).unwrap_err();
    assert!(matches!(err, ElideError::Unbalanced { line: 1, column: 9, .. }));
    let message = err.to_string();
    assert!(message.contains("unmatched DOXYGEN_IGNORE()"));
    assert!(message.contains("int b = 3;"));
}

#[test]
fn elided_snippet_compiles_shape_with_passthrough_define() {
    // The passthrough define leaves the marker's arguments in place, the
    // elider removes them; both views keep the surrounding code intact.
    let spec = MarkerSpec::default();
    let snippet = "return DOXYGEN_IGNORE(value) + 1;";
    assert_eq!(spec.passthrough_define(), "#define DOXYGEN_IGNORE(...) __VA_ARGS__");
    assert_eq!(elide(snippet).unwrap(), "return … + 1;");
}
