// crates/code_filters/tests/integration_test.rs

use code_filters::{apply_pre_filter, FilterRegistry, MarkerElideFilter, SnippetFilter};
use marker_elider::MarkerSpec;
use pretty_assertions::assert_eq;

#[test]
fn integration_default_registry_filters_cpp_snippet() {
    let snippet = r#"Utility::Arguments args;
args.addArgument("input")
    .setHelp("input", DOXYGEN_IGNORE("the input file"))
    .parse(argc, argv);"#;
    let expected = r#"Utility::Arguments args;
args.addArgument("input")
    .setHelp("input", …)
    .parse(argc, argv);"#;
    assert_eq!(apply_pre_filter("C++", snippet).unwrap(), expected);
}

#[test]
fn integration_custom_registry_from_multiple_specs() {
    let mut registry = FilterRegistry::new();
    registry.register("C++", Box::new(MarkerElideFilter::default()));
    registry.register(
        "GLSL",
        Box::new(MarkerElideFilter::new(
            MarkerSpec::new("ELIDE(", '(', ')', '…').unwrap(),
        )),
    );

    assert_eq!(
        registry.apply("GLSL", "color = ELIDE(texture(s, uv)).rgb;").unwrap(),
        "color = ….rgb;"
    );
    // GLSL snippets do not know about the C++ marker.
    assert_eq!(
        registry.apply("GLSL", "DOXYGEN_IGNORE(x)").unwrap(),
        "DOXYGEN_IGNORE(x)"
    );
    let filter = registry.get("GLSL").expect("GLSL filter registered");
    assert_eq!(filter.name(), "ELIDE");
}

#[test]
fn integration_registry_is_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                apply_pre_filter("C++", &format!("f(DOXYGEN_IGNORE({}), {})", i, i)).unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("f(…, {})", i));
    }
}
