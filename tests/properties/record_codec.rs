//! Property tests for the properties record codec.

use proptest::prelude::*;

use portalmod::infrastructure::repositories::properties::{parse, render, Properties};

fn text() -> impl Strategy<Value = String> {
    "(?s).{0,24}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: whatever is rendered parses back to the same map.
    #[test]
    fn property_render_parse_round_trip(
        entries in proptest::collection::btree_map(text(), text(), 0..8),
    ) {
        let props: Properties = entries;
        let rendered = render(&props, Some("header"));
        prop_assert!(rendered.is_ascii());
        prop_assert_eq!(parse(&rendered).unwrap(), props);
    }

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(content in "(?s).{0,512}") {
        let _ = parse(&content);
    }
}
