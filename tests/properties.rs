use proptest::{collection::vec, prelude::*};
use tagtree::{Attributes, Element};

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}"
}

// Values are trimmed on the way in, so generate them pre-trimmed
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9<>&;#\"'=/ \t\néüß\u{a0}]{0,12}".prop_map(|s| s.trim().to_string())
}

// Raw document text: entity references, whitespace, and non-ASCII, but no markup
fn source_value_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-zA-Z0-9=/ \t\néüß\u{a0}]{1,4}",
        Just("&amp;".to_string()),
        Just("&lt;".to_string()),
        Just("&gt;".to_string()),
        Just("&quot;".to_string()),
        Just("&nbsp;".to_string()),
        Just("&#32;".to_string()),
        Just("&#10;".to_string()),
        Just("&#xe9;".to_string()),
    ];
    vec(piece, 0..6).prop_map(|pieces| pieces.concat())
}

fn source_strategy() -> impl Strategy<Value = String> {
    let leaf = (name_strategy(), source_value_strategy(), source_value_strategy())
        .prop_map(|(name, attr, text)| format!(r#"<{name} k="{attr}">{text}</{name}>"#));

    (name_strategy(), source_value_strategy(), vec(leaf, 0..4)).prop_map(
        |(name, attr, children)| format!(r#"<{name} k="{attr}">{}</{name}>"#, children.concat()),
    )
}

fn attributes_strategy() -> impl Strategy<Value = Attributes> {
    vec((name_strategy(), value_strategy()), 0..4)
        .prop_map(|pairs| pairs.into_iter().collect::<Attributes>())
}

fn element_strategy() -> impl Strategy<Value = Element> {
    let leaf = (name_strategy(), attributes_strategy(), value_strategy()).prop_map(
        |(name, attributes, text)| Element {
            name,
            attributes,
            text,
            children: vec![],
        },
    );

    leaf.prop_recursive(4, 32, 4, |inner| {
        (name_strategy(), attributes_strategy(), vec(inner, 1..4)).prop_map(
            |(name, attributes, children)| Element {
                name,
                attributes,
                text: String::new(),
                children,
            },
        )
    })
}

proptest! {
    #[test]
    fn test_compact_round_trip(element in element_strategy()) {
        let xml = element.render(false).unwrap();
        let reparsed = tagtree::parse(&xml);
        prop_assert_eq!(reparsed, Some(element));
    }

    #[test]
    fn test_pretty_round_trip(element in element_strategy()) {
        let xml = element.render(true).unwrap();
        let reparsed = tagtree::parse(&xml);
        prop_assert_eq!(reparsed, Some(element));
    }

    #[test]
    fn test_parsed_document_round_trip(src in source_strategy()) {
        let parsed = tagtree::parse(&src);
        prop_assert!(parsed.is_some());
        let parsed = parsed.unwrap();

        for pretty in [false, true] {
            let xml = parsed.render(pretty).unwrap();
            let reparsed = tagtree::parse(&xml);
            prop_assert_eq!(reparsed.as_ref(), Some(&parsed));
        }
    }

    #[test]
    fn test_scanning_never_panics(text in "[<>/a-z=\"' ]{0,40}") {
        let _ = tagtree::parse(&text);
    }
}
