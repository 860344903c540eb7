// Property tests for the string literal codec
use cool_paster::literal::{escape, escape_utf16, unescape, unescape_utf16, LiteralType};
use proptest::prelude::*;

fn literal_types() -> impl Strategy<Value = LiteralType> {
    prop::sample::select(LiteralType::ALL.to_vec())
}

/// Regular 规则不转义反斜杠，含反斜杠的文本无法往返
fn round_trippable(text: String, literal: LiteralType) -> String {
    match literal {
        LiteralType::Regular | LiteralType::Interpolated => text.replace('\\', ""),
        LiteralType::Verbatim | LiteralType::InterpolatedVerbatim => text,
    }
}

proptest! {
    #[test]
    fn unescape_inverts_escape(text in any::<String>(), literal in literal_types()) {
        let text = round_trippable(text, literal);
        prop_assert_eq!(unescape(&escape(&text, literal), literal), text);
    }

    #[test]
    fn unescape_inverts_escape_on_code_units(
        units in prop::collection::vec(any::<u16>(), 0..64),
        literal in literal_types(),
    ) {
        let units: Vec<u16> = match literal {
            LiteralType::Regular | LiteralType::Interpolated => {
                units.into_iter().filter(|&u| u != u16::from(b'\\')).collect()
            }
            _ => units,
        };
        prop_assert_eq!(unescape_utf16(&escape_utf16(&units, literal), literal), units);
    }

    #[test]
    fn escape_never_shrinks(text in any::<String>(), literal in literal_types()) {
        let escaped = escape(&text, literal);
        prop_assert!(escaped.chars().count() >= text.chars().count());
    }

    #[test]
    fn regular_escape_output_is_ascii(text in any::<String>()) {
        prop_assert!(escape(&text, LiteralType::Regular).is_ascii());
    }

    #[test]
    fn plain_ascii_is_left_alone(text in "[a-zA-Z0-9 .,;:!?'()\\[\\]<>=+*/-]*", literal in literal_types()) {
        prop_assert_eq!(escape(&text, literal), text.clone());
        prop_assert_eq!(unescape(&text, literal), text);
    }

    #[test]
    fn unescape_never_panics(text in any::<String>(), literal in literal_types()) {
        let _ = unescape(&text, literal);
    }
}

#[test]
fn documented_examples() {
    assert_eq!(escape("a\"b", LiteralType::Verbatim), "a\"\"b");
    assert_eq!(escape("\n\t☺", LiteralType::Regular), "\\n\\t\\u263A");
    assert_eq!(unescape("\\uZZZZ", LiteralType::Regular), "\\uZZZZ");
    assert_eq!(unescape("\\u12", LiteralType::Regular), "\\u12");
    assert_eq!(escape("{x}\"", LiteralType::InterpolatedVerbatim), "{{x}}\"\"");
}

#[test]
fn csharp_source_snippet_roundtrip() {
    let snippet = "if (name == \"café\") {\r\n\tConsole.WriteLine($\"hi {name}\");\r\n}";

    let regular = escape(snippet, LiteralType::Regular);
    assert_eq!(
        regular,
        "if (name == \\\"caf\\u00E9\\\") {\\r\\n\\tConsole.WriteLine($\\\"hi {name}\\\");\\r\\n}"
    );
    assert_eq!(unescape(&regular, LiteralType::Regular), snippet);

    let interpolated = escape(snippet, LiteralType::Interpolated);
    assert!(interpolated.contains("{{name}}"));
    assert_eq!(unescape(&interpolated, LiteralType::Interpolated), snippet);
}
