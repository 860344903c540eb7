// End-to-end flow: settings -> clipboard -> action -> write back
use cool_paster::actions::Action;
use cool_paster::clipboard::{paste_transformed, MemoryClipboard, TextClipboard};
use cool_paster::literal::LiteralType;
use cool_paster::settings::Settings;

#[test]
fn escape_then_unescape_through_clipboard() {
    let original = "line1\nline2 \"quoted\" ☺";
    let mut clipboard = MemoryClipboard::with_text(original);

    let escaped = paste_transformed(&mut clipboard, Action::Escape, LiteralType::Regular, true)
        .expect("escape");
    assert_eq!(escaped, "line1\\nline2 \\\"quoted\\\" \\u263A");

    let restored = paste_transformed(&mut clipboard, Action::Unescape, LiteralType::Regular, true)
        .expect("unescape");
    assert_eq!(restored, original);
    assert_eq!(clipboard.get_text().expect("text"), original);
}

#[test]
fn settings_drive_the_transform() {
    let settings = Settings::default().with_overrides(
        Some(Action::EscapeQuotes),
        Some(LiteralType::Verbatim),
        Some(false),
    );
    let mut clipboard = MemoryClipboard::with_text("C:\\temp\\\"x\".txt");

    let result = paste_transformed(
        &mut clipboard,
        settings.action,
        settings.literal,
        settings.write_back,
    )
    .expect("transform");

    assert_eq!(result, "@\"C:\\temp\\\"\"x\"\".txt\"");
    assert_eq!(clipboard.text(), Some("C:\\temp\\\"x\".txt"));
}

#[test]
fn unescape_trim_cleans_copied_literal() {
    let mut clipboard = MemoryClipboard::with_text("  \"{\\\"id\\\": 7}\"\n");

    let body = paste_transformed(&mut clipboard, Action::UnescapeTrim, LiteralType::Regular, true)
        .expect("unescape-trim");
    assert_eq!(body, "{\"id\": 7}");

    let pretty = paste_transformed(&mut clipboard, Action::Prettify, LiteralType::Regular, true)
        .expect("prettify");
    assert_eq!(pretty, "{\n  \"id\": 7\n}");
}
