//! Tests for the Markdown renderer

use rdm_domain::{Block, Document, ListItem, ListKind};
use rdm_providers::{MarkdownRenderer, MarkupParser, RdocMarkupParser, RdocToMarkdown};

fn convert(text: &str) -> String {
    let document = RdocMarkupParser::new().parse(text);
    RdocToMarkdown::new().render(&document)
}

#[test]
fn test_single_paragraph() {
    assert_eq!(convert("Does widget things."), "Does widget things.\n");
}

#[test]
fn test_empty_document_renders_nothing() {
    assert_eq!(RdocToMarkdown::new().render(&Document::default()), "");
}

#[test]
fn test_blocks_are_separated_by_blank_line() {
    assert_eq!(convert("= Set\n\nA collection."), "# Set\n\nA collection.\n");
}

#[test]
fn test_heading_level() {
    let document = Document::new(vec![Block::Heading {
        level: 3,
        text: "Usage".to_string(),
    }]);
    assert_eq!(RdocToMarkdown::new().render(&document), "### Usage\n");
}

#[test]
fn test_verbatim_is_fenced() {
    assert_eq!(
        convert("Example:\n\n  s = Set.new\n  s << 1"),
        "Example:\n\n```\ns = Set.new\ns << 1\n```\n"
    );
}

#[test]
fn test_rule() {
    assert_eq!(convert("---"), "---\n");
}

#[test]
fn test_tight_bullet_list() {
    assert_eq!(convert("* one\n* two"), "* one\n* two\n");
}

#[test]
fn test_numbered_list_counts_from_one() {
    assert_eq!(convert("3. first\n7. second"), "1. first\n2. second\n");
}

#[test]
fn test_loose_list_item_indents_continuation() {
    let document = Document::new(vec![Block::List {
        kind: ListKind::Bullet,
        items: vec![ListItem::new(vec![
            Block::Paragraph("Intro".to_string()),
            Block::Verbatim("code".to_string()),
        ])],
    }]);
    assert_eq!(
        RdocToMarkdown::new().render(&document),
        "* Intro\n\n  ```\n  code\n  ```\n"
    );
}

#[test]
fn test_note_list_renders_definitions() {
    assert_eq!(
        convert("name:: The name.\nsize:: The size."),
        "name\n:   The name.\n\nsize\n:   The size.\n"
    );
}

#[test]
fn test_label_without_body_is_term_only() {
    let document = Document::new(vec![Block::List {
        kind: ListKind::Label,
        items: vec![ListItem::labelled("+flag+", Vec::new())],
    }]);
    assert_eq!(RdocToMarkdown::new().render(&document), "`flag`\n");
}

#[test]
fn test_inline_markup_in_paragraphs_and_headings() {
    assert_eq!(
        convert("== The +each+ method\n\nYields *every* element."),
        "## The `each` method\n\nYields **every** element.\n"
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let text = "= Title\n\n* a\n* b\n\n  code";
    assert_eq!(convert(text), convert(text));
}
