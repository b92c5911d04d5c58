//! Tests for the RDoc markup parser

use rdm_domain::{Block, ListItem, ListKind};
use rdm_providers::{MarkupParser, RdocMarkupParser};

fn parse(text: &str) -> Vec<Block> {
    RdocMarkupParser::new().parse(text).blocks
}

fn paragraph(text: &str) -> Block {
    Block::Paragraph(text.to_string())
}

#[test]
fn test_paragraph_lines_are_joined() {
    assert_eq!(parse("Does widget\nthings."), vec![paragraph("Does widget things.")]);
}

#[test]
fn test_blank_lines_split_paragraphs() {
    assert_eq!(parse("One.\n\nTwo."), vec![paragraph("One."), paragraph("Two.")]);
}

#[test]
fn test_empty_text_is_empty_document() {
    assert!(RdocMarkupParser::new().parse("").is_empty());
    assert!(RdocMarkupParser::new().parse("\n  \n").is_empty());
}

#[test]
fn test_headings() {
    assert_eq!(
        parse("= Title\n== Section\n\nBody"),
        vec![
            Block::Heading {
                level: 1,
                text: "Title".to_string()
            },
            Block::Heading {
                level: 2,
                text: "Section".to_string()
            },
            paragraph("Body"),
        ]
    );
}

#[test]
fn test_too_deep_heading_is_text() {
    assert_eq!(parse("======= deep"), vec![paragraph("======= deep")]);
}

#[test]
fn test_rule() {
    assert_eq!(parse("Above\n\n---\n\nBelow"), vec![paragraph("Above"), Block::Rule, paragraph("Below")]);
}

#[test]
fn test_verbatim_keeps_relative_indentation() {
    assert_eq!(
        parse("Example:\n\n  set = Set.new\n    set << 1\n\nAfter"),
        vec![
            paragraph("Example:"),
            Block::Verbatim("set = Set.new\n  set << 1".to_string()),
            paragraph("After"),
        ]
    );
}

#[test]
fn test_verbatim_keeps_inner_blank_lines() {
    assert_eq!(
        parse("  a = 1\n\n  b = 2\n"),
        vec![Block::Verbatim("a = 1\n\nb = 2".to_string())]
    );
}

#[test]
fn test_bullet_list() {
    assert_eq!(
        parse("* one\n* two\n- three"),
        vec![Block::List {
            kind: ListKind::Bullet,
            items: vec![
                ListItem::new(vec![paragraph("one")]),
                ListItem::new(vec![paragraph("two")]),
                ListItem::new(vec![paragraph("three")]),
            ],
        }]
    );
}

#[test]
fn test_list_item_continuation() {
    assert_eq!(
        parse("* one\n  continued\n* two"),
        vec![Block::List {
            kind: ListKind::Bullet,
            items: vec![
                ListItem::new(vec![paragraph("one continued")]),
                ListItem::new(vec![paragraph("two")]),
            ],
        }]
    );
}

#[test]
fn test_blank_line_between_items_keeps_one_list() {
    let blocks = parse("1. first\n\n2. second");
    assert_eq!(
        blocks,
        vec![Block::List {
            kind: ListKind::Number,
            items: vec![
                ListItem::new(vec![paragraph("first")]),
                ListItem::new(vec![paragraph("second")]),
            ],
        }]
    );
}

#[test]
fn test_label_list() {
    assert_eq!(
        parse("[foo] The foo.\n[bar] The bar."),
        vec![Block::List {
            kind: ListKind::Label,
            items: vec![
                ListItem::labelled("foo", vec![paragraph("The foo.")]),
                ListItem::labelled("bar", vec![paragraph("The bar.")]),
            ],
        }]
    );
}

#[test]
fn test_note_list_with_indented_body() {
    assert_eq!(
        parse("verbose::\n  Print more output.\nquiet:: Print nothing."),
        vec![Block::List {
            kind: ListKind::Note,
            items: vec![
                ListItem::labelled("verbose", vec![paragraph("Print more output.")]),
                ListItem::labelled("quiet", vec![paragraph("Print nothing.")]),
            ],
        }]
    );
}

#[test]
fn test_qualified_names_are_not_notes() {
    assert_eq!(parse("Returns a Net::HTTP object."), vec![paragraph("Returns a Net::HTTP object.")]);
}

#[test]
fn test_paragraph_ends_at_list() {
    assert_eq!(
        parse("Options:\n* a"),
        vec![
            paragraph("Options:"),
            Block::List {
                kind: ListKind::Bullet,
                items: vec![ListItem::new(vec![paragraph("a")])],
            },
        ]
    );
}

#[test]
fn test_different_kinds_start_new_list() {
    let blocks = parse("* bullet\n1. number");
    assert_eq!(blocks.len(), 2);
    assert!(matches!(blocks[0], Block::List { kind: ListKind::Bullet, .. }));
    assert!(matches!(blocks[1], Block::List { kind: ListKind::Number, .. }));
}

#[test]
fn test_item_without_text_takes_body_from_indented_lines() {
    assert_eq!(
        parse("[path]\n  Where to read from.\n*   spaced bullet"),
        vec![
            Block::List {
                kind: ListKind::Label,
                items: vec![ListItem::labelled("path", vec![paragraph("Where to read from.")])],
            },
            Block::List {
                kind: ListKind::Bullet,
                items: vec![ListItem::new(vec![paragraph("spaced bullet")])],
            },
        ]
    );
}
