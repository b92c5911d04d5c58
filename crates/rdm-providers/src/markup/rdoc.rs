//! RDoc markup parser
//!
//! Handles the block structure of RDoc comments: headings, rules, verbatim
//! text, lists and paragraphs. Indentation is significant: a line indented
//! past the current margin starts a verbatim block, and list item bodies
//! are the lines indented under the item marker.

use crate::constants::MAX_HEADING_LEVEL;
use rdm_domain::ports::MarkupParser;
use rdm_domain::{Block, Document, ListItem, ListKind};
use regex::Regex;
use std::sync::LazyLock;

static LABEL_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]]+)\](?:\s+(.*))?$").expect("Invalid regex"));
static NOTE_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S.*?)::(?:\s+(.*))?$").expect("Invalid regex"));
static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([*-])\s+(.*)$").expect("Invalid regex"));
static NUMBER_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.)\s+(.*)$").expect("Invalid regex"));

/// RDoc markup parser
#[derive(Debug, Clone, Copy, Default)]
pub struct RdocMarkupParser;

impl RdocMarkupParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }
}

impl MarkupParser for RdocMarkupParser {
    fn parse(&self, text: &str) -> Document {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        Document::new(parse_blocks(&lines))
    }
}

/// Start of a list item: kind, label, and the text after the marker
struct ItemStart<'a> {
    kind: ListKind,
    label: Option<&'a str>,
    text: &'a str,
    /// Column where the item text starts
    offset: usize,
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn heading(line: &str) -> Option<Block> {
    let level = line.len() - line.trim_start_matches('=').len();
    if level == 0 || level > usize::from(MAX_HEADING_LEVEL) {
        return None;
    }
    let text = line[level..].trim();
    if text.is_empty() {
        return None;
    }
    Some(Block::Heading {
        level: u8::try_from(level).unwrap_or(MAX_HEADING_LEVEL),
        text: text.to_string(),
    })
}

fn is_rule(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '-')
}

fn item_start(line: &str) -> Option<ItemStart<'_>> {
    let capture_end = |caps: &regex::Captures<'_>| {
        caps.get(2).map_or(line.len(), |m| m.start())
    };
    fn capture_text<'h>(caps: &regex::Captures<'h>) -> &'h str {
        caps.get(2).map_or("", |m| m.as_str())
    }

    if let Some(caps) = BULLET_ITEM.captures(line) {
        return Some(ItemStart {
            kind: ListKind::Bullet,
            label: None,
            text: capture_text(&caps),
            offset: capture_end(&caps),
        });
    }
    if let Some(caps) = NUMBER_ITEM.captures(line) {
        return Some(ItemStart {
            kind: ListKind::Number,
            label: None,
            text: capture_text(&caps),
            offset: capture_end(&caps),
        });
    }
    if let Some(caps) = LABEL_ITEM.captures(line) {
        return Some(ItemStart {
            kind: ListKind::Label,
            label: caps.get(1).map(|m| m.as_str()),
            text: capture_text(&caps),
            offset: capture_end(&caps),
        });
    }
    if let Some(caps) = NOTE_ITEM.captures(line) {
        return Some(ItemStart {
            kind: ListKind::Note,
            label: caps.get(1).map(|m| m.as_str()),
            text: capture_text(&caps),
            offset: capture_end(&caps),
        });
    }
    None
}

/// Parse lines whose margin is column 0
fn parse_blocks(lines: &[&str]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        if is_blank(line) {
            i += 1;
        } else if indent_of(line) > 0 {
            let (block, next) = verbatim(lines, i);
            blocks.push(block);
            i = next;
        } else if let Some(block) = heading(line) {
            blocks.push(block);
            i += 1;
        } else if is_rule(line) {
            blocks.push(Block::Rule);
            i += 1;
        } else if let Some(start) = item_start(line) {
            let (block, next) = list(lines, i, start.kind);
            blocks.push(block);
            i = next;
        } else {
            let (block, next) = paragraph(lines, i);
            blocks.push(block);
            i = next;
        }
    }

    blocks
}

fn verbatim(lines: &[&str], start: usize) -> (Block, usize) {
    let mut end = start;
    while end < lines.len() && (is_blank(lines[end]) || indent_of(lines[end]) > 0) {
        end += 1;
    }
    let body = &lines[start..end];
    let last = body.iter().rposition(|l| !is_blank(l)).map_or(0, |i| i + 1);
    let body = &body[..last];

    let margin = body
        .iter()
        .filter(|l| !is_blank(l))
        .map(|l| indent_of(l))
        .min()
        .unwrap_or(0);
    let text = body
        .iter()
        .map(|l| l.get(margin..).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n");

    (Block::Verbatim(text), end)
}

fn paragraph(lines: &[&str], start: usize) -> (Block, usize) {
    let mut parts = vec![lines[start].trim()];
    let mut end = start + 1;
    while end < lines.len() {
        let line = lines[end];
        if is_blank(line)
            || indent_of(line) > 0
            || heading(line).is_some()
            || is_rule(line)
            || item_start(line).is_some()
        {
            break;
        }
        parts.push(line.trim());
        end += 1;
    }
    (Block::Paragraph(parts.join(" ")), end)
}

/// Collect consecutive items of one kind into a list
fn list(lines: &[&str], start: usize, kind: ListKind) -> (Block, usize) {
    let mut items = Vec::new();
    let mut i = start;

    loop {
        let Some(item) = lines.get(i).and_then(|line| item_start(line)) else {
            break;
        };
        if item.kind != kind {
            break;
        }

        let mut body: Vec<String> = Vec::new();
        if !item.text.is_empty() {
            body.push(item.text.to_string());
        }
        let mut next = i + 1;
        let mut offset = None;
        while next < lines.len() {
            let line = lines[next];
            if is_blank(line) {
                let continues = lines[next + 1..]
                    .iter()
                    .find(|l| !is_blank(l))
                    .is_some_and(|l| indent_of(l) > 0);
                if !continues {
                    break;
                }
                body.push(String::new());
            } else if indent_of(line) > 0 {
                // first indented line fixes the body margin of note/label items
                let margin = *offset.get_or_insert_with(|| {
                    if item.text.is_empty() {
                        indent_of(line)
                    } else {
                        item.offset.min(indent_of(line))
                    }
                });
                let strip = margin.min(indent_of(line));
                body.push(line[strip..].to_string());
            } else {
                break;
            }
            next += 1;
        }

        let body_lines: Vec<&str> = body.iter().map(String::as_str).collect();
        let blocks = parse_blocks(&body_lines);
        items.push(match item.label {
            Some(label) => ListItem::labelled(label, blocks),
            None => ListItem::new(blocks),
        });

        i = next;
        while i < lines.len() && is_blank(lines[i]) {
            i += 1;
        }
    }

    (Block::List { kind, items }, i)
}
