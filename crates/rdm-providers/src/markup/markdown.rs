//! Markdown renderer for parsed RDoc documents

use crate::constants::{CODE_FENCE, DEFINITION_INDENT};
use crate::markup::inline::convert_inline;
use rdm_domain::ports::MarkdownRenderer;
use rdm_domain::{Block, Document, ListItem, ListKind};

const BULLET_MARKER: &str = "* ";
const DEFINITION_MARKER: &str = ":   ";

/// Renders [`Document`]s as CommonMark
#[derive(Debug, Clone, Copy, Default)]
pub struct RdocToMarkdown;

impl RdocToMarkdown {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }
}

impl MarkdownRenderer for RdocToMarkdown {
    fn render(&self, document: &Document) -> String {
        if document.is_empty() {
            return String::new();
        }
        let mut out = render_blocks(&document.blocks);
        out.push('\n');
        out
    }
}

fn render_blocks(blocks: &[Block]) -> String {
    blocks.iter().map(render_block).collect::<Vec<_>>().join("\n\n")
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            format!("{} {}", "#".repeat(usize::from(*level)), convert_inline(text))
        }
        Block::Paragraph(text) => convert_inline(text),
        Block::Verbatim(text) => format!("{CODE_FENCE}\n{text}\n{CODE_FENCE}"),
        Block::Rule => "---".to_string(),
        Block::List { kind, items } => render_list(*kind, items),
    }
}

fn render_list(kind: ListKind, items: &[ListItem]) -> String {
    let rendered: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(index, item)| match kind {
            ListKind::Bullet => marked_item(BULLET_MARKER, item),
            ListKind::Number => marked_item(&format!("{}. ", index + 1), item),
            ListKind::Label | ListKind::Note => definition_item(item),
        })
        .collect();

    let tight = matches!(kind, ListKind::Bullet | ListKind::Number)
        && rendered.iter().all(|item| !item.contains('\n'));
    rendered.join(if tight { "\n" } else { "\n\n" })
}

fn marked_item(marker: &str, item: &ListItem) -> String {
    let body = render_blocks(&item.blocks);
    let indent = " ".repeat(marker.len());
    format!("{marker}{}", indent_continuation(&body, &indent))
}

fn definition_item(item: &ListItem) -> String {
    let term = convert_inline(item.label.as_deref().unwrap_or_default());
    if item.blocks.is_empty() {
        return term;
    }
    let body = render_blocks(&item.blocks);
    format!(
        "{term}\n{DEFINITION_MARKER}{}",
        indent_continuation(&body, DEFINITION_INDENT)
    )
}

/// Indent every non-empty line after the first
fn indent_continuation(body: &str, indent: &str) -> String {
    body.lines()
        .enumerate()
        .map(|(index, line)| {
            if index == 0 || line.is_empty() {
                line.to_string()
            } else {
                format!("{indent}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
