//! Declaration comments
//!
//! tree-sitter reports every `#` line and every `=begin`/`=end` block as a
//! separate `comment` node. [`CommentIndex`] keeps the standalone ones (the
//! only thing on their line) keyed by the row they end on, so the block
//! above a declaration is found by walking upwards row by row until a gap.

use crate::constants::{
    BLOCK_COMMENT_BEGIN, BLOCK_COMMENT_END, ENCODING_COMMENT_KEYS, ENCODING_COMMENT_LAST_ROW,
    HIDDEN_SECTION_END, HIDDEN_SECTION_START, MAGIC_COMMENT_KEYS, NODE_COMMENT, TAB_WIDTH,
};
use std::collections::HashMap;
use tree_sitter::Node;

#[derive(Debug, Clone)]
struct CommentNode {
    start_row: usize,
    text: String,
}

/// Standalone comments of one file, indexed by the row they end on
#[derive(Debug, Default)]
pub struct CommentIndex {
    by_end_row: HashMap<usize, CommentNode>,
}

impl CommentIndex {
    /// Collect every standalone comment below `root`
    ///
    /// Magic comments are only recognised in the leading comment section,
    /// before the first line of code.
    pub fn build(root: Node<'_>, source: &str) -> Self {
        let mut cursor = root.walk();
        let first_code_row = root
            .named_children(&mut cursor)
            .find(|node| node.kind() != NODE_COMMENT)
            .map_or(usize::MAX, |node| node.start_position().row);

        let mut index = Self::default();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if node.kind() == NODE_COMMENT {
                index.insert(node, source, first_code_row);
                continue;
            }
            let mut cursor = node.walk();
            stack.extend(node.named_children(&mut cursor));
        }
        index
    }

    /// Number of indexed comments
    pub fn len(&self) -> usize {
        self.by_end_row.len()
    }

    /// True when the file has no standalone comments
    pub fn is_empty(&self) -> bool {
        self.by_end_row.is_empty()
    }

    /// Normalised comment block ending on the row above `row`
    ///
    /// Empty when the line above is blank, code, or a magic comment.
    pub fn comment_above(&self, row: usize) -> String {
        let mut blocks = Vec::new();
        let mut next_row = row;
        while next_row > 0 {
            let Some(comment) = self.by_end_row.get(&(next_row - 1)) else {
                break;
            };
            blocks.push(comment.text.as_str());
            next_row = comment.start_row;
        }
        blocks.reverse();
        normalize_comment(&blocks)
    }

    fn insert(&mut self, node: Node<'_>, source: &str, first_code_row: usize) {
        let Some(text) = source.get(node.byte_range()) else {
            return;
        };
        let start_row = node.start_position().row;
        if !is_standalone(source, node.start_byte())
            || (start_row < first_code_row && is_directive(text, start_row))
        {
            return;
        }

        let end = node.end_position();
        // block comments may end just past their trailing newline
        let end_row = if end.column == 0 && end.row > start_row {
            end.row - 1
        } else {
            end.row
        };
        self.by_end_row.insert(
            end_row,
            CommentNode {
                start_row,
                text: text.to_string(),
            },
        );
    }
}

/// Turn raw comment node texts into documentation text
///
/// Hidden `--` ... `++` sections are dropped before the block is flushed
/// left, so their markers never pin the margin.
pub fn normalize_comment(raw: &[&str]) -> String {
    let mut lines = Vec::new();
    for text in raw {
        if text.starts_with(BLOCK_COMMENT_BEGIN) {
            lines.extend(
                text.lines()
                    .skip(1)
                    .take_while(|line| !line.starts_with(BLOCK_COMMENT_END))
                    .map(expand_tabs),
            );
        } else {
            lines.extend(
                text.lines()
                    .map(|line| expand_tabs(line.trim_start().trim_start_matches('#'))),
            );
        }
    }

    let lines = flush_left(remove_hidden_sections(lines));
    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
    lines[start..end].join("\n")
}

fn is_standalone(source: &str, start_byte: usize) -> bool {
    source
        .get(..start_byte)
        .and_then(|before| before.rsplit('\n').next())
        .is_some_and(|prefix| prefix.trim().is_empty())
}

/// Shebangs and magic comments such as `# frozen_string_literal: true`
///
/// `row` is the 0-based line of the comment, which must already be known
/// to sit in the leading comment section.
fn is_directive(text: &str, row: usize) -> bool {
    if text.starts_with("#!") {
        return row == 0;
    }
    if text.starts_with(BLOCK_COMMENT_BEGIN) {
        return false;
    }
    let body = text.trim_start_matches('#').trim();
    if body.starts_with("-*-") && body.ends_with("-*-") {
        return true;
    }
    let Some((key, value)) = body.split_once(':') else {
        return false;
    };
    // `key:: text` is a note list item
    if value.starts_with(':') {
        return false;
    }
    let key = key.trim().to_ascii_lowercase().replace('-', "_");
    if ENCODING_COMMENT_KEYS.contains(&key.as_str()) {
        return row <= ENCODING_COMMENT_LAST_ROW;
    }
    MAGIC_COMMENT_KEYS.contains(&key.as_str())
}

fn expand_tabs(line: &str) -> String {
    let mut expanded = String::with_capacity(line.len());
    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_WIDTH - expanded.chars().count() % TAB_WIDTH;
            expanded.extend(std::iter::repeat_n(' ', pad));
        } else {
            expanded.push(c);
        }
    }
    expanded.trim_end().to_string()
}

fn flush_left(lines: Vec<String>) -> Vec<String> {
    let margin = lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);
    lines
        .into_iter()
        .map(|line| line.get(margin..).unwrap_or_default().to_string())
        .collect()
}

fn remove_hidden_sections(lines: Vec<String>) -> Vec<String> {
    let mut hidden = false;
    lines
        .into_iter()
        .filter(|line| {
            let trimmed = line.trim();
            if !hidden && trimmed == HIDDEN_SECTION_START {
                hidden = true;
                return false;
            }
            if hidden && trimmed == HIDDEN_SECTION_END {
                hidden = false;
                return false;
            }
            !hidden
        })
        .collect()
}
