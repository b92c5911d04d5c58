//! Inline RDoc markup to Markdown
//!
//! Code spans are produced first; every other rule only touches text
//! outside of backtick spans so code is never reformatted.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static TT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<(tt|code)>(.*?)</(?:tt|code)>").expect("Invalid regex"));
static PLUS_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^\w+\\])\+([^\s+]+)\+\B").expect("Invalid regex"));
static BOLD_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<b>(.*?)</b>").expect("Invalid regex"));
static EM_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<(em|i)>(.*?)</(?:em|i)>").expect("Invalid regex"));
static BOLD_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^\w*\\])\*([^\s*]+)\*\B").expect("Invalid regex"));
static EM_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^\w\\])_([^\s_]+)_\b").expect("Invalid regex"));
static BRACE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}\[([^\]\s]+)\]").expect("Invalid regex"));
static WORD_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\w.-]+)\[((?:https?|ftp|mailto|link|rdoc-ref):[^\]\s]+)\]").expect("Invalid regex")
});

/// Convert one line of RDoc inline markup to Markdown
pub fn convert_inline(text: &str) -> String {
    let text = TT_TAG.replace_all(text, "`$2`");
    let text = PLUS_CODE.replace_all(&text, "$1`$2`");

    // even-indexed pieces sit outside backtick spans
    text.split('`')
        .enumerate()
        .map(|(index, piece)| {
            if index % 2 == 0 {
                convert_prose(piece)
            } else {
                piece.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("`")
}

fn convert_prose(text: &str) -> String {
    let text = BRACE_LINK.replace_all(text, |caps: &Captures<'_>| link(&caps[1], &caps[2]));
    let text = WORD_LINK.replace_all(&text, |caps: &Captures<'_>| link(&caps[1], &caps[2]));
    let text = BOLD_TAG.replace_all(&text, "**$1**");
    let text = BOLD_WORD.replace_all(&text, "$1**$2**");
    let text = EM_TAG.replace_all(&text, "*$2*");
    let text = EM_WORD.replace_all(&text, "$1*$2*");
    text.into_owned()
}

fn link(label: &str, target: &str) -> String {
    let target = target.strip_prefix("link:").unwrap_or(target);
    format!("[{label}]({target})")
}
