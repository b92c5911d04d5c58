//! Tests for inline markup conversion

use rdm_providers::markup::convert_inline;

#[test]
fn test_plus_code() {
    assert_eq!(convert_inline("Call +to_s+ on it"), "Call `to_s` on it");
}

#[test]
fn test_tt_and_code_tags() {
    assert_eq!(
        convert_inline("Use <tt>Set.new</tt> or <code>Set[]</code>."),
        "Use `Set.new` or `Set[]`."
    );
}

#[test]
fn test_code_spans_are_not_reformatted() {
    assert_eq!(convert_inline("<tt>*args</tt> and <tt>a_b_c</tt>"), "`*args` and `a_b_c`");
}

#[test]
fn test_bold_and_emphasis() {
    assert_eq!(convert_inline("*bold* and _em_"), "**bold** and *em*");
    assert_eq!(convert_inline("<b>strong</b> <em>soft</em> <i>tilted</i>"), "**strong** *soft* *tilted*");
}

#[test]
fn test_plain_text_untouched() {
    assert_eq!(convert_inline("snake_case_name"), "snake_case_name");
    assert_eq!(convert_inline("a + b + c"), "a + b + c");
    assert_eq!(convert_inline("2 * 3 * 4"), "2 * 3 * 4");
}

#[test]
fn test_brace_link() {
    assert_eq!(
        convert_inline("See {the manual}[https://ruby-lang.org]."),
        "See [the manual](https://ruby-lang.org)."
    );
}

#[test]
fn test_word_link() {
    assert_eq!(
        convert_inline("RDoc[https://ruby.github.io/rdoc] docs"),
        "[RDoc](https://ruby.github.io/rdoc) docs"
    );
}

#[test]
fn test_relative_link_drops_scheme() {
    assert_eq!(convert_inline("{Guide}[link:guide.html]"), "[Guide](guide.html)");
}
