use scraper::{ElementRef, Html, Node};
use tracing::debug;

use crate::extractor::model::normalize_whitespace;

/// Subtrees that never carry article text.
const SKIPPED_TAGS: &[&str] = &["script", "style", "nav", "footer", "header"];

/// Elements that start on a new line.
const LEADING_BREAK_TAGS: &[&str] = &["p", "h1", "h2", "h3", "h4", "h5", "h6", "div"];

/// Elements followed by a line break.
const TRAILING_BREAK_TAGS: &[&str] = &["p", "br", "div"];

/// Turn body markup into a single line of readable text.
///
/// Scripts, styles and page chrome are dropped, images become
/// `[Image: <alt>]` placeholders and all whitespace is collapsed.
pub fn clean_text(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    if !fragment.errors.is_empty() {
        debug!(
            errors = fragment.errors.len(),
            "recovered from malformed markup"
        );
    }

    let mut buf = String::with_capacity(markup.len());
    collect_children(fragment.root_element(), &mut buf);

    normalize_whitespace(&buf)
}

fn collect_children(element: ElementRef<'_>, buf: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => buf.push_str(text),
            Node::Element(_) => {
                if let Some(child_ref) = ElementRef::wrap(child) {
                    collect_element(child_ref, buf);
                }
            }
            _ => {}
        }
    }
}

fn collect_element(element: ElementRef<'_>, buf: &mut String) {
    let tag = element.value().name();

    if SKIPPED_TAGS.contains(&tag) {
        return;
    }

    if tag == "img" {
        if let Some(alt) = element.value().attr("alt") {
            buf.push_str("[Image: ");
            buf.push_str(alt);
            buf.push(']');
        }
        return;
    }

    if LEADING_BREAK_TAGS.contains(&tag) {
        buf.push('\n');
    }

    collect_children(element, buf);

    if TRAILING_BREAK_TAGS.contains(&tag) {
        buf.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_markup_is_flattened() {
        assert_eq!(clean_text("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn test_skipped_subtrees() {
        let markup = r#"
            <header><a href="/">Home</a></header>
            <nav><ul><li>Menu</li></ul></nav>
            <p>Body text</p>
            <script>var secret = "tracking";</script>
            <style>p { color: red }</style>
            <footer>Copyright</footer>
        "#;

        let text = clean_text(markup);
        assert_eq!(text, "Body text");
        assert!(!text.contains("tracking"));
    }

    #[test]
    fn test_image_alt_placeholder() {
        let text = clean_text(r#"<p>Look: <img src="cat.jpg" alt="cat"> cute</p>"#);
        assert_eq!(text, "Look: [Image: cat] cute");
    }

    #[test]
    fn test_image_without_alt_is_dropped() {
        assert_eq!(clean_text(r#"<p>a<img src="x.png">b</p>"#), "ab");
    }

    #[test]
    fn test_block_elements_separate_words() {
        let text = clean_text("<div>one</div><div>two</div><p>three</p>four<br>five<h2>six</h2>");
        assert_eq!(text, "one two three four five six");
    }

    #[test]
    fn test_inline_elements_do_not_separate_words() {
        assert_eq!(clean_text("<span>un</span><em>broken</em>"), "unbroken");
    }

    #[test]
    fn test_whitespace_collapsed_to_single_line() {
        let text = clean_text("<p>  lots \t of\n\n   space  </p>\n\n<div>\tend </div>");
        assert_eq!(text, "lots of space end");
        assert!(!text.contains('\n'));
        assert!(!text.contains("  "));
    }

    #[test]
    fn test_entities_are_decoded() {
        assert_eq!(clean_text("<p>Fish &amp; chips</p>"), "Fish & chips");
    }

    #[test]
    fn test_comments_are_ignored() {
        assert_eq!(clean_text("<p>kept<!-- hidden --></p>"), "kept");
    }

    #[test]
    fn test_malformed_markup_is_not_fatal() {
        let text = clean_text("<p>Unclosed tags<div>More content");
        assert_eq!(text, "Unclosed tags More content");
    }

    #[test]
    fn test_plain_text_input() {
        assert_eq!(clean_text("just some words"), "just some words");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_clean_is_idempotent_on_clean_text() {
        let once = clean_text("<div><p>Alpha  beta</p><img alt=\"pic\"><p>gamma</p></div>");
        assert_eq!(clean_text(&once), once);
    }
}
