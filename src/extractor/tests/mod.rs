use std::fs;

use crate::extractor::{ExtractError, clean_text, extract_article, extract_body, extract_title};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

#[test]
fn test_extract_article_fixture() {
    let html = fixture("article.html");

    let extracted = extract_article(&html).unwrap();

    assert_eq!(extracted.title, "Sample Article");
    assert_eq!(
        extracted.content,
        "This is the first paragraph of the article. It wraps across lines. \
         [Image: A sample chart] Figure 1 Background This is the second paragraph, \
         with a link and some emphasis. Final note."
    );
}

#[test]
fn test_fixture_drops_page_chrome() {
    let html = fixture("article.html");

    let extracted = extract_article(&html).unwrap();

    assert!(!extracted.content.contains("World"));
    assert!(!extracted.content.contains("trackPageView"));
    assert!(!extracted.content.contains("All rights reserved"));
    assert!(!extracted.content.contains("window.dataLayer"));
    assert!(!extracted.content.contains('<'));
}

#[test]
fn test_fixture_without_headline() {
    let html = fixture("no-headline.html");

    assert_eq!(extract_article(&html), Err(ExtractError::TitleNotFound));
    // the body itself is still there
    assert!(extract_body(&html).is_ok());
}

#[test]
fn test_minimal_page_end_to_end() {
    let html = "<html><body><h1>My Title</h1><p>Hello <b>world</b></p></body></html>";

    let extracted = extract_article(html).unwrap();

    assert_eq!(extracted.title, "My Title");
    assert_eq!(extracted.content, "Hello world");
}

#[test]
fn test_missing_body() {
    let html = "<h1>Title</h1>";

    assert_eq!(extract_title(html), Ok("Title"));
    assert_eq!(extract_article(html), Err(ExtractError::BodyNotFound));
}

#[test]
fn test_body_with_only_headline_is_empty() {
    let html = "<html><body><h1>Title</h1><script>x()</script></body></html>";

    assert_eq!(extract_article(html), Err(ExtractError::EmptyContent));
}

#[test]
fn test_headline_keeps_nested_markup() {
    let html = "<html><body><h1><a href=\"/a\">Linked</a> title</h1><p>Text</p></body></html>";

    let extracted = extract_article(html).unwrap();

    assert_eq!(extracted.title, "<a href=\"/a\">Linked</a> title");
    assert_eq!(extracted.content, "Text");
}

#[test]
fn test_script_text_never_survives() {
    let html = "<p>before</p><script>const token = 'abc123';</script><p>after</p>";

    let text = clean_text(html);

    assert_eq!(text, "before after");
    assert!(!text.contains("abc123"));
}

#[test]
fn test_idempotence_holds_only_for_markup_free_text() {
    let plain = "a b, c! d?";
    assert_eq!(clean_text(plain), plain);
    assert_eq!(clean_text(&clean_text(plain)), clean_text(plain));

    let escaped = "a &lt;b&gt; c";
    let once = clean_text(escaped);
    assert_eq!(once, "a <b> c");
    assert_eq!(clean_text(&once), "a c");
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = extract_article(&html);
        }

        #[test]
        fn test_clean_output_is_single_line(html in ".*") {
            let text = clean_text(&html);
            prop_assert!(!text.contains('\n'));
            prop_assert!(!text.contains("  "));
            prop_assert_eq!(text.trim(), text.as_str());
        }

        #[test]
        fn test_clean_is_idempotent(words in prop::collection::vec("[a-zA-Z0-9.,!?]{1,12}", 0..40)) {
            let normalized = words.join(" ");
            let once = clean_text(&normalized);
            prop_assert_eq!(&once, &normalized);
            prop_assert_eq!(clean_text(&once), once.clone());
        }

        #[test]
        fn test_whitespace_runs_collapse(
            words in prop::collection::vec("[a-z]{1,8}", 1..20),
            gaps in prop::collection::vec("[ \t\n\r]{1,5}", 1..20),
        ) {
            let mut markup = String::new();
            for (i, word) in words.iter().enumerate() {
                markup.push_str(word);
                markup.push_str(&gaps[i % gaps.len()]);
            }
            prop_assert_eq!(clean_text(&markup), words.join(" "));
        }
    }
}
