#![no_main]

use libfuzzer_sys::fuzz_target;

use pagebrief::extractor::{clean_text, extract_article};

fuzz_target!(|data: &[u8]| {
    let markup = String::from_utf8_lossy(data);

    // Neither stage may panic, whatever the input
    let _ = extract_article(&markup);

    let text = clean_text(&markup);
    assert!(!text.contains('\n'));
    assert!(!text.contains("  "));
});
