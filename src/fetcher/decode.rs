use chrono::Utc;
use encoding_rs::Encoding;
use regex::Regex;
use reqwest::StatusCode;
use std::sync::LazyLock;
use tracing::warn;
use url::Url;

use crate::fetcher::types::Page;

/// How far into the body we look for a `<meta>` charset declaration.
const SNIFF_LEN: usize = 4096;

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

pub fn decode_page(url_final: Url, status: StatusCode, content_type: &str, body: &[u8]) -> Page {
    let encoding = detect_encoding(content_type, body);
    let (decoded, _, had_errors) = encoding.decode(body);

    if had_errors {
        warn!(
            url = %url_final,
            encoding = encoding.name(),
            "page contained malformed byte sequences; replaced during decoding"
        );
    }

    Page {
        url_final,
        status,
        content_type: content_type.to_string(),
        encoding,
        body: decoded.into_owned(),
        fetched_at: Utc::now(),
    }
}

/// Resolve the page encoding: header, then in-document `<meta>`, then heuristics.
pub fn detect_encoding(content_type: &str, body: &[u8]) -> &'static Encoding {
    if let Some(encoding) = label_from(&CHARSET_REGEX, content_type) {
        return encoding;
    }

    let head = &body[..body.len().min(SNIFF_LEN)];
    let head_str = String::from_utf8_lossy(head);

    for regex in [&*META_CHARSET_REGEX, &*META_HTTP_EQUIV_REGEX] {
        if let Some(encoding) = label_from(regex, &head_str) {
            return encoding;
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, body.len() <= SNIFF_LEN);
    detector.guess(None, true)
}

fn label_from(regex: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = regex.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_from_content_type() {
        let body = b"<html><head><title>Test</title></head></html>";

        let encoding = detect_encoding("text/html; charset=utf-8", body);
        assert_eq!(encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn test_encoding_from_meta_tag() {
        let body = b"<html><head><meta charset=\"iso-8859-1\"><title>Test</title></head></html>";

        // encoding_rs maps ISO-8859-1 onto its windows-1252 superset
        let encoding = detect_encoding("text/html", body);
        assert_eq!(encoding, encoding_rs::WINDOWS_1252);
    }

    #[test]
    fn test_encoding_from_meta_http_equiv() {
        let body = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=shift_jis\"><title>Test</title></head></html>";

        let encoding = detect_encoding("text/html", body);
        assert_eq!(encoding, encoding_rs::SHIFT_JIS);
    }

    #[test]
    fn test_header_wins_over_meta() {
        let body = b"<html><head><meta charset=\"windows-1252\"></head></html>";

        let encoding = detect_encoding("text/html; charset=UTF-8", body);
        assert_eq!(encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn test_decode_latin1_page() {
        let body = b"<html><body><p>caf\xe9</p></body></html>";
        let page = decode_page(
            Url::parse("https://example.com").unwrap(),
            StatusCode::OK,
            "text/html; charset=windows-1252",
            body,
        );

        assert!(page.body.contains("café"));
        assert_eq!(page.encoding, encoding_rs::WINDOWS_1252);
    }

    #[test]
    fn test_decode_replaces_invalid_utf8() {
        let body = b"<p>ok \xff\xfe done</p>";
        let page = decode_page(
            Url::parse("https://example.com").unwrap(),
            StatusCode::OK,
            "text/html; charset=utf-8",
            body,
        );

        assert!(page.body.starts_with("<p>ok "));
        assert!(page.body.contains('\u{FFFD}'));
    }
}
