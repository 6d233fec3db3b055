//! Character set sniffing for raw HTML bytes.
//!
//! Only the first kilobyte is inspected, where `<meta charset>` and the
//! `http-equiv` content-type declaration must appear.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

const SNIFF_LEN: usize = 1024;

/// `<meta charset=...>` or `<meta http-equiv=content-type content="...; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?\bcharset\s*=\s*["']?\s*([A-Za-z0-9._:-]+)"#).expect("valid regex")
});

/// Encoding declared in the document head, if recognized.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    let label = META_CHARSET_RE.captures(&head)?.get(1)?.as_str().to_owned();
    Encoding::for_label(label.as_bytes())
}

/// Decode HTML bytes to a UTF-8 string.
///
/// A byte-order mark wins over the declared charset; without either the
/// input is treated as UTF-8. Malformed sequences become U+FFFD.
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let declared = sniff_encoding(html).unwrap_or(UTF_8);
    let (decoded, used, had_errors) = declared.decode(html);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced malformed byte sequences");
    }
    decoded.into_owned()
}
