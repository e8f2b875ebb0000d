use crate::text::stopwords::is_stopword;

/// Curly/smart quote variants that must be treated as punctuation even though
/// they fall outside the ASCII range.
const SMART_QUOTES: [char; 4] = ['\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

#[inline]
fn is_strippable(ch: char) -> bool {
    ch.is_numeric() || ch.is_ascii_punctuation() || SMART_QUOTES.contains(&ch)
}

/// Normalizes raw review text.
///
/// Order matters: lowercasing and digit/punctuation deletion happen first so
/// that stopword matching runs on bare lowercase tokens. Whitespace runs
/// collapse to a single space. No stemming. Pure function; applying it to an
/// already-clean string returns the string unchanged.
pub fn clean(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    for ch in text.chars() {
        if is_strippable(ch) {
            continue;
        }
        for lc in ch.to_lowercase() {
            stripped.push(lc);
        }
    }

    let mut out = String::with_capacity(stripped.len());
    for token in stripped.split_whitespace() {
        if is_stopword(token) {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// `clean` followed by whitespace splitting; the token sequence every
/// downstream component consumes.
pub fn tokenize(text: &str) -> Vec<String> {
    clean(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
