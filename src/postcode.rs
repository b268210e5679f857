// src/postcode.rs

use once_cell::sync::Lazy;
use regex::Regex;

/// Outward code, optional whitespace, inward code. Matched against uppercased input.
static POSTCODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{1,2}[0-9][A-Z0-9]?\s*[0-9][A-Z]{2}$")
        .expect("postcode regex should compile")
});

/// A validated UK postcode split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPostcode {
    /// Alphabetic prefix of the outcode, e.g. "AB".
    pub area: String,
    /// Outward code, e.g. "AB10".
    pub outcode: String,
    /// Inward code, e.g. "1AA".
    pub incode: String,
    /// Compact normalized postcode, e.g. "AB101AA".
    pub postcode: String,
}

/// How a raw postcode field was accepted (or not).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Valid(ParsedPostcode),
    /// Only valid once the trailing character was removed.
    Trimmed(ParsedPostcode),
    Invalid,
}

/// Parse and normalize a postcode. Case and surrounding whitespace are ignored.
pub fn parse(raw: &str) -> Option<ParsedPostcode> {
    let upper = raw.trim().to_uppercase();
    if !POSTCODE_RE.is_match(&upper) {
        return None;
    }

    let postcode: String = upper.chars().filter(|c| !c.is_whitespace()).collect();
    // the regex guarantees an ASCII inward code of exactly three characters
    let split = postcode.len() - 3;
    let outcode = postcode[..split].to_string();
    let incode = postcode[split..].to_string();
    let area: String = outcode
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();

    Some(ParsedPostcode {
        area,
        outcode,
        incode,
        postcode,
    })
}

/// Parse `raw`, retrying once without its final character.
///
/// Some extracts carry a stray trailing character on the postcode field;
/// the retry recovers those rows.
pub fn parse_with_fallback(raw: &str) -> ParseOutcome {
    if let Some(p) = parse(raw) {
        return ParseOutcome::Valid(p);
    }
    let mut chars = raw.chars();
    chars.next_back();
    match parse(chars.as_str()) {
        Some(p) => ParseOutcome::Trimmed(p),
        None => ParseOutcome::Invalid,
    }
}
