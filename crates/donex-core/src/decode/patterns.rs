//! Regex patterns shared by the decode pipeline.

use lazy_static::lazy_static;
use regex::Regex;

/// Prefix carried by every schema tag name in the model vocabulary.
pub const TAG_PREFIX: &str = "s_";

lazy_static! {
    /// Anything before the first tag character is generation junk.
    pub static ref LEADING_JUNK: Regex = Regex::new(r"^[^<]*").unwrap();

    /// Runs of commas from repeated-delimiter artifacts.
    pub static ref COMMA_RUN: Regex = Regex::new(r",+").unwrap();

    /// Runs of whitespace, including newlines emitted between tags.
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    /// Opening schema tag, e.g. `<s_invoice_no>`.
    pub static ref OPEN_TAG: Regex =
        Regex::new(&format!(r"<({TAG_PREFIX}[^>]+)>")).unwrap();
}
