//! Cleanup of raw model output before tag extraction.

use super::patterns::{COMMA_RUN, LEADING_JUNK, WHITESPACE_RUN};

/// Clean up common generation artifacts in raw model output.
///
/// Well-formed output starts with a structural tag, so everything before
/// the first `<` is dropped. Comma runs collapse to a single comma and
/// whitespace runs (including newlines) to a single space; the result is
/// trimmed. Total: returns an empty string when the input contains no tag
/// character at all.
pub fn sanitize(raw: &str) -> String {
    let text = LEADING_JUNK.replace(raw, "");
    let text = COMMA_RUN.replace_all(&text, ",");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_leading_junk() {
        assert_eq!(sanitize("junk<tag>x</tag>"), "<tag>x</tag>");
    }

    #[test]
    fn test_keeps_junk_after_first_tag() {
        assert_eq!(sanitize("<tag>x</tag>junk"), "<tag>x</tag>junk");
    }

    #[test]
    fn test_collapses_comma_runs() {
        assert_eq!(sanitize("<s_a>1,,,2</s_a>"), "<s_a>1,2</s_a>");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            sanitize("  <s_a>one\n\ttwo   three</s_a>  "),
            "<s_a>one two three</s_a>"
        );
    }

    #[test]
    fn test_no_tag_yields_empty() {
        assert_eq!(sanitize("no tags here"), "");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "junk<s_a>1,,2</s_a>",
            "  <s_a> x \n y </s_a>",
            "plain text",
            "",
            "<s_a><s_b>v</s_b></s_a>",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
        }
    }
}
