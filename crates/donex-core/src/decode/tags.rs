//! Two-level tag-pair extraction from sanitized model output.
//!
//! The model emits an almost-XML stream: section tags (`<s_header>`,
//! `<s_items>`, `<s_summary>`) wrapping field tags, with no grammar
//! guarantee. Tags may be unbalanced, duplicated, or preceded by garbage.
//! The scanner here matches `<name>...</name>` pairs leftmost-first and
//! non-overlapping, pairing each opening tag with the nearest following
//! identical closing tag.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::patterns::OPEN_TAG;
use crate::models::invoice::FieldValue;

/// Intermediate mapping from field-tag name (prefix included) to value.
pub type FieldMap = HashMap<String, FieldValue>;

/// A matched `<name>...</name>` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TagPair<'a> {
    name: &'a str,
    inner: &'a str,
}

/// Scan one nesting level for matched tag pairs.
///
/// A closing tag is matched to the nearest following identical opening-tag
/// name; the matched span is consumed before scanning continues. An
/// opening tag with no matching close is skipped without consuming the
/// text after it, so a dangling tag cannot swallow later matches.
fn scan_pairs(text: &str) -> Vec<TagPair<'_>> {
    let mut pairs = Vec::new();
    let mut pos = 0;

    while let Some(caps) = OPEN_TAG.captures(&text[pos..]) {
        let open = caps.get(0).unwrap();
        let name = caps.get(1).unwrap().as_str();
        let inner_start = pos + open.end();

        let close = format!("</{name}>");
        match text[inner_start..].find(&close) {
            Some(offset) => {
                pairs.push(TagPair {
                    name,
                    inner: &text[inner_start..inner_start + offset],
                });
                pos = inner_start + offset + close.len();
            }
            None => {
                // Dangling open tag: keep scanning after it.
                pos = inner_start;
            }
        }
    }

    pairs
}

/// Extract all field tags nested inside matched sections.
///
/// Top-level pairs are treated as sections; field pairs directly inside a
/// section land in the map, with duplicate names folding into ordered
/// lists (first seen first). A field tag sitting at top level is never
/// captured: section tags are expected to wrap every field, and malformed
/// nesting loses those fields silently. Total: no matches yields an empty
/// map.
pub fn extract(text: &str) -> FieldMap {
    let mut fields = FieldMap::new();

    for section in scan_pairs(text) {
        for field in scan_pairs(section.inner) {
            insert_field(&mut fields, field.name, field.inner.trim());
        }
    }

    fields
}

fn insert_field(fields: &mut FieldMap, key: &str, value: &str) {
    match fields.entry(key.to_string()) {
        Entry::Vacant(entry) => {
            entry.insert(FieldValue::scalar(value));
        }
        Entry::Occupied(mut entry) => entry.get_mut().push(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_balanced_section_extracts_all_fields() {
        let text = "<s_header><s_invoice_no>INV-1</s_invoice_no>\
                    <s_seller>Acme</s_seller></s_header>";
        let fields = extract(text);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields["s_invoice_no"], FieldValue::scalar("INV-1"));
        assert_eq!(fields["s_seller"], FieldValue::scalar("Acme"));
    }

    #[test]
    fn test_values_are_trimmed() {
        let text = "<s_header><s_seller> Acme Corp </s_seller></s_header>";
        let fields = extract(text);
        assert_eq!(fields["s_seller"], FieldValue::scalar("Acme Corp"));
    }

    #[test]
    fn test_duplicate_key_folds_into_ordered_list() {
        let text = "<s_items><s_item_desc>a</s_item_desc>\
                    <s_item_desc>b</s_item_desc></s_items>";
        let fields = extract(text);

        assert_eq!(
            fields["s_item_desc"],
            FieldValue::List(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_duplicates_fold_across_sections() {
        let text = "<s_items><s_item_desc>a</s_item_desc></s_items>\
                    <s_items><s_item_desc>b</s_item_desc>\
                    <s_item_desc>c</s_item_desc></s_items>";
        let fields = extract(text);

        assert_eq!(
            fields["s_item_desc"],
            FieldValue::List(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn test_top_level_field_tag_is_dropped() {
        // No section wraps it, so it scans as an empty section.
        let text = "<s_invoice_no>INV-1</s_invoice_no>";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_section_without_fields_contributes_nothing() {
        assert!(extract("<s_header>plain text</s_header>").is_empty());
    }

    #[test]
    fn test_dangling_open_tag_is_tolerated() {
        let text = "<s_header><s_invoice_no>INV-1</s_header>";
        let fields = extract(text);
        assert!(!fields.contains_key("s_invoice_no"));
    }

    #[test]
    fn test_dangling_section_does_not_swallow_later_sections() {
        let text = "<s_broken><s_header><s_seller>Acme</s_seller></s_header>";
        let fields = extract(text);
        assert_eq!(fields["s_seller"], FieldValue::scalar("Acme"));
    }

    #[test]
    fn test_non_prefixed_tags_are_ignored() {
        let text = "<header><s_seller>Acme</s_seller></header>";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(extract("").is_empty());
        assert!(extract("no tags").is_empty());
    }

    #[test]
    fn test_scan_is_leftmost_first_and_non_overlapping() {
        let pairs = scan_pairs("<s_a>1</s_a><s_a>2</s_a>");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].inner, "1");
        assert_eq!(pairs[1].inner, "2");
    }

    #[test]
    fn test_closing_tag_matches_nearest_identical_name() {
        // The first </s_a> closes the pair; the trailing one is left over.
        let pairs = scan_pairs("<s_a>1</s_a>2</s_a>");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].inner, "1");
    }

    #[test]
    fn test_unknown_field_names_are_preserved() {
        let text = "<s_header><s_mystery>42</s_mystery></s_header>";
        let fields = extract(text);
        assert_eq!(fields["s_mystery"], FieldValue::scalar("42"));
    }
}
