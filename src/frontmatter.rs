//! Minimal frontmatter parser
//!
//! Handles the one frontmatter shape Jekyll posts in the wild actually use:
//! flat `key: value` pairs plus one level of `- item` lists under a key.
//! This is deliberately not a YAML parser — no nested mappings, no block
//! scalars, no type coercion. Every value is a string or a list of strings.
//!
//! Malformed input never raises an error; unrecognized lines are ignored
//! and the result mapping is at worst partially populated.

use std::collections::HashMap;

/// A parsed frontmatter field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

/// List-accumulation state threaded through the line scan
#[derive(Default)]
struct Accumulator {
    pending_key: Option<String>,
    pending_list: Vec<String>,
    in_list: bool,
}

impl Accumulator {
    /// Commit the pending list, if any, to the result mapping.
    /// Last committed value for a key wins. List items seen before any key
    /// line stay pending until a key shows up.
    fn commit(&mut self, result: &mut HashMap<String, FieldValue>) {
        if self.in_list {
            if let Some(key) = self.pending_key.clone() {
                result.insert(key, FieldValue::List(std::mem::take(&mut self.pending_list)));
                self.in_list = false;
            }
        }
    }
}

/// Strip one layer of surrounding single or double quotes
fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Parse the text between a file's `---` delimiters into a field mapping.
///
/// Single pass over the lines. A `- item` line appends to the list of the
/// most recently seen key; a non-indented `key: value` line commits any
/// pending list and stores the value (empty values only set the current
/// key so a following list can attach to it). Anything else is ignored
/// without resetting the current-key state.
pub fn parse_frontmatter(block: &str) -> HashMap<String, FieldValue> {
    let mut result = HashMap::new();
    let mut acc = Accumulator::default();

    for line in block.trim().lines() {
        let line = line.trim_end();
        let stripped = line.trim_start();

        if let Some(rest) = stripped.strip_prefix("- ") {
            acc.pending_list
                .push(strip_quotes(rest.trim()).to_string());
            acc.in_list = true;
            continue;
        }

        if line.contains(':') && !line.starts_with(' ') && !line.starts_with('\t') {
            acc.commit(&mut result);

            let (key, value) = match line.split_once(':') {
                Some((k, v)) => (k.trim(), strip_quotes(v.trim())),
                None => continue,
            };

            if !value.is_empty() {
                result.insert(key.to_string(), FieldValue::Scalar(value.to_string()));
            }
            acc.pending_key = Some(key.to_string());
        }
    }

    acc.commit(&mut result);

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(s: &str) -> FieldValue {
        FieldValue::Scalar(s.to_string())
    }

    fn list(items: &[&str]) -> FieldValue {
        FieldValue::List(items.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_parse_scalar_and_list() {
        let parsed = parse_frontmatter("title: Hello\ntags:\n  - a\n  - go\n");
        assert_eq!(parsed.get("title"), Some(&scalar("Hello")));
        assert_eq!(parsed.get("tags"), Some(&list(&["a", "go"])));
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_parse_strips_one_quote_layer() {
        let parsed = parse_frontmatter("title: \"My Post\"\nsubtitle: 'intro'\n");
        assert_eq!(parsed.get("title"), Some(&scalar("My Post")));
        assert_eq!(parsed.get("subtitle"), Some(&scalar("intro")));
    }

    #[test]
    fn test_parse_quoted_list_items() {
        let parsed = parse_frontmatter("tags:\n  - \"ai\"\n  - 'golang'\n");
        assert_eq!(parsed.get("tags"), Some(&list(&["ai", "golang"])));
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        let parsed = parse_frontmatter("title: Rust: The Book\n");
        assert_eq!(parsed.get("title"), Some(&scalar("Rust: The Book")));
    }

    #[test]
    fn test_parse_indented_key_line_is_ignored() {
        let parsed = parse_frontmatter("title: Hello\n  nested: no\n");
        assert_eq!(parsed.get("title"), Some(&scalar("Hello")));
        assert!(!parsed.contains_key("nested"));
    }

    #[test]
    fn test_parse_blank_lines_do_not_reset_list_state() {
        let parsed = parse_frontmatter("tags:\n\n  - a\n\n  - b\n");
        assert_eq!(parsed.get("tags"), Some(&list(&["a", "b"])));
    }

    #[test]
    fn test_parse_trailing_list_is_committed() {
        let parsed = parse_frontmatter("title: T\ntags:\n  - last");
        assert_eq!(parsed.get("tags"), Some(&list(&["last"])));
    }

    #[test]
    fn test_parse_duplicate_scalar_last_write_wins() {
        let parsed = parse_frontmatter("title: First\ntitle: Second\n");
        assert_eq!(parsed.get("title"), Some(&scalar("Second")));
    }

    #[test]
    fn test_parse_list_commit_overwrites_earlier_scalar() {
        // A key with a scalar value followed directly by list items ends up
        // holding the list: the later commit wins in the mapping.
        let parsed = parse_frontmatter("tags: solo\n  - a\n  - b\ndate: x\n");
        assert_eq!(parsed.get("tags"), Some(&list(&["a", "b"])));
    }

    #[test]
    fn test_parse_empty_block() {
        assert!(parse_frontmatter("").is_empty());
        assert!(parse_frontmatter("\n\n").is_empty());
    }

    #[test]
    fn test_parse_lines_without_colon_are_ignored() {
        let parsed = parse_frontmatter("just some text\ntitle: Hello\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get("title"), Some(&scalar("Hello")));
    }
}
