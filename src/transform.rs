//! Frontmatter transformation into the Contentlayer schema
//!
//! Rewrites a Jekyll post's frontmatter block into the fixed field set the
//! destination site expects (`title`, `date`, `tags`, `draft`, `summary`,
//! `authors`) and passes the Markdown body through untouched. Content
//! without a frontmatter block is returned unchanged.

use regex::Regex;

use crate::error::Result;
use crate::frontmatter::{FieldValue, parse_frontmatter};

/// Longest summary carried into the new frontmatter, in characters
const SUMMARY_MAX_CHARS: usize = 150;

/// Reformat a single tag: short tags are treated as acronyms and
/// upper-cased, longer tags are title-cased.
pub fn format_tag(tag: &str) -> String {
    if tag.chars().count() <= 3 {
        tag.to_uppercase()
    } else {
        title_case(tag)
    }
}

/// Title-case a tag: a new word starts after any non-alphabetic
/// character, so hyphenated tags come out as `Machine-Learning`.
fn title_case(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len());
    let mut prev_alphabetic = false;
    for c in tag.chars() {
        if c.is_alphabetic() {
            if prev_alphabetic {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(c);
            prev_alphabetic = false;
        }
    }
    out
}

fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Frontmatter converter with its summary-extraction pattern compiled once
#[derive(Debug)]
pub struct Transformer {
    first_quote_re: Regex,
}

impl Transformer {
    pub fn new() -> Result<Self> {
        Ok(Transformer {
            // First blockquote-style line of the body, quotes optional
            first_quote_re: Regex::new(r#"(?m)^>\s*["']?(.+?)["']?\s*$"#)?,
        })
    }

    /// Rewrite `content`'s frontmatter into the Contentlayer schema.
    ///
    /// `date` comes from the filename (see [`crate::filename`]). Content
    /// with fewer than two `---` delimiters is returned unchanged.
    pub fn convert_frontmatter(&self, content: &str, date: &str) -> String {
        let parts: Vec<&str> = content.splitn(3, "---").collect();
        if parts.len() < 3 {
            return content.to_string();
        }

        let fields = parse_frontmatter(parts[1]);
        let body = parts[2];

        let tags: Vec<String> = match fields.get("tags") {
            Some(FieldValue::List(items)) => items.iter().map(|t| format_tag(t)).collect(),
            Some(FieldValue::Scalar(tag)) => vec![format_tag(tag)],
            None => Vec::new(),
        };

        let title = match fields.get("title") {
            Some(FieldValue::Scalar(t)) => escape_quotes(t),
            _ => "Untitled".to_string(),
        };

        let summary = escape_quotes(&self.derive_summary(&fields, body, &title));

        let tags_str = format!(
            "[{}]",
            tags.iter()
                .map(|t| format!("\"{t}\""))
                .collect::<Vec<_>>()
                .join(", ")
        );

        format!(
            "---\n\
             title: \"{title}\"\n\
             date: \"{date}\"\n\
             tags: {tags_str}\n\
             draft: false\n\
             summary: \"{summary}\"\n\
             authors: [\"default\"]\n\
             ---{body}"
        )
    }

    /// Pick a summary: `subtitle`, then `description`, then the first
    /// blockquote line of the body, then the title itself.
    fn derive_summary(
        &self,
        fields: &std::collections::HashMap<String, FieldValue>,
        body: &str,
        title: &str,
    ) -> String {
        for key in ["subtitle", "description"] {
            if let Some(FieldValue::Scalar(value)) = fields.get(key) {
                if !value.is_empty() {
                    return value.clone();
                }
            }
        }

        if let Some(caps) = self.first_quote_re.captures(body.trim()) {
            return caps[1].chars().take(SUMMARY_MAX_CHARS).collect();
        }

        title.to_string()
    }
}
