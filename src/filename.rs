//! Date and slug extraction from Jekyll post filenames
//!
//! Jekyll names posts `YYYY-MM-DD-title.md`. The date prefix becomes the
//! post's publication date and the remainder becomes the destination slug.
//! Non-conforming filenames fall back silently: the date becomes today and
//! the slug becomes the case-folded filename.

use chrono::Local;
use regex::Regex;

use crate::error::Result;

/// Compiled filename patterns, built once per run
#[derive(Debug)]
pub struct FilenameRules {
    date_re: Regex,
    slug_re: Regex,
}

impl FilenameRules {
    pub fn new() -> Result<Self> {
        Ok(FilenameRules {
            date_re: Regex::new(r"^(\d{4}-\d{2}-\d{2})-")?,
            slug_re: Regex::new(r"^\d{4}-\d{2}-\d{2}-(.*?)\.md$")?,
        })
    }

    /// Extract the `YYYY-MM-DD` date prefix from a filename.
    ///
    /// The matched substring is returned verbatim with no calendar
    /// validation. Filenames without a date prefix get today's date.
    pub fn extract_date(&self, filename: &str) -> String {
        match self.date_re.captures(filename) {
            Some(caps) => caps[1].to_string(),
            None => Local::now().format("%Y-%m-%d").to_string(),
        }
    }

    /// Extract the slug from a filename by removing the date prefix
    /// and the `.md` extension, lower-casing the result.
    ///
    /// Filenames without a date prefix keep their full name, with any
    /// `.md` occurrence removed and the case folded.
    pub fn extract_slug(&self, filename: &str) -> String {
        match self.slug_re.captures(filename) {
            Some(caps) => caps[1].to_lowercase(),
            None => filename.replace(".md", "").to_lowercase(),
        }
    }
}
