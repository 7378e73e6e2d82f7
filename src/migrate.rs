//! Migration driver
//!
//! Walks the source tree for Markdown posts, applies the skip rules,
//! rewrites each post's frontmatter and writes it under the destination
//! root as `<slug>.md`. One file's failure never aborts the run; every
//! outcome is accumulated in a [`RunSummary`].

use std::fs;
use std::path::{Path, PathBuf};

use console::Style;
use walkdir::WalkDir;

use crate::error::{PostportError, Result};
use crate::filename::FilenameRules;
use crate::transform::Transformer;

/// Relative-path substrings that mark a post as not-for-migration
pub const DEFAULT_SKIP_PATTERNS: &[&str] = &["_raw.md", "protect."];

/// Where to read from, where to write to, and what to leave behind
#[derive(Debug, Clone)]
pub struct MigrateConfig {
    pub source_root: PathBuf,
    pub dest_root: PathBuf,
    pub skip_patterns: Vec<String>,
    pub verbose: bool,
}

/// Accumulated outcome messages for one migration run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub migrated: Vec<String>,
    pub skipped: Vec<String>,
    pub errors: Vec<String>,
}

impl RunSummary {
    /// Print the summary block: counts first, then the skipped files.
    pub fn print(&self) {
        println!();
        println!("{}", Style::new().bold().apply_to("--- Summary ---"));
        println!("Migrated: {}", self.migrated.len());
        println!("Skipped: {}", self.skipped.len());
        println!("Errors: {}", self.errors.len());

        if !self.skipped.is_empty() {
            println!();
            println!("Skipped:");
            for message in &self.skipped {
                println!("  - {message}");
            }
        }
    }
}

/// One-shot migrator over a source/destination directory pair
#[derive(Debug)]
pub struct Migrator {
    config: MigrateConfig,
    rules: FilenameRules,
    transformer: Transformer,
}

impl Migrator {
    pub fn new(config: MigrateConfig) -> Result<Self> {
        Ok(Migrator {
            config,
            rules: FilenameRules::new()?,
            transformer: Transformer::new()?,
        })
    }

    /// Process every `*.md` file under the source root.
    ///
    /// The walk is sorted so that when two source files map to the same
    /// slug, the same file claims the destination on every run. Errors
    /// returned here are environment errors; per-file failures end up in
    /// the summary instead.
    pub fn run(&self) -> Result<RunSummary> {
        if !self.config.source_root.is_dir() {
            return Err(PostportError::SourceRootNotFound {
                path: self.config.source_root.display().to_string(),
            });
        }

        fs::create_dir_all(&self.config.dest_root).map_err(|e| {
            PostportError::DestRootCreateFailed {
                path: self.config.dest_root.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut summary = RunSummary::default();

        for entry in WalkDir::new(&self.config.source_root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
        {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if !file_name.ends_with(".md") {
                continue;
            }

            let rel = entry
                .path()
                .strip_prefix(&self.config.source_root)
                .unwrap_or(entry.path())
                .display()
                .to_string();

            self.process_file(entry.path(), &rel, &file_name, &mut summary);
        }

        Ok(summary)
    }

    fn process_file(&self, path: &Path, rel: &str, file_name: &str, summary: &mut RunSummary) {
        if self
            .config
            .skip_patterns
            .iter()
            .any(|pattern| rel.contains(pattern.as_str()))
        {
            self.record_skip(summary, format!("{rel} (pattern match)"));
            return;
        }

        let date = self.rules.extract_date(file_name);
        let slug = self.rules.extract_slug(file_name);
        let dest = self.config.dest_root.join(format!("{slug}.md"));

        if dest.exists() {
            // Diagnostic only, and only when asked for; existing
            // destinations are never touched
            let reason = if self.config.verbose && self.source_differs(path, &dest, &date) {
                "exists, source differs"
            } else {
                "exists"
            };
            self.record_skip(summary, format!("{rel} -> {slug}.md ({reason})"));
            return;
        }

        match self.migrate_file(path, &dest, &date) {
            Ok(()) => {
                summary.migrated.push(format!("{rel} -> {slug}.md"));
                println!(
                    "{} {rel} -> {slug}.md",
                    Style::new().green().apply_to("✓")
                );
            }
            Err(e) => {
                summary.errors.push(format!("{rel}: {e}"));
                println!("{} {rel}: {e}", Style::new().red().apply_to("✗"));
            }
        }
    }

    fn migrate_file(&self, src: &Path, dest: &Path, date: &str) -> Result<()> {
        let content =
            fs::read_to_string(src).map_err(|e| PostportError::FileReadFailed {
                path: src.display().to_string(),
                reason: e.to_string(),
            })?;

        let converted = self.transformer.convert_frontmatter(&content, date);

        fs::write(dest, converted).map_err(|e| PostportError::FileWriteFailed {
            path: dest.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Best-effort check whether a source would have produced different
    /// content than what already sits at the destination. Read failures
    /// here are ignored; the file is skipped either way. The date line is
    /// masked out: an undated post gets today's date on every run, which
    /// must not read as a different source tomorrow.
    fn source_differs(&self, src: &Path, dest: &Path, date: &str) -> bool {
        match (fs::read_to_string(src), fs::read_to_string(dest)) {
            (Ok(source), Ok(existing)) => {
                let converted = self.transformer.convert_frontmatter(&source, date);
                without_date_line(&converted) != without_date_line(&existing)
            }
            _ => false,
        }
    }

    fn record_skip(&self, summary: &mut RunSummary, message: String) {
        if self.config.verbose {
            println!("{} {message}", Style::new().dim().apply_to("-"));
        }
        summary.skipped.push(message);
    }
}

/// Drop the frontmatter `date:` line for content comparison purposes
fn without_date_line(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.starts_with("date: \""))
        .collect::<Vec<_>>()
        .join("\n")
}
