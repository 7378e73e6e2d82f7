//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::migrate::DEFAULT_SKIP_PATTERNS;

/// Postport - Jekyll to Contentlayer blog post migrator
///
/// Reads Markdown posts recursively from SOURCE, rewrites their frontmatter
/// into the Contentlayer schema and writes them flat into DEST.
#[derive(Parser, Debug)]
#[command(
    name = "postport",
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "One-shot migrator for Jekyll blog posts into Contentlayer content format",
    long_about = "Postport walks a Jekyll _posts tree, derives each post's date and slug from \
                  its filename, rewrites the frontmatter into the Contentlayer schema and \
                  writes the result flat into the destination content directory. Existing \
                  destination files are never overwritten.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  postport ./_posts ./content/blog              \x1b[90m# Migrate with default skip list\x1b[0m\n   \
                  postport ./_posts ./content/blog --skip wip.  \x1b[90m# Also skip paths containing 'wip.'\x1b[0m\n   \
                  postport ./_posts ./content/blog -v           \x1b[90m# Print skipped files as they occur\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Source directory containing Jekyll posts (searched recursively)
    pub source: PathBuf,

    /// Destination content directory (flat; created if missing)
    pub dest: PathBuf,

    /// Skip files whose relative path contains PATTERN (plain substring, repeatable)
    #[arg(
        long = "skip",
        value_name = "PATTERN",
        default_values_t = DEFAULT_SKIP_PATTERNS.iter().map(ToString::to_string)
    )]
    pub skip: Vec<String>,

    /// Print skipped files as they are encountered
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
