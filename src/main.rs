//! Postport - Jekyll to Contentlayer blog post migrator
//!
//! A one-shot command line tool that walks a Jekyll `_posts` tree, rewrites
//! each post's frontmatter into the Contentlayer schema and writes the
//! result flat into a destination content directory. Per-file failures are
//! collected into a run summary; only environment errors abort the run.

use clap::Parser;

mod cli;
mod error;
mod filename;
mod frontmatter;
mod migrate;
mod transform;

use cli::Cli;
use error::Result;
use migrate::{MigrateConfig, Migrator};

fn run(cli: Cli) -> Result<()> {
    let config = MigrateConfig {
        source_root: cli.source,
        dest_root: cli.dest,
        skip_patterns: cli.skip,
        verbose: cli.verbose,
    };

    let summary = Migrator::new(config)?.run()?;
    summary.print();

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
