//! Legend command
//!
//! Usage: docdiff legend <FILE> [--config <TOML>] [--all-categories] [--json]

use clap::Args;
use docdiff_core::ingest::load_difference_set;
use docdiff_core::legend::{aggregate, render_legend};
use docdiff_core::LegendOptions;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LegendArgs {
    /// Difference set JSON produced by the comparison engine
    pub file: PathBuf,

    /// Legend options file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also show categories outside the seven known ones
    #[arg(long)]
    pub all_categories: bool,

    /// Print counts as JSON instead of Markdown
    #[arg(long)]
    pub json: bool,
}

/// Execute legend command
pub fn execute(args: LegendArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = match &args.config {
        Some(path) => LegendOptions::load(path)?,
        None => LegendOptions::default(),
    };
    if args.all_categories {
        options.show_extra_categories = true;
    }

    let ingested = load_difference_set(&args.file)?;

    let counts = aggregate(ingested.set.as_ref());

    if args.json {
        let out = serde_json::json!({
            "comparison_id": ingested.comparison_id,
            "legend": counts,
            "skipped": ingested.skipped,
            "dropped_fields": ingested.dropped_fields,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render_legend(&counts, &options));
    }

    Ok(())
}
