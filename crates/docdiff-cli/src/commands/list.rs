//! List command
//!
//! Usage: docdiff list <FILE>

use clap::Args;
use docdiff_core::ingest::load_difference_set;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Difference set JSON produced by the comparison engine
    pub file: PathBuf,
}

/// Execute list command
pub fn execute(args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ingested = load_difference_set(&args.file)?;

    let Some(set) = ingested.set.as_ref() else {
        return Ok(());
    };

    for record in set.unique() {
        println!(
            "{}\t{}\t{}",
            record.id.as_ref().map_or("-", |id| id.as_str()),
            record.kind.as_ref().map_or("-", |k| k.as_str()),
            record.change_type.as_ref().map_or("-", |c| c.as_str()),
        );
    }

    Ok(())
}
