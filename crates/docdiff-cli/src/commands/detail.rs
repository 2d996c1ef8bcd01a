//! Detail command
//!
//! Usage: docdiff detail <FILE> --id <ID> [--x <X>] [--y <Y>] [--hidden] [--json]

use clap::Args;
use docdiff_core::detail::format;
use docdiff_core::errors::{DocDiffError, ExError};
use docdiff_core::ingest::load_difference_set;
use docdiff_core::DifferenceId;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DetailArgs {
    /// Difference set JSON produced by the comparison engine
    pub file: PathBuf,

    /// Id of the hovered difference
    #[arg(long)]
    pub id: String,

    /// Anchor x coordinate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub x: f64,

    /// Anchor y coordinate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub y: f64,

    /// Overlay hidden: resolve the difference but render nothing
    #[arg(long)]
    pub hidden: bool,

    /// Print the positioned detail as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute detail command
pub fn execute(args: DetailArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ingested = load_difference_set(&args.file)?;

    let id = DifferenceId::new(args.id);
    let record = ingested
        .set
        .as_ref()
        .and_then(|set| set.find(&id))
        .ok_or_else(|| {
            ExError::from(DocDiffError::UnknownDifference {
                difference_id: id.to_string(),
            })
            .with_op("detail")
            .with_comparison_id(ingested.comparison_id.clone())
        })?;

    let Some(detail) = format(Some(record), !args.hidden, args.x, args.y) else {
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        println!("{}", detail.content);
    }

    Ok(())
}
