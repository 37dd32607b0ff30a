//! Spreadsheet-driven page generation

use super::Pipeline;
use crate::cli::app::FromExcelCli;
use anyhow::{Context, Result, bail};
use specgen_core::{extract, load_grid};
use tracing::info;

const LAYOUT_GUIDANCE: &str = "\
The sheet must describe a component in one of two layouts:
  - vertical: a row whose first cell is a name label (コンポーネント名 / 名前 / Name)
    with the component name in the second cell
  - tabular: a header row within the first 10 rows containing a component/name
    column, followed by one data row";

/// Execute the spreadsheet command
pub async fn execute(args: FromExcelCli) -> Result<()> {
    println!("Reading {}", args.path.display());
    println!("  Sheet: {}", args.sheet.as_deref().unwrap_or("(first sheet)"));

    let grid = load_grid(&args.path, args.sheet.as_deref())
        .with_context(|| format!("Failed to load {}", args.path.display()))?;
    info!("Loaded {} rows", grid.len());

    let record = extract(&grid);
    if !record.has_name() {
        eprintln!("{LAYOUT_GUIDANCE}");
        bail!("No component name found in {}", args.path.display());
    }

    println!("\nExtracted component:");
    println!("  Name: {}", record.component_name);
    println!(
        "  Description: {}",
        if record.description.is_empty() { "(none)" } else { record.description.as_str() }
    );
    println!("  Properties: {}", record.properties.len());

    let pipeline = Pipeline::open(&args.global)?;
    let path = pipeline.produce(&record, None).await?;

    println!("\nGenerated {}", path.display());
    pipeline.print_next_steps(&record, &path);

    Ok(())
}
