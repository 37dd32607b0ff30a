//! Page generation from a literal name and description

use super::Pipeline;
use crate::cli::app::GenerateCli;
use anyhow::{Result, bail};
use specgen_core::NormalizedRecord;

/// Execute the literal command
pub async fn execute(args: GenerateCli) -> Result<()> {
    let record = NormalizedRecord::from_literals(
        args.name,
        args.description,
        Some(args.category.as_str().to_string()),
    );
    if !record.has_name() {
        bail!("Component name must not be empty");
    }

    println!("Component: {}", record.component_name);
    println!("Description: {}", record.description);
    println!("Category: {}", record.category_or_default());
    if let Some(base) = &args.base_on {
        println!("Reference: {base}");
    }

    let pipeline = Pipeline::open(&args.global)?;

    let reference = match &args.base_on {
        Some(base) => Some(pipeline.layout().load_reference(base).await),
        None => None,
    };

    let path = pipeline.produce(&record, reference.as_ref()).await?;

    println!("\nGenerated {}", path.display());
    pipeline.print_next_steps(&record, &path);

    Ok(())
}
