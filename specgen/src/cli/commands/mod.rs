//! Command implementations
//!
//! Both commands end in the same pipeline: assemble slots for a record,
//! render the template and write the page once rendering succeeded.

pub mod from_excel;
pub mod generate;

use crate::cli::app::GlobalArgs;
use anyhow::{Context, Result};
use specgen_core::{
    Assembler, NormalizedRecord, ProjectLayout, SlotSource, SpecGenConfig, StyleReference, Template,
};
use std::path::PathBuf;
use tracing::{debug, info};

/// Everything a command needs to turn a record into a written page
pub struct Pipeline {
    layout: ProjectLayout,
    template: Template,
    assembler: Assembler,
}

impl Pipeline {
    pub fn open(global: &GlobalArgs) -> Result<Self> {
        let config = SpecGenConfig::load(&global.root, global.config.as_deref())?;
        let layout = ProjectLayout::new(&global.root, &config.output);

        let template = match &config.output.template {
            Some(path) => {
                let path = global.root.join(path);
                debug!("Using custom template {}", path.display());
                Template::from_file(&path)?
            }
            None => Template::default(),
        };

        Ok(Self { layout, template, assembler: Assembler::from_config(&config.generation) })
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Assemble, render and write the page for `record`
    pub async fn produce(
        &self,
        record: &NormalizedRecord,
        reference: Option<&StyleReference>,
    ) -> Result<PathBuf> {
        let (slots, source) = self.assembler.assemble_with(record, reference).await;
        match source {
            SlotSource::Remote => info!("Document content generated remotely"),
            SlotSource::Fallback => info!("Document content generated locally"),
        }

        let document = self.template.render(&slots);
        let path = self
            .layout
            .write_document(&record.component_name, &document)
            .await
            .with_context(|| format!("Failed to save document for {}", record.component_name))?;

        Ok(path)
    }

    fn print_next_steps(&self, record: &NormalizedRecord, path: &std::path::Path) {
        println!("\nNext steps:");
        println!("  1. Review and edit {}", path.display());
        println!(
            "  2. Implement the component at {}",
            self.layout.component_source_path(&record.component_name).display()
        );
        println!("  3. Preview the page at /{}", record.slug());
    }
}
