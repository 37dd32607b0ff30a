//! Core functionality for specgen
//!
//! This crate turns component descriptions (a spreadsheet or two literal
//! strings) into a templated documentation page: grid loading, record
//! extraction, slot assembly with optional remote generation, rendering and
//! output.

pub mod assembler;
pub mod config;
pub mod extract;
pub mod grid;
pub mod layout;
pub mod llm;
pub mod prompts;
pub mod record;
pub mod slots;
pub mod template;
pub mod workbook;

pub use assembler::{Assembler, SlotSource};
pub use config::{ConfigError, GenerationConfig, OutputConfig, SpecGenConfig};
pub use extract::extract;
pub use grid::{Cell, Grid};
pub use layout::{OutputError, ProjectLayout, StyleReference};
pub use record::{NormalizedRecord, PropertySpec};
pub use slots::SlotSet;
pub use template::{RenderError, Template};
pub use workbook::{WorkbookError, load_grid};
