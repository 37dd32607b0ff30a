//! Normalized component description shared by both input paths

use serde::{Deserialize, Serialize};

/// Category used when a record does not name one
pub const DEFAULT_CATEGORY: &str = "ui";

/// Prefix of every generated document title
pub const TITLE_PREFIX: &str = "Windows風";

/// One property row of a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Canonical description of a component, built once per run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub component_name: String,
    pub description: String,
    pub category: Option<String>,
    pub properties: Vec<PropertySpec>,
    pub features: Vec<String>,
    pub examples: Vec<String>,
    pub notes: Option<String>,

    /// Leading rows of the source sheet, kept as extra prompt context
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_excerpt: Vec<Vec<Option<String>>>,
}

impl NormalizedRecord {
    /// Record for a component typed directly on the command line
    pub fn from_literals(
        name: impl Into<String>,
        description: impl Into<String>,
        category: Option<String>,
    ) -> Self {
        Self {
            component_name: name.into().trim().to_string(),
            description: description.into().trim().to_string(),
            category,
            ..Self::default()
        }
    }

    pub fn has_name(&self) -> bool {
        !self.component_name.is_empty()
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// `Windows風<Name>`
    pub fn title(&self) -> String {
        format!("{}{}", TITLE_PREFIX, self.component_name)
    }

    /// `<name>-demo`, the basename of the generated page
    pub fn slug(&self) -> String {
        demo_slug(&self.component_name)
    }
}

/// Page slug for a component name
pub fn demo_slug(component_name: &str) -> String {
    format!("{}-demo", component_name.to_lowercase())
}
