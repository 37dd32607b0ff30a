//! Regex utilities for specgen
//! Extracted to a separate crate for compilation optimization

use once_cell::sync::Lazy;
use regex::Regex;

/// Case-insensitive "contains any of" matcher over literal labels
fn any_of(labels: &[&str]) -> Regex {
    let alternatives = labels.iter().map(|label| regex::escape(label)).collect::<Vec<_>>();
    Regex::new(&format!("(?i)(?:{})", alternatives.join("|")))
        .expect("Invalid regex pattern")
}

/// Case-insensitive "starts with any of" matcher over literal labels
fn prefixed_by(labels: &[&str]) -> Regex {
    let alternatives = labels.iter().map(|label| regex::escape(label)).collect::<Vec<_>>();
    Regex::new(&format!("(?i)^(?:{})", alternatives.join("|")))
        .expect("Invalid regex pattern")
}

/// Row labels of the vertical (key/value) spreadsheet layout
pub mod labels {
    use super::*;

    /// Record field a label row feeds
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum LabelField {
        Name,
        Description,
        Category,
        Feature,
        Example,
        Note,
    }

    /// Accepted labels per field, in matching order. The first entry that
    /// matches a key wins.
    pub const LABEL_TABLE: &[(LabelField, &[&str])] = &[
        (LabelField::Name, &["コンポーネント名", "名前", "Name"]),
        (LabelField::Description, &["説明", "概要", "Description"]),
        (LabelField::Category, &["カテゴリ", "Category"]),
        (LabelField::Feature, &["機能", "Feature"]),
        (LabelField::Example, &["例", "Example"]),
        (LabelField::Note, &["備考", "Note"]),
    ];

    static MATCHERS: Lazy<Vec<(LabelField, Regex)>> = Lazy::new(|| {
        LABEL_TABLE.iter().map(|(field, labels)| (*field, any_of(labels))).collect()
    });

    /// Classify a row key against the label table
    pub fn classify(key: &str) -> Option<LabelField> {
        MATCHERS.iter().find(|(_, pattern)| pattern.is_match(key)).map(|(field, _)| *field)
    }
}

/// Section markers inside the vertical layout
pub mod sections {
    use super::*;

    pub static PROPERTIES: Lazy<Regex> =
        Lazy::new(|| any_of(&["プロパティ", "Property", "Properties", "Props"]));

    pub static PROPERTIES_LABEL_ROW: Lazy<Regex> =
        Lazy::new(|| prefixed_by(&["プロパティ", "Property"]));

    /// Heading markup or a bracketed section marker
    pub fn is_header(key: &str) -> bool {
        key.contains("##") || key.contains('【')
    }

    pub fn is_properties(section: &str) -> bool {
        PROPERTIES.is_match(section)
    }

    /// A row inside a properties section that only repeats the section label
    pub fn repeats_properties_label(key: &str) -> bool {
        PROPERTIES_LABEL_ROW.is_match(key)
    }
}

/// Header cells of the tabular (header row + data row) layout
pub mod headers {
    use super::*;

    pub static COMPONENT: Lazy<Regex> =
        Lazy::new(|| any_of(&["コンポーネント", "Component", "Name"]));

    pub static DESCRIPTION: Lazy<Regex> = Lazy::new(|| any_of(&["説明", "Description"]));

    pub static CATEGORY: Lazy<Regex> = Lazy::new(|| any_of(&["カテゴリ", "Category"]));
}

/// Locating a JSON object inside free-form model output
pub mod json_payload {
    use super::*;

    pub static FENCED: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?s)```json\n(.*?)\n```").expect("Invalid regex pattern"));

    pub static BRACED: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("Invalid regex pattern"));

    /// Fenced `json` block first, otherwise the widest `{ ... }` span
    pub fn locate(text: &str) -> Option<&str> {
        if let Some(caps) = FENCED.captures(text) {
            return caps.get(1).map(|m| m.as_str());
        }

        BRACED.find(text).map(|m| m.as_str())
    }
}

/// Template placeholders such as `{COMPONENT_TITLE}`
pub mod placeholder {
    use super::*;

    pub static TOKEN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\{([A-Z][A-Z0-9_]*)\}").expect("Invalid regex pattern"));

    /// Names of all placeholders in `text`, in order of appearance
    pub fn names(text: &str) -> Vec<&str> {
        TOKEN
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }
}
