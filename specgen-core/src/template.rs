//! Document template and placeholder substitution
//!
//! Substitution is a single pass over the template text. Slot values are
//! inserted verbatim and never scanned again, so a value that happens to
//! contain `{PURPOSE}` stays as written.

use crate::record::TITLE_PREFIX;
use crate::slots::{SLOT_KEYS, SlotSet};
use regex::Captures;
use regex_utils::placeholder;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Placeholder derived from the title instead of read from a slot
pub const COMPONENT_NAME_TOKEN: &str = "COMPONENT_NAME";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unknown placeholder {{{name}}} in template")]
    UnknownPlaceholder { name: String },

    #[error("Failed to read template {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
}

/// Built-in page layout: front matter, ten numbered sections and an appendix
pub const DEFAULT_TEMPLATE: &str = r#"---
layout: ../layouts/BaseLayout.astro
title: {COMPONENT_TITLE}
slug: {COMPONENT_SLUG}
---
import {COMPONENT_NAME} from '../components/ui/{COMPONENT_NAME}.astro';

# {COMPONENT_TITLE}

## 1. 概要

### 1.1 目的
{PURPOSE}

### 1.2 対象ユーザー
{TARGET_USERS}

### 1.3 主要機能
{KEY_FEATURES}

---

## 2. 外観仕様

### 2.1 基本デザイン

{VISUAL_DESCRIPTION}

<div style="margin: 2rem 0; padding: 2rem; background: #f0f0f0; display: flex; gap: 1rem; flex-wrap: wrap;">
  {BASIC_EXAMPLE}
</div>

```astro
{BASIC_EXAMPLE}
```

### 2.2 デザイントークン

{DESIGN_TOKENS}

---

## 3. プロパティ仕様

### 3.1 プロパティ一覧

| プロパティ | 型 | デフォルト値 | 必須 | 説明 |
|-----------|-----|------------|------|------|
{PROPERTIES_TABLE}

### 3.2 プロパティ詳細

{PROPERTIES_DETAIL}

---

## 4. バリエーション仕様

{VARIATIONS}

---

## 5. 状態仕様

### 5.1 状態遷移

{STATE_TRANSITIONS}

### 5.2 各状態の外観

{STATE_VISUALS}

---

## 6. 動作仕様

### 6.1 ユーザー操作

{USER_INTERACTIONS}

### 6.2 キーボード操作

{KEYBOARD_INTERACTIONS}

### 6.3 イベント仕様

{EVENTS}

---

## 7. 実装例

### 7.1 基本的な使用例

{BASIC_USAGE}

### 7.2 実用例

{PRACTICAL_EXAMPLES}

### 7.3 よくある組み合わせ

{COMMON_PATTERNS}

---

## 8. アクセシビリティ

### 8.1 ARIA属性

{ARIA_ATTRIBUTES}

### 8.2 キーボードナビゲーション

{A11Y_KEYBOARD}

### 8.3 スクリーンリーダー対応

{A11Y_SCREEN_READER}

---

## 9. 制約事項・注意事項

### 9.1 技術的制約

{TECHNICAL_CONSTRAINTS}

### 9.2 使用上の注意

{USAGE_NOTES}

### 9.3 既知の問題

{KNOWN_ISSUES}

---

## 10. 参考情報

### 10.1 関連コンポーネント

{RELATED_COMPONENTS}

### 10.2 参考リンク

{REFERENCES}

---

## 付録: 実装メモ

### CSS実装のポイント

{CSS_IMPLEMENTATION}

### TypeScript実装のポイント

{TYPESCRIPT_IMPLEMENTATION}
"#;

/// A validated document template
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Default for Template {
    fn default() -> Self {
        Self { text: DEFAULT_TEMPLATE.to_string() }
    }
}

impl Template {
    /// Accept `text` only if every placeholder in it is known
    pub fn parse(text: impl Into<String>) -> Result<Self, RenderError> {
        let text = text.into();

        if let Some(name) = placeholder::names(&text).into_iter().find(|name| !is_known_token(name)) {
            return Err(RenderError::UnknownPlaceholder { name: name.to_string() });
        }

        Ok(Self { text })
    }

    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| RenderError::Read { path: path.to_path_buf(), source })?;
        Self::parse(text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Substitute every placeholder with its slot value
    pub fn render(&self, slots: &SlotSet) -> String {
        let component_name = component_name_from_title(&slots.component_title);

        let mut values: HashMap<&str, &str> = slots.token_values().into_iter().collect();
        values.insert(COMPONENT_NAME_TOKEN, &component_name);

        placeholder::TOKEN
            .replace_all(&self.text, |caps: &Captures| match values.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

/// Strip the first title prefix occurrence, mirroring how titles are built
pub fn component_name_from_title(title: &str) -> String {
    title.replacen(TITLE_PREFIX, "", 1)
}

fn is_known_token(name: &str) -> bool {
    name == COMPONENT_NAME_TOKEN || SLOT_KEYS.iter().any(|slot| slot.token == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots() -> SlotSet {
        let mut object = serde_json::Map::new();
        for slot in SLOT_KEYS {
            object.insert(slot.key.to_string(), format!("value-of-{}", slot.key).into());
        }
        object.insert("componentTitle".to_string(), "Windows風Gauge".into());
        serde_json::from_value(serde_json::Value::Object(object)).unwrap()
    }

    #[test]
    fn test_builtin_template_uses_every_slot() {
        let names = placeholder::names(DEFAULT_TEMPLATE);
        for slot in SLOT_KEYS {
            assert!(names.contains(&slot.token), "template lacks {}", slot.token);
        }
        assert!(names.contains(&COMPONENT_NAME_TOKEN));
        assert!(Template::parse(DEFAULT_TEMPLATE).is_ok());
    }

    #[test]
    fn test_render_replaces_all_placeholders() {
        let output = Template::default().render(&slots());

        assert!(placeholder::names(&output).is_empty(), "leftover placeholders in:\n{output}");
        assert!(output.contains("title: Windows風Gauge"));
        assert!(output.contains("import Gauge from '../components/ui/Gauge.astro';"));
        assert!(output.contains("### 1.1 目的\nvalue-of-purpose"));
        assert!(output.contains("value-of-typescriptImplementation"));
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let mut slots = slots();
        slots.purpose = "literal {EVENTS} and {COMPONENT_NAME}".to_string();

        let output = Template::default().render(&slots);
        assert!(output.contains("literal {EVENTS} and {COMPONENT_NAME}"));
        assert!(output.contains("### 6.3 イベント仕様\n\nvalue-of-events"));
    }

    #[test]
    fn test_component_name_from_title() {
        assert_eq!(component_name_from_title("Windows風Spinner"), "Spinner");
        assert_eq!(component_name_from_title("Spinner"), "Spinner");
        assert_eq!(component_name_from_title("Windows風Windows風X"), "Windows風X");
    }

    #[test]
    fn test_unknown_placeholder_is_rejected() {
        match Template::parse("# {COMPONENT_TITLE}\n{AUTHOR}") {
            Err(RenderError::UnknownPlaceholder { name }) => assert_eq!(name, "AUTHOR"),
            other => panic!("expected UnknownPlaceholder, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_template() {
        let template = Template::parse("{COMPONENT_NAME}: {PURPOSE} ({lowercase} stays)").unwrap();
        assert_eq!(template.render(&slots()), "Gauge: value-of-purpose ({lowercase} stays)");
    }
}
