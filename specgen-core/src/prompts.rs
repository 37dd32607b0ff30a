//! Prompt text sent to the generation collaborator
//!
//! The prompt is Japanese because the generated documents are.

use crate::layout::StyleReference;
use crate::record::NormalizedRecord;
use crate::slots::SLOT_KEYS;

const ROLE: &str = "あなたはWindows Forms風UIコンポーネントの外部仕様書を作成する技術文書ライターです。";

const RULES: &str = "\
## 重要な指示

1. Windows Forms風のデザインシステムに従ってください：
   - グラデーション背景とボーダーによる立体的な外観
   - ホバー・アクティブ・無効化状態の視覚的フィードバック
   - Segoe UIフォントファミリーの使用
2. Astroコンポーネントの記法に従ってください：
   - Props定義はTypeScriptインターフェース
   - スロットで子要素を受け取る
   - スコープ付きCSS
3. 提供された情報を最大限活用し、不足している情報はコンポーネントの性質から合理的に推測して補完してください
4. 具体的で実用的な内容にし、コード例はそのまま動作するものにしてください
5. 日本語で記述してください

JSONのみを出力し、それ以外の説明は含めないでください。";

/// Builds the single user message of a generation request
pub struct SpecPrompt;

impl SpecPrompt {
    /// Full prompt for `record`, optionally carrying a style reference
    pub fn build(record: &NormalizedRecord, reference: Option<&StyleReference>) -> String {
        let mut sections = vec![
            ROLE.to_string(),
            "# 指示\n\n以下の情報をもとに、詳細なPC アプリケーション外部仕様書を作成してください。".to_string(),
            Self::component_section(record),
        ];

        if let Some(reference) = reference.filter(|reference| !reference.is_empty()) {
            sections.push(Self::reference_section(reference));
        }

        sections.push(Self::output_format_section());
        sections.push(RULES.to_string());

        sections.join("\n\n")
    }

    fn component_section(record: &NormalizedRecord) -> String {
        let mut section = format!(
            "## コンポーネント情報\n\n- コンポーネント名: {}\n- 説明: {}\n- カテゴリー: {}",
            record.component_name,
            record.description,
            record.category_or_default()
        );

        if !record.properties.is_empty() {
            let lines: Vec<String> = record
                .properties
                .iter()
                .map(|property| {
                    let default = property
                        .default_value
                        .as_deref()
                        .map(|value| format!(" = {value}"))
                        .unwrap_or_default();
                    format!(
                        "- {} ({}){}: {}",
                        property.name,
                        property.type_name,
                        default,
                        property.description.as_deref().unwrap_or("")
                    )
                })
                .collect();
            section.push_str(&format!("\n\n### プロパティ\n{}", lines.join("\n")));
        }

        if !record.features.is_empty() {
            section.push_str(&format!("\n\n### 機能\n{}", bullets(&record.features)));
        }

        if !record.examples.is_empty() {
            section.push_str(&format!("\n\n### 使用例\n{}", bullets(&record.examples)));
        }

        if let Some(notes) = &record.notes {
            section.push_str(&format!("\n\n### 備考\n{notes}"));
        }

        if !record.source_excerpt.is_empty() {
            let raw = serde_json::to_string_pretty(&record.source_excerpt).unwrap_or_default();
            section.push_str(&format!("\n\n### 元データ（参考）\n```json\n{raw}\n```"));
        }

        section
    }

    fn reference_section(reference: &StyleReference) -> String {
        let mut section = format!("## 参考にする既存仕様書・コンポーネント（{}）", reference.name);

        if let Some(page) = &reference.demo_page {
            section.push_str(&format!("\n\n### 参考デモページ\n{page}"));
        }
        if let Some(source) = &reference.component_source {
            section.push_str(&format!("\n\n### 参考コンポーネント\n{source}"));
        }

        section
    }

    fn output_format_section() -> String {
        let fields: Vec<String> = SLOT_KEYS
            .iter()
            .map(|slot| {
                let hint = serde_json::Value::String(slot.hint.to_string());
                format!("  \"{}\": {}", slot.key, hint)
            })
            .collect();

        format!(
            "## 出力フォーマット\n\n以下のJSON形式で、各セクションの内容を生成してください。\n\n```json\n{{\n{}\n}}\n```",
            fields.join(",\n")
        )
    }
}

fn bullets(items: &[String]) -> String {
    items.iter().map(|item| format!("- {item}")).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PropertySpec;

    fn record() -> NormalizedRecord {
        NormalizedRecord {
            component_name: "DatePicker".to_string(),
            description: "日付選択".to_string(),
            category: Some("form".to_string()),
            properties: vec![PropertySpec {
                name: "minDate".to_string(),
                type_name: "Date".to_string(),
                default_value: Some("2000-01-01".to_string()),
                description: Some("最小日付".to_string()),
            }],
            features: vec!["カレンダー表示".to_string()],
            examples: vec!["<DatePicker />".to_string()],
            notes: Some("IE非対応".to_string()),
            source_excerpt: vec![vec![Some("Name".to_string()), None]],
        }
    }

    #[test]
    fn test_prompt_contains_record_data() {
        let prompt = SpecPrompt::build(&record(), None);
        assert!(prompt.starts_with(ROLE));
        assert!(prompt.contains("- コンポーネント名: DatePicker"));
        assert!(prompt.contains("- カテゴリー: form"));
        assert!(prompt.contains("- minDate (Date) = 2000-01-01: 最小日付"));
        assert!(prompt.contains("### 機能\n- カレンダー表示"));
        assert!(prompt.contains("### 備考\nIE非対応"));
        assert!(prompt.contains("\"Name\""));
        assert!(!prompt.contains("参考にする既存仕様書"));
    }

    #[test]
    fn test_prompt_lists_every_slot_key() {
        let prompt = SpecPrompt::build(&NormalizedRecord::from_literals("Spinner", "stepper", None), None);
        for slot in SLOT_KEYS {
            assert!(prompt.contains(&format!("\"{}\":", slot.key)), "missing {}", slot.key);
        }
        assert!(prompt.contains("- カテゴリー: ui"));
        assert!(!prompt.contains("### プロパティ"));
    }

    #[test]
    fn test_prompt_includes_reference() {
        let reference = StyleReference {
            name: "ComboBox".to_string(),
            demo_page: Some("# Windows風ComboBox".to_string()),
            component_source: None,
        };

        let prompt = SpecPrompt::build(&record(), Some(&reference));
        assert!(prompt.contains("参考にする既存仕様書・コンポーネント（ComboBox）"));
        assert!(prompt.contains("### 参考デモページ\n# Windows風ComboBox"));
        assert!(!prompt.contains("### 参考コンポーネント"));
    }
}
