//! Deterministic local slot generator
//!
//! A pure function of the record: no clock, no randomness, no I/O. Record
//! data is used where present; everything else gets Windows Forms flavoured
//! boilerplate.

use crate::record::{NormalizedRecord, PropertySpec};
use crate::slots::SlotSet;

const TARGET_USERS: &str = "- デスクトップアプリケーション開発者\n- Windows Forms風UIを求めるWeb開発者";

const DESIGN_TOKENS: &str = "\
| 要素 | 値 | 説明 |
|------|-----|------|
| フォント | Segoe UI | Windows標準フォント |
| ボーダー色 | #adadad | 標準ボーダー |
| 背景 | linear-gradient | グラデーション背景 |";

/// Single placeholder row used when the record lists no properties
const DEFAULT_PROPERTIES_TABLE: &str = "| `variant` | string | \"default\" | ✗ | コンポーネントのバリエーション |";

const DEFAULT_PROPERTIES_DETAIL: &str = "\
#### variant
コンポーネントの外観バリエーションを指定します。
- `default`: 標準スタイル
- `primary`: 強調スタイル";

const STATE_TRANSITIONS: &str = "```\n通常 → ホバー → アクティブ\n  ↓\n無効化\n```";

const STATE_VISUALS: &str = "\
### 通常状態
デフォルトの外観

### ホバー状態
マウスカーソルを重ねると、背景色が変化

### アクティブ状態
クリック時、さらに濃い背景色に

### 無効化状態
グレーアウトし、操作不可";

const USER_INTERACTIONS: &str =
    "- **マウスオーバー**: ホバー状態に遷移\n- **クリック**: アクティブ状態を経て、イベント発火";

const CSS_IMPLEMENTATION: &str = "\
```css
/* グラデーション背景 */
background: linear-gradient(to bottom, #f0f0f0 0%, #e5e5e5 100%);

/* ホバー効果 */
:hover {
  background: linear-gradient(to bottom, #e5f3ff 0%, #d0e9ff 100%);
}
```";

const REFERENCES: &str = "\
- [Windows Forms デザインガイドライン](https://learn.microsoft.com/ja-jp/dotnet/desktop/winforms/)
- [Astro公式ドキュメント](https://docs.astro.build/)";

/// Fill every slot for `record` without calling out
pub fn generate(record: &NormalizedRecord) -> SlotSet {
    let name = record.component_name.as_str();

    SlotSet {
        component_title: record.title(),
        component_slug: record.slug(),
        purpose: purpose(record),
        target_users: TARGET_USERS.to_string(),
        key_features: key_features(record),
        visual_description: format!(
            "Windows Forms アプリケーションの{name}と同様の外観を持ちます。グラデーション背景、ボーダー、ホバー効果により立体的な印象を与えます。"
        ),
        basic_example: format!("<{name} />\n<{name} variant=\"primary\" />\n<{name} disabled />"),
        design_tokens: DESIGN_TOKENS.to_string(),
        properties_table: properties_table(&record.properties),
        properties_detail: properties_detail(&record.properties),
        variations: format!(
            "### デフォルト\n{}\n\n### プライマリ\n{}",
            demo_box(&format!("<{name} variant=\"default\" />")),
            demo_box(&format!("<{name} variant=\"primary\" />"))
        ),
        state_transitions: STATE_TRANSITIONS.to_string(),
        state_visuals: STATE_VISUALS.to_string(),
        user_interactions: USER_INTERACTIONS.to_string(),
        keyboard_interactions: "Tabキーでフォーカスを移動し、Enterキー・Spaceキーで操作します。".to_string(),
        events: "必要に応じて、onclick等のイベントを記載".to_string(),
        basic_usage: basic_usage(record),
        practical_examples: format!(
            "### 例1: フォーム内での使用\n```astro\n<form>\n  <{name} variant=\"primary\" />\n</form>\n```\n\n### 例2: 複数配置\n```astro\n<div style=\"display: flex; gap: 1rem;\">\n  <{name} />\n  <{name} variant=\"primary\" />\n</div>\n```"
        ),
        common_patterns: "- フォーム内で他の入力コンポーネントと組み合わせて使用\n- ツールバー内での使用".to_string(),
        aria_attributes: "必要に応じて、`aria-label`, `aria-disabled`などを設定します。".to_string(),
        a11y_keyboard: "キーボードのみで操作可能にします。".to_string(),
        a11y_screen_reader: "スクリーンリーダーでコンテンツが適切に読み上げられるようにします。".to_string(),
        technical_constraints: "- Astro 5.x以上が必要\n- モダンブラウザでの動作を想定".to_string(),
        usage_notes: record.notes.clone().unwrap_or_else(|| {
            "- 過度な使用は避け、UIの一貫性を保ってください\n- アクセシビリティを考慮した実装を心がけてください"
                .to_string()
        }),
        known_issues: "現時点で既知の問題はありません。".to_string(),
        related_components: "他の関連コンポーネント（Button, Label等）を参照してください。".to_string(),
        references: REFERENCES.to_string(),
        css_implementation: CSS_IMPLEMENTATION.to_string(),
        typescript_implementation: typescript_props(&record.properties),
    }
}

fn purpose(record: &NormalizedRecord) -> String {
    if record.description.is_empty() {
        format!("{}を実現するコンポーネントです。", record.component_name)
    } else {
        record.description.clone()
    }
}

fn key_features(record: &NormalizedRecord) -> String {
    if !record.features.is_empty() {
        return record.features.iter().map(|feature| format!("- {feature}")).collect::<Vec<_>>().join("\n");
    }

    let mut lines = Vec::new();
    if !record.description.is_empty() {
        lines.push(format!("- {}", record.description));
    }
    lines.push("- Windows Forms風の視覚デザイン".to_string());
    lines.push("- 複数のバリエーションとサイズをサポート".to_string());
    lines.push("- アクセシビリティ対応".to_string());
    lines.join("\n")
}

fn properties_table(properties: &[PropertySpec]) -> String {
    if properties.is_empty() {
        return DEFAULT_PROPERTIES_TABLE.to_string();
    }

    properties
        .iter()
        .map(|property| {
            format!(
                "| `{}` | {} | {} | ✗ | {} |",
                property.name,
                property.type_name,
                property.default_value.as_deref().unwrap_or("-"),
                property.description.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn properties_detail(properties: &[PropertySpec]) -> String {
    if properties.is_empty() {
        return DEFAULT_PROPERTIES_DETAIL.to_string();
    }

    properties
        .iter()
        .map(|property| match &property.description {
            Some(description) => format!("#### {}\n{}", property.name, description),
            None => format!("#### {}\n{}を指定します。", property.name, property.name),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn basic_usage(record: &NormalizedRecord) -> String {
    if record.examples.is_empty() {
        return format!(
            "```astro\n<{} />\n```\n\n最もシンプルな使用例です。",
            record.component_name
        );
    }

    record
        .examples
        .iter()
        .map(|example| format!("```astro\n{example}\n```"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn typescript_props(properties: &[PropertySpec]) -> String {
    let fields = if properties.is_empty() {
        "  variant?: \"default\" | \"primary\";".to_string()
    } else {
        properties
            .iter()
            .map(|property| format!("  {}?: {};", property.name, property.type_name))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!("```typescript\ninterface Props {{\n{fields}\n}}\n```")
}

fn demo_box(markup: &str) -> String {
    format!("<div style=\"margin: 2rem 0; padding: 2rem; background: #f0f0f0;\">\n  {markup}\n</div>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record_with_properties() -> NormalizedRecord {
        NormalizedRecord {
            component_name: "NumericUpDown".to_string(),
            description: "数値入力".to_string(),
            properties: vec![
                PropertySpec {
                    name: "min".to_string(),
                    type_name: "number".to_string(),
                    default_value: Some("0".to_string()),
                    description: Some("最小値".to_string()),
                },
                PropertySpec {
                    name: "step".to_string(),
                    type_name: "number".to_string(),
                    default_value: None,
                    description: None,
                },
            ],
            features: vec!["上下ボタン".to_string(), "ホイール操作".to_string()],
            examples: vec!["<NumericUpDown min={0} />".to_string()],
            notes: Some("小数は未対応".to_string()),
            ..NormalizedRecord::default()
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let record = record_with_properties();
        assert_eq!(generate(&record), generate(&record));
    }

    #[test]
    fn test_uses_record_data() {
        let slots = generate(&record_with_properties());

        assert_eq!(slots.component_title, "Windows風NumericUpDown");
        assert_eq!(slots.component_slug, "numericupdown-demo");
        assert_eq!(slots.purpose, "数値入力");
        assert_eq!(slots.key_features, "- 上下ボタン\n- ホイール操作");
        assert_eq!(
            slots.properties_table,
            "| `min` | number | 0 | ✗ | 最小値 |\n| `step` | number | - | ✗ |  |"
        );
        assert_eq!(slots.properties_detail, "#### min\n最小値\n\n#### step\nstepを指定します。");
        assert_eq!(slots.basic_usage, "```astro\n<NumericUpDown min={0} />\n```");
        assert_eq!(slots.usage_notes, "小数は未対応");
        assert!(slots.typescript_implementation.contains("  min?: number;"));
    }

    #[test]
    fn test_defaults_for_sparse_record() {
        let record = NormalizedRecord::from_literals("Spinner", "", None);
        let slots = generate(&record);

        assert_eq!(slots.purpose, "Spinnerを実現するコンポーネントです。");
        assert!(slots.key_features.starts_with("- Windows Forms風の視覚デザイン"));
        assert_eq!(slots.properties_table, DEFAULT_PROPERTIES_TABLE);
        assert_eq!(slots.properties_table.lines().count(), 1);
        assert!(slots.properties_table.starts_with("| `variant` |"));
        assert!(slots.basic_usage.contains("<Spinner />"));
        assert!(slots.usage_notes.contains("UIの一貫性"));
    }

    #[test]
    fn test_description_feeds_purpose_and_features() {
        let record = NormalizedRecord::from_literals("Spinner", "up/down numeric stepper", None);
        let slots = generate(&record);

        assert_eq!(slots.purpose, "up/down numeric stepper");
        assert!(slots.key_features.starts_with("- up/down numeric stepper\n"));
    }
}
