//! The fixed set of named document slots
//!
//! [`SlotSet`] and [`SLOT_KEYS`] are generated from one table, so the JSON
//! keys requested from the model, the keys accepted when parsing its answer
//! and the template placeholders cannot drift apart.

use serde::{Deserialize, Serialize};

/// Metadata for one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotKey {
    /// JSON key in the generation payload
    pub key: &'static str,
    /// Template placeholder name, without braces
    pub token: &'static str,
    /// What the model is asked to put there
    pub hint: &'static str,
}

macro_rules! define_slots {
    ($($field:ident => $key:literal, $token:literal, $hint:literal;)+) => {
        /// Rendered text for every template slot. All keys are required;
        /// unknown keys in a payload are dropped.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct SlotSet {
            $(
                #[serde(rename = $key)]
                pub $field: String,
            )+
        }

        /// Every slot, in template order
        pub const SLOT_KEYS: &[SlotKey] = &[
            $(SlotKey { key: $key, token: $token, hint: $hint },)+
        ];

        impl SlotSet {
            /// `(placeholder, value)` pairs in template order
            pub fn token_values(&self) -> Vec<(&'static str, &str)> {
                vec![$(($token, self.$field.as_str()),)+]
            }
        }
    };
}

define_slots! {
    component_title => "componentTitle", "COMPONENT_TITLE", "Windows風コンポーネント名";
    component_slug => "componentSlug", "COMPONENT_SLUG", "component-demo 形式のスラッグ";
    purpose => "purpose", "PURPOSE", "このコンポーネントの目的と役割（2-3文）";
    target_users => "targetUsers", "TARGET_USERS", "想定ユーザー（箇条書き）";
    key_features => "keyFeatures", "KEY_FEATURES", "主要機能（箇条書き）";
    visual_description => "visualDescription", "VISUAL_DESCRIPTION", "外観の説明（Windows Forms風デザイン）";
    basic_example => "basicExample", "BASIC_EXAMPLE", "基本的な使用例のAstroコード";
    design_tokens => "designTokens", "DESIGN_TOKENS", "色・サイズなどのデザイントークン（Markdown表）";
    properties_table => "propertiesTable", "PROPERTIES_TABLE", "プロパティ一覧のMarkdownテーブル行（ヘッダー行は不要）";
    properties_detail => "propertiesDetail", "PROPERTIES_DETAIL", "各プロパティの詳細説明";
    variations => "variations", "VARIATIONS", "バリエーション（variant等）の説明とコード例";
    state_transitions => "stateTransitions", "STATE_TRANSITIONS", "状態遷移図または説明";
    state_visuals => "stateVisuals", "STATE_VISUALS", "各状態（hover, active, disabled等）の外観とコード例";
    user_interactions => "userInteractions", "USER_INTERACTIONS", "マウス操作時の動作仕様";
    keyboard_interactions => "keyboardInteractions", "KEYBOARD_INTERACTIONS", "キーボード操作の仕様";
    events => "events", "EVENTS", "発生するイベント一覧";
    basic_usage => "basicUsage", "BASIC_USAGE", "基本的な使用例のコードと説明";
    practical_examples => "practicalExamples", "PRACTICAL_EXAMPLES", "実用的な使用例（2-3パターン）";
    common_patterns => "commonPatterns", "COMMON_PATTERNS", "よくある組み合わせパターン";
    aria_attributes => "ariaAttributes", "ARIA_ATTRIBUTES", "ARIA属性の使用方法";
    a11y_keyboard => "a11yKeyboard", "A11Y_KEYBOARD", "アクセシビリティ観点のキーボード操作";
    a11y_screen_reader => "a11yScreenReader", "A11Y_SCREEN_READER", "スクリーンリーダー対応";
    technical_constraints => "technicalConstraints", "TECHNICAL_CONSTRAINTS", "技術的制約事項";
    usage_notes => "usageNotes", "USAGE_NOTES", "使用上の注意点";
    known_issues => "knownIssues", "KNOWN_ISSUES", "既知の問題";
    related_components => "relatedComponents", "RELATED_COMPONENTS", "関連コンポーネント";
    references => "references", "REFERENCES", "参考リンク";
    css_implementation => "cssImplementation", "CSS_IMPLEMENTATION", "CSS実装のポイント";
    typescript_implementation => "typescriptImplementation", "TYPESCRIPT_IMPLEMENTATION", "TypeScript実装のポイント";
}

impl SlotSet {
    /// Parse a generation payload
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn payload() -> serde_json::Value {
        let mut object = serde_json::Map::new();
        for slot in SLOT_KEYS {
            object.insert(slot.key.to_string(), serde_json::Value::String(format!("<{}>", slot.key)));
        }
        serde_json::Value::Object(object)
    }

    #[test]
    fn test_slot_table_is_consistent() {
        assert_eq!(SLOT_KEYS.len(), 29);

        let keys: HashSet<_> = SLOT_KEYS.iter().map(|slot| slot.key).collect();
        let tokens: HashSet<_> = SLOT_KEYS.iter().map(|slot| slot.token).collect();
        assert_eq!(keys.len(), SLOT_KEYS.len());
        assert_eq!(tokens.len(), SLOT_KEYS.len());
    }

    #[test]
    fn test_parse_complete_payload() {
        let slots = SlotSet::from_json(&payload().to_string()).unwrap();
        assert_eq!(slots.a11y_screen_reader, "<a11yScreenReader>");
        assert_eq!(slots.typescript_implementation, "<typescriptImplementation>");

        let values = slots.token_values();
        assert_eq!(values.len(), SLOT_KEYS.len());
        assert_eq!(values[0], ("COMPONENT_TITLE", "<componentTitle>"));
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let mut value = payload();
        value["somethingElse"] = serde_json::Value::String("ignored".to_string());

        let slots = SlotSet::from_json(&value.to_string()).unwrap();
        let round_trip = serde_json::to_value(&slots).unwrap();
        assert!(round_trip.get("somethingElse").is_none());
    }

    #[test]
    fn test_missing_or_mistyped_keys_are_rejected() {
        let mut missing = payload();
        missing.as_object_mut().unwrap().remove("events");
        assert!(SlotSet::from_json(&missing.to_string()).is_err());

        let mut mistyped = payload();
        mistyped["keyFeatures"] = serde_json::json!(["a", "b"]);
        assert!(SlotSet::from_json(&mistyped.to_string()).is_err());
    }
}
