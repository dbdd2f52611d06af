//! Settings file shape shared by export and import.

use serde::{Deserialize, Serialize};

use super::types::{AnimationStyle, FieldValue, FontSize, PreferenceState};

/// Suggested file name for exported settings.
pub const EXPORT_FILE_NAME: &str = "theme-settings.json";

/// On-disk settings document.
///
/// Field names follow the durable-store keys. `themeKey` / `animationStyle`
/// are accepted as aliases on import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFile {
    #[serde(default, alias = "themeKey", skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    pub font_size: FontSize,
    pub spacing: i64,
    #[serde(alias = "animationStyle")]
    pub animation: AnimationStyle,
    pub border_radius: i64,
    pub contrast: i64,
    pub shadow: i64,
}

impl SettingsFile {
    pub fn from_state(state: &PreferenceState) -> Self {
        Self {
            theme: Some(state.theme_key.clone()),
            font_size: state.font_size,
            spacing: state.spacing,
            animation: state.animation,
            border_radius: state.border_radius,
            contrast: state.contrast,
            shadow: state.shadow,
        }
    }

    /// Decode a settings document; any type mismatch rejects the whole file.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }

    /// Every non-theme field as a typed assignment.
    pub(crate) fn field_values(&self) -> [FieldValue; 6] {
        [
            FieldValue::FontSize(self.font_size),
            FieldValue::Spacing(self.spacing),
            FieldValue::Animation(self.animation),
            FieldValue::BorderRadius(self.border_radius),
            FieldValue::Contrast(self.contrast),
            FieldValue::Shadow(self.shadow),
        ]
    }
}
