//! Preference value types, ranges, and defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::catalog::is_dark_key;
use crate::error::PreferenceError;

/// Theme selected when nothing valid is stored.
pub const DEFAULT_THEME_KEY: &str = "light1";
pub const DEFAULT_SPACING: i64 = 4;
pub const DEFAULT_BORDER_RADIUS: i64 = 8;
pub const DEFAULT_CONTRAST: i64 = 100;
pub const DEFAULT_SHADOW: i64 = 50;

pub const SPACING_RANGE: RangeInclusive<i64> = 1..=8;
pub const BORDER_RADIUS_RANGE: RangeInclusive<i64> = 0..=20;
pub const CONTRAST_RANGE: RangeInclusive<i64> = 80..=120;
pub const SHADOW_RANGE: RangeInclusive<i64> = 0..=100;

/// Base text size preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Xs,
    Small,
    #[default]
    Medium,
    Large,
    Xl,
}

impl FontSize {
    pub const ALL: [FontSize; 5] = [
        Self::Xs,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Xl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Xl => "xl",
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontSize {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == normalized)
            .ok_or_else(|| PreferenceError::InvalidValue {
                field: PreferenceField::FontSize.key(),
                value: s.to_string(),
            })
    }
}

/// Named animation preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationStyle {
    None,
    Fade,
    #[default]
    Scale,
    Bounce,
    Pulse,
    Spin,
}

impl AnimationStyle {
    pub const ALL: [AnimationStyle; 6] = [
        Self::None,
        Self::Fade,
        Self::Scale,
        Self::Bounce,
        Self::Pulse,
        Self::Spin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fade => "fade",
            Self::Scale => "scale",
            Self::Bounce => "bounce",
            Self::Pulse => "pulse",
            Self::Spin => "spin",
        }
    }
}

impl fmt::Display for AnimationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationStyle {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or_else(|| PreferenceError::InvalidValue {
                field: PreferenceField::Animation.key(),
                value: s.to_string(),
            })
    }
}

/// User-adjustable settings other than the theme itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceField {
    FontSize,
    Spacing,
    Animation,
    BorderRadius,
    Contrast,
    Shadow,
}

impl PreferenceField {
    pub const ALL: [PreferenceField; 6] = [
        Self::FontSize,
        Self::Spacing,
        Self::Animation,
        Self::BorderRadius,
        Self::Contrast,
        Self::Shadow,
    ];

    /// Durable-store key, also the field's name in settings files.
    pub fn key(self) -> &'static str {
        match self {
            Self::FontSize => "fontSize",
            Self::Spacing => "spacing",
            Self::Animation => "animation",
            Self::BorderRadius => "borderRadius",
            Self::Contrast => "contrast",
            Self::Shadow => "shadow",
        }
    }

    /// Accepted range for numeric fields.
    pub fn range(self) -> Option<RangeInclusive<i64>> {
        match self {
            Self::Spacing => Some(SPACING_RANGE),
            Self::BorderRadius => Some(BORDER_RADIUS_RANGE),
            Self::Contrast => Some(CONTRAST_RANGE),
            Self::Shadow => Some(SHADOW_RANGE),
            Self::FontSize | Self::Animation => None,
        }
    }

    /// Clamp `value` into this field's range; non-numeric fields pass through.
    pub fn clamp(self, value: i64) -> i64 {
        match self.range() {
            Some(range) => value.clamp(*range.start(), *range.end()),
            None => value,
        }
    }
}

impl fmt::Display for PreferenceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PreferenceField {
    type Err = PreferenceError;

    /// Accepts `fontSize`, `font-size`, `font_size`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|ch| *ch != '-' && *ch != '_')
            .map(|ch| ch.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|field| field.key().to_ascii_lowercase() == normalized)
            .ok_or_else(|| PreferenceError::UnknownField(s.to_string()))
    }
}

/// One typed field assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    FontSize(FontSize),
    Spacing(i64),
    Animation(AnimationStyle),
    BorderRadius(i64),
    Contrast(i64),
    Shadow(i64),
}

impl FieldValue {
    /// Parse user text for `field`. Numbers may be fractional; they round.
    pub fn parse(field: PreferenceField, raw: &str) -> Result<Self, PreferenceError> {
        let number = || {
            parse_number(raw).ok_or_else(|| PreferenceError::InvalidValue {
                field: field.key(),
                value: raw.to_string(),
            })
        };
        Ok(match field {
            PreferenceField::FontSize => Self::FontSize(raw.parse()?),
            PreferenceField::Animation => Self::Animation(raw.parse()?),
            PreferenceField::Spacing => Self::Spacing(number()?),
            PreferenceField::BorderRadius => Self::BorderRadius(number()?),
            PreferenceField::Contrast => Self::Contrast(number()?),
            PreferenceField::Shadow => Self::Shadow(number()?),
        })
    }

    pub fn field(self) -> PreferenceField {
        match self {
            Self::FontSize(_) => PreferenceField::FontSize,
            Self::Spacing(_) => PreferenceField::Spacing,
            Self::Animation(_) => PreferenceField::Animation,
            Self::BorderRadius(_) => PreferenceField::BorderRadius,
            Self::Contrast(_) => PreferenceField::Contrast,
            Self::Shadow(_) => PreferenceField::Shadow,
        }
    }
}

/// Parse a decimal number as stored or typed; fractions round to nearest.
pub(crate) fn parse_number(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.round() as i64)
}

/// Active theme plus display customization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceState {
    pub theme_key: String,
    pub font_size: FontSize,
    pub spacing: i64,
    pub animation: AnimationStyle,
    pub border_radius: i64,
    pub contrast: i64,
    pub shadow: i64,
}

impl Default for PreferenceState {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_string(),
            font_size: FontSize::default(),
            spacing: DEFAULT_SPACING,
            animation: AnimationStyle::default(),
            border_radius: DEFAULT_BORDER_RADIUS,
            contrast: DEFAULT_CONTRAST,
            shadow: DEFAULT_SHADOW,
        }
    }
}

impl PreferenceState {
    /// Derived from the key on every read; never stored.
    pub fn is_dark(&self) -> bool {
        is_dark_key(&self.theme_key)
    }

    /// Assign one field, clamping numeric values into range.
    pub(crate) fn apply_clamped(&mut self, value: FieldValue) {
        let field = value.field();
        match value {
            FieldValue::FontSize(size) => self.font_size = size,
            FieldValue::Animation(style) => self.animation = style,
            FieldValue::Spacing(n) => self.spacing = field.clamp(n),
            FieldValue::BorderRadius(n) => self.border_radius = field.clamp(n),
            FieldValue::Contrast(n) => self.contrast = field.clamp(n),
            FieldValue::Shadow(n) => self.shadow = field.clamp(n),
        }
    }

    /// Assign one field exactly as given.
    pub(crate) fn apply_raw(&mut self, value: FieldValue) {
        match value {
            FieldValue::FontSize(size) => self.font_size = size,
            FieldValue::Animation(style) => self.animation = style,
            FieldValue::Spacing(n) => self.spacing = n,
            FieldValue::BorderRadius(n) => self.border_radius = n,
            FieldValue::Contrast(n) => self.contrast = n,
            FieldValue::Shadow(n) => self.shadow = n,
        }
    }

    /// Current value of every field except the theme.
    pub fn field_values(&self) -> [FieldValue; 6] {
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

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontSize(size) => write!(f, "{size}"),
            Self::Animation(style) => write!(f, "{style}"),
            Self::Spacing(n) | Self::BorderRadius(n) | Self::Contrast(n) | Self::Shadow(n) => {
                write!(f, "{n}")
            }
        }
    }
}
