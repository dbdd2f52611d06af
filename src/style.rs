//! Named style presets derived from preferences and the active theme.
//!
//! Values are CSS fragments so the same derivation can feed a web front end;
//! the terminal renderer shows them as-is.

use crate::catalog::ThemeDefinition;
use crate::prefs::{AnimationStyle, FontSize, PreferenceState};

/// Base and heading text size in `rem`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    pub base_rem: f32,
    pub heading_rem: f32,
}

impl FontSize {
    pub fn scale(self) -> FontScale {
        let (base_rem, heading_rem) = match self {
            Self::Xs => (0.75, 1.25),
            Self::Small => (0.875, 1.5),
            Self::Medium => (1.0, 1.875),
            Self::Large => (1.125, 2.25),
            Self::Xl => (1.25, 2.5),
        };
        FontScale {
            base_rem,
            heading_rem,
        }
    }
}

impl AnimationStyle {
    /// Utility classes implementing the preset.
    pub fn css_classes(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Fade => "transition-opacity duration-300",
            Self::Scale => "transition-transform duration-300 hover:scale-105",
            Self::Bounce => "transition-transform hover:animate-bounce",
            Self::Pulse => "animate-pulse",
            Self::Spin => "animate-spin",
        }
    }
}

/// Concrete style values for the current preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTokens {
    pub font_size: String,
    pub heading_size: String,
    pub padding: String,
    pub border_radius: String,
    pub contrast_filter: String,
    pub box_shadow: String,
    pub animation_classes: &'static str,
}

impl StyleTokens {
    /// Derive tokens; the shadow tint uses the theme's `primary` slot.
    pub fn derive(prefs: &PreferenceState, theme: Option<&ThemeDefinition>) -> Self {
        let scale = prefs.font_size.scale();
        let primary = theme
            .and_then(|theme| theme.color("primary"))
            .unwrap_or("#000000");
        Self {
            font_size: format!("{}rem", trim_float(scale.base_rem)),
            heading_size: format!("{}rem", trim_float(scale.heading_rem)),
            padding: format!("{}rem", trim_float(prefs.spacing as f32 * 0.25)),
            border_radius: format!("{}px", prefs.border_radius),
            contrast_filter: format!("contrast({}%)", prefs.contrast),
            box_shadow: box_shadow(prefs.shadow, primary),
            animation_classes: prefs.animation.css_classes(),
        }
    }

    /// `(name, value)` pairs in display order.
    pub fn rows(&self) -> [(&'static str, &str); 7] {
        [
            ("font-size", &self.font_size),
            ("heading-size", &self.heading_size),
            ("padding", &self.padding),
            ("border-radius", &self.border_radius),
            ("filter", &self.contrast_filter),
            ("box-shadow", &self.box_shadow),
            ("animation", self.animation_classes),
        ]
    }
}

/// Drop shadow whose offset and blur scale with `shadow`, tinted at 25%.
pub fn box_shadow(shadow: i64, primary: &str) -> String {
    let offset = trim_float(shadow as f32 * 0.02);
    let blur = trim_float(shadow as f32 * 0.1);
    format!("0 {offset}px {blur}px {primary}40")
}

fn trim_float(value: f32) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let text = format!("{rounded}");
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::theme;

    #[test]
    fn font_scale_matches_presets() {
        assert_eq!(FontSize::Xs.scale().base_rem, 0.75);
        assert_eq!(FontSize::Medium.scale().heading_rem, 1.875);
        assert_eq!(FontSize::Xl.scale().heading_rem, 2.5);
    }

    #[test]
    fn default_tokens() {
        let tokens = StyleTokens::derive(&PreferenceState::default(), Some(&theme("t", "#fff")));
        assert_eq!(tokens.font_size, "1rem");
        assert_eq!(tokens.heading_size, "1.875rem");
        assert_eq!(tokens.padding, "1rem");
        assert_eq!(tokens.border_radius, "8px");
        assert_eq!(tokens.contrast_filter, "contrast(100%)");
        assert_eq!(tokens.box_shadow, "0 1px 5px #3366ff40");
        assert_eq!(
            tokens.animation_classes,
            "transition-transform duration-300 hover:scale-105"
        );
    }

    #[test]
    fn zero_shadow_and_missing_theme() {
        let prefs = PreferenceState {
            shadow: 0,
            spacing: 3,
            animation: AnimationStyle::None,
            ..PreferenceState::default()
        };
        let tokens = StyleTokens::derive(&prefs, None);
        assert_eq!(tokens.box_shadow, "0 0px 0px #00000040");
        assert_eq!(tokens.padding, "0.75rem");
        assert_eq!(tokens.animation_classes, "");
    }

    #[test]
    fn rows_cover_every_token() {
        let tokens = StyleTokens::derive(&PreferenceState::default(), None);
        let names: Vec<&str> = tokens.rows().iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), 7);
        assert!(names.contains(&"box-shadow"));
    }
}
