//! Color swatches for theme previews.

use crossterm::style::{Color, Stylize};

const SWATCH_BLOCK: &str = "██";

/// Parse a CSS-style color: `#rgb`, `#rrggbb`, or a basic color name.
pub fn parse_color(input: &str) -> Result<Color, String> {
    let normalized = input.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err("color value cannot be empty".to_string());
    }
    if let Some(hex) = normalized.strip_prefix('#') {
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return Err(format!("invalid hex color `{input}` (expected #RGB or #RRGGBB)")),
        };
        let channel = |range: std::ops::Range<usize>| {
            expanded
                .get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| format!("invalid hex color `{input}`"))
        };
        return Ok(Color::Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        });
    }

    let color = match normalized.as_str() {
        "black" => Color::Black,
        "gray" | "grey" => Color::Grey,
        "white" => Color::White,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        _ => return Err(format!("unsupported color value `{input}`")),
    };
    Ok(color)
}

/// A two-cell block in `value`'s color, or the raw value when color is off
/// or the value is not a plain color (gradients, `rgba(...)`).
pub fn swatch(value: &str, color: bool) -> String {
    match parse_color(value) {
        Ok(parsed) if color => SWATCH_BLOCK.with(parsed).to_string(),
        _ => format!("[{}]", value.trim()),
    }
}
