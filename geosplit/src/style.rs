//! Colors and line styles of the shapes added to the map.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Color with a fractional opacity, written as a CSS `rgba(r, g, b, a)` string.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: f32,
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from_css(&value).ok_or_else(|| format!("invalid rgba color: {value}"))
    }
}

impl From<Color> for String {
    fn from(val: Color) -> Self {
        val.to_css()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Color {
    /// Constructs color from its RGB channels and opacity in `[0, 1]` range.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts the color into CSS string: `rgba(r, g, b, a)`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Parses a color from CSS `rgba(r, g, b, a)` or `rgb(r, g, b)` notation.
    pub fn try_from_css(css: &str) -> Option<Self> {
        let css = css.trim();
        let (channels, has_alpha) = if let Some(inner) = css.strip_prefix("rgba(") {
            (inner.strip_suffix(')')?, true)
        } else {
            (css.strip_prefix("rgb(")?.strip_suffix(')')?, false)
        };

        let mut parts = channels.split(',').map(str::trim);
        let r = parts.next()?.parse().ok()?;
        let g = parts.next()?.parse().ok()?;
        let b = parts.next()?.parse().ok()?;
        let a = if has_alpha {
            parts.next()?.parse().ok()?
        } else {
            1.0
        };

        if parts.next().is_some() || !(0.0..=1.0).contains(&a) {
            return None;
        }

        Some(Self { r, g, b, a })
    }

    /// Returns a new color instance, copied from the base one but with the given opacity. The opacity is clamped
    /// into `[0, 1]` range.
    pub fn with_alpha(&self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Red component of the color.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green component of the color.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue component of the color.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Opacity of the color, from `0` (transparent) to `1`.
    pub fn a(&self) -> f32 {
        self.a
    }
}

/// How a shape added to the overlays is drawn.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Color of the shape outline.
    pub line_color: Color,
    /// Color of the shape interior.
    pub fill_color: Color,
    /// Width of the outline in pixels.
    pub line_width: f64,
}

impl ShapeStyle {
    /// Green outline with translucent green fill.
    pub const GREEN: ShapeStyle = ShapeStyle {
        line_color: Color::rgba(0, 255, 0, 0.8),
        fill_color: Color::rgba(0, 255, 0, 0.2),
        line_width: 3.0,
    };

    /// Blue outline with translucent blue fill.
    pub const BLUE: ShapeStyle = ShapeStyle {
        line_color: Color::rgba(0, 150, 255, 0.8),
        fill_color: Color::rgba(0, 150, 255, 0.2),
        line_width: 3.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_string() {
        assert_eq!(Color::rgba(0, 255, 0, 0.8).to_css(), "rgba(0, 255, 0, 0.8)");
        assert_eq!(
            ShapeStyle::BLUE.fill_color.to_css(),
            "rgba(0, 150, 255, 0.2)"
        );
    }

    #[test]
    fn parse_css() {
        assert_eq!(
            Color::try_from_css("rgba(0, 150, 255, 0.8)"),
            Some(Color::rgba(0, 150, 255, 0.8))
        );
        assert_eq!(
            Color::try_from_css("rgb(1,2,3)"),
            Some(Color::rgba(1, 2, 3, 1.0))
        );

        assert_eq!(Color::try_from_css("rgba(0, 0, 0)"), None);
        assert_eq!(Color::try_from_css("rgba(0, 0, 0, 2)"), None);
        assert_eq!(Color::try_from_css("rgb(256, 0, 0)"), None);
        assert_eq!(Color::try_from_css("#00FF00"), None);
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Color::rgba(1, 2, 3, 0.5).with_alpha(1.5).a(), 1.0);
        assert_eq!(Color::rgba(1, 2, 3, 0.5).with_alpha(-1.0).a(), 0.0);
    }

    #[test]
    fn style_serialization() {
        let json = serde_json::to_string(&ShapeStyle::GREEN).expect("serializable");
        assert_eq!(
            json,
            r#"{"line_color":"rgba(0, 255, 0, 0.8)","fill_color":"rgba(0, 255, 0, 0.2)","line_width":3.0}"#
        );

        let restored: ShapeStyle = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(restored, ShapeStyle::GREEN);

        assert!(serde_json::from_str::<Color>(r#""green""#).is_err());
    }
}
