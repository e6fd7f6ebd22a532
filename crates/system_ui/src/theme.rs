//! Theme palette, color model, and shared design tokens.
//!
//! The palette only carries base roles. Hover, pressed, and disabled shades are derived from it
//! by [`crate::ButtonColors`], so overriding a single base color in configuration keeps every
//! derived state consistent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced while parsing a hex color string.
pub enum ColorParseError {
    /// The string did not start with `#`.
    #[error("color `{0}` must start with `#`")]
    MissingHash(String),
    /// The string had an unsupported number of digits.
    #[error("color `{0}` must have 3, 6, or 8 hex digits")]
    InvalidLength(String),
    /// The string contained a non-hex character.
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// 8-bit RGBA color.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Color from channels including alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rgb`, `#rrggbb`, or `#rrggbbaa`.
    pub fn parse_hex(raw: &str) -> Result<Self, ColorParseError> {
        let trimmed = raw.trim();
        let Some(digits) = trimmed.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(raw.to_string()));
        };
        if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(raw.to_string()));
        }
        let channel = |start: usize, len: usize| -> u8 {
            let value = u8::from_str_radix(&digits[start..start + len], 16).unwrap_or(0);
            if len == 1 {
                value * 17
            } else {
                value
            }
        };
        match digits.len() {
            3 => Ok(Self::rgb(channel(0, 1), channel(1, 1), channel(2, 1))),
            6 => Ok(Self::rgb(channel(0, 2), channel(2, 2), channel(4, 2))),
            8 => Ok(Self::rgba(
                channel(0, 2),
                channel(2, 2),
                channel(4, 2),
                channel(6, 2),
            )),
            _ => Err(ColorParseError::InvalidLength(raw.to_string())),
        }
    }

    /// Lowercase hex form; alpha is only emitted when not opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// CSS `rgba()` form.
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            f32::from(self.a) / 255.0
        )
    }

    /// Moves `amount` of the way from `self` toward `other`, channel by channel.
    pub fn mix(self, other: Self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let lerp = |from: u8, to: u8| -> u8 {
            let from = f32::from(from);
            let to = f32::from(to);
            (from + (to - from) * amount).round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: lerp(self.a, other.a),
        }
    }

    /// Same color with alpha replaced by `opacity` in `[0, 1]`.
    pub fn with_alpha(self, opacity: f32) -> Self {
        Self {
            a: (opacity.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(raw)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&raw)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Base color roles of the shell theme.
pub struct ThemePalette {
    /// Panel and button surface.
    pub layer: Color,
    /// Content on [`ThemePalette::layer`].
    pub on_layer: Color,
    /// Accent used for checked controls.
    pub primary: Color,
    /// Content on [`ThemePalette::primary`].
    pub on_primary: Color,
    /// Tonal button surface.
    pub secondary_container: Color,
    /// Content on [`ThemePalette::secondary_container`].
    pub on_secondary_container: Color,
    /// Slider track.
    pub outline: Color,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            layer: Color::rgb(0x21, 0x1f, 0x26),
            on_layer: Color::rgb(0xe6, 0xe0, 0xe9),
            primary: Color::rgb(0xd0, 0xbc, 0xff),
            on_primary: Color::rgb(0x38, 0x1e, 0x72),
            secondary_container: Color::rgb(0x4a, 0x44, 0x58),
            on_secondary_container: Color::rgb(0xe8, 0xde, 0xf8),
            outline: Color::rgb(0x93, 0x8f, 0x99),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Eased transition used for cosmetic animation.
pub struct TransitionCurve {
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Cubic-bezier control points `x1, y1, x2, y2`.
    pub bezier: [f32; 4],
}

impl TransitionCurve {
    /// Short curve for color changes.
    pub const EFFECTS: Self = Self {
        duration_ms: 200,
        bezier: [0.34, 0.8, 0.34, 1.0],
    };

    /// Springy curve for position changes.
    pub const SPATIAL: Self = Self {
        duration_ms: 350,
        bezier: [0.38, 1.21, 0.22, 1.0],
    };

    /// CSS `transition` value for one property.
    pub fn css(&self, property: &str) -> String {
        let [x1, y1, x2, y2] = self.bezier;
        format!(
            "{property} {}ms cubic-bezier({x1}, {y1}, {x2}, {y2})",
            self.duration_ms
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Non-color design tokens.
pub struct ThemeTokens {
    /// Small corner radius in px.
    pub radius_small: u16,
    /// Default corner radius in px.
    pub radius_normal: u16,
    /// Pill radius in px.
    pub radius_full: u16,
    /// Text font family.
    pub font_main: String,
    /// Icon font family (ligature glyphs).
    pub font_icon: String,
    /// Color transition.
    pub effects: TransitionCurve,
    /// Position transition.
    pub spatial: TransitionCurve,
    /// Hover delay before tooltips show.
    pub tooltip_delay_ms: u64,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            radius_small: 8,
            radius_normal: 12,
            radius_full: 9999,
            font_main: "Rubik".to_string(),
            font_icon: "Material Symbols Rounded".to_string(),
            effects: TransitionCurve::EFFECTS,
            spatial: TransitionCurve::SPATIAL,
            tooltip_delay_ms: crate::tooltip::DEFAULT_TOOLTIP_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Theme provided to primitives through Leptos context.
pub struct Theme {
    /// Color roles.
    pub palette: ThemePalette,
    /// Radii, fonts, and transitions.
    pub tokens: ThemeTokens,
}
