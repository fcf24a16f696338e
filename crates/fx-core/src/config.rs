//! User-facing effect settings. The core only reads these; the frontends own
//! the widgets that change them.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#00FFCC`.
    pub fn to_css(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::Color(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(bad)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(bad());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SparkShape {
    Circle,
    #[default]
    Star,
    Heart,
    Spray,
}

impl SparkShape {
    pub fn as_str(self) -> &'static str {
        match self {
            SparkShape::Circle => "circle",
            SparkShape::Star => "star",
            SparkShape::Heart => "heart",
            SparkShape::Spray => "spray",
        }
    }
}

impl FromStr for SparkShape {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(SparkShape::Circle),
            "star" => Ok(SparkShape::Star),
            "heart" => Ok(SparkShape::Heart),
            "spray" => Ok(SparkShape::Spray),
            other => Err(ConfigError::SparkShape(other.to_string())),
        }
    }
}

/// Stroke appearance shared by trails and persistent ink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    /// Shadow blur radius, `None` when glow is off.
    pub glow: Option<f32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FxConfig {
    pub spark_color: Color,
    pub spark_size: f32,
    pub spark_shape: SparkShape,
    pub line_color: Color,
    pub line_width: f32,
    pub line_glow: f32, // 0..50
    pub glow_enabled: bool,
    pub persistent_line: bool,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            spark_color: Color::rgb(0xFF, 0xFF, 0x00),
            spark_size: 4.0,
            spark_shape: SparkShape::Star,
            line_color: Color::rgb(0x00, 0xFF, 0xCC),
            line_width: 3.0,
            line_glow: 15.0,
            glow_enabled: true,
            persistent_line: false,
        }
    }
}

impl FxConfig {
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.line_color,
            width: self.line_width,
            glow: (self.glow_enabled && self.line_glow > 0.0).then_some(self.line_glow),
        }
    }
}
