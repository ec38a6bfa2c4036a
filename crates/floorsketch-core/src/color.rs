//! Color picker payloads and hex color strings.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Errors from color conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),
    #[error("Color channel out of range: {0}")]
    ChannelOutOfRange(f64),
}

/// RGB(A) channels as sent by a color picker.
///
/// `r`, `g` and `b` are in `[0, 255]`; `a` is in `[0, 1]` and defaults to opaque.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbChannels {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default)]
    pub a: Option<f64>,
}

/// A color change coming from a picker: either a hex string or RGB channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PickerColor {
    Hex { hex: String },
    Rgb { rgb: RgbChannels },
}

impl PickerColor {
    /// Convert to a color.
    pub fn to_color(&self) -> Result<Color, ColorError> {
        match self {
            PickerColor::Hex { hex } => parse_hex(hex),
            PickerColor::Rgb { rgb } => {
                let r = channel(rgb.r)?;
                let g = channel(rgb.g)?;
                let b = channel(rgb.b)?;
                let a = match rgb.a {
                    Some(alpha) if alpha.is_finite() && (0.0..=1.0).contains(&alpha) => {
                        (alpha * 255.0).round() as u8
                    }
                    Some(alpha) => return Err(ColorError::ChannelOutOfRange(alpha)),
                    None => 255,
                };
                Ok(Color::from_rgba8(r, g, b, a))
            }
        }
    }

    /// Normalised `#RRGGBB` / `#RRGGBBAA` string.
    pub fn to_hex_string(&self) -> Result<String, ColorError> {
        self.to_color().map(to_hex)
    }
}

fn channel(value: f64) -> Result<u8, ColorError> {
    if value.is_finite() && (0.0..=255.0).contains(&value) {
        Ok(value.round() as u8)
    } else {
        Err(ColorError::ChannelOutOfRange(value))
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex(color: &str) -> Result<Color, ColorError> {
    let invalid = || ColorError::InvalidHex(color.to_string());
    let hex = color.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };

    match hex.len() {
        3 => {
            // #rgb -> #rrggbb
            let r = byte(0..1)? * 17;
            let g = byte(1..2)? * 17;
            let b = byte(2..3)? * 17;
            Ok(Color::from_rgba8(r, g, b, 255))
        }
        6 => Ok(Color::from_rgba8(byte(0..2)?, byte(2..4)?, byte(4..6)?, 255)),
        8 => Ok(Color::from_rgba8(byte(0..2)?, byte(2..4)?, byte(4..6)?, byte(6..8)?)),
        _ => Err(invalid()),
    }
}

/// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
pub fn to_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}
