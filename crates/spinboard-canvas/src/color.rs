//! Fill and outline colors, parseable from CSS-style literals.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use spinboard_core::{Error, Result};

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const GREEN: Rgba = Rgba::opaque(0, 128, 0);
    pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);
    pub const YELLOW: Rgba = Rgba::opaque(255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses a CSS-style color literal: `#rgb`, `#rrggbb`, or one of a small
    /// set of named colors.
    pub fn from_css(value: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor {
            value: value.to_string(),
        };

        if let Some(hex) = value.strip_prefix('#') {
            let bytes = hex.as_bytes();
            let digit = |i: usize| (bytes[i] as char).to_digit(16).map(|d| d as u8);
            return match bytes.len() {
                // #rgb expands each digit, CSS-style: f -> ff
                3 => {
                    let channel = |i| digit(i).map(|d| d << 4 | d);
                    match (channel(0), channel(1), channel(2)) {
                        (Some(r), Some(g), Some(b)) => Ok(Rgba::opaque(r, g, b)),
                        _ => Err(invalid()),
                    }
                }
                6 => {
                    let channel = |i: usize| Some(digit(i)? << 4 | digit(i + 1)?);
                    match (channel(0), channel(2), channel(4)) {
                        (Some(r), Some(g), Some(b)) => Ok(Rgba::opaque(r, g, b)),
                        _ => Err(invalid()),
                    }
                }
                _ => Err(invalid()),
            };
        }

        match value.to_ascii_lowercase().as_str() {
            "black" => Ok(Rgba::BLACK),
            "white" => Ok(Rgba::WHITE),
            "red" => Ok(Rgba::RED),
            "green" => Ok(Rgba::GREEN),
            "blue" => Ok(Rgba::BLUE),
            "yellow" => Ok(Rgba::YELLOW),
            _ => Err(invalid()),
        }
    }

    /// Converts to the rasterizer's color type.
    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Rgba::from_css(s)
    }
}
