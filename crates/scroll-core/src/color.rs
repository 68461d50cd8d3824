//! Hex color parsing for the material tint control.

use crate::error::SceneError;
use std::fmt;
use std::str::FromStr;

/// An sRGB color with components in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the short `#rgb` form. The leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self, SceneError> {
        let invalid = || SceneError::InvalidColor(s.to_string());
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        // from_str_radix alone would let a sign through ("+f")
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        let (r, g, b) = match hex.len() {
            6 => (
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            ),
            3 => {
                // #abc expands to #aabbcc
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                (r * 17, g * 17, b * 17)
            }
            _ => return Err(invalid()),
        };
        Ok(Self::from_bytes(r, g, b))
    }

    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub fn to_bytes(self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Convert to linear light for shading in a `*Srgb` render target.
    pub fn to_linear(self) -> [f32; 3] {
        fn lin(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [lin(self.r), lin(self.g), lin(self.b)]
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Rgb {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_bytes();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}
