//! Color normalization shared by every output format.
//!
//! Input colors come from the editor as `rgb(...)`, `rgba(...)` or 6-digit
//! hex strings. Each is reduced to an sRGB triple plus the color's own alpha.
//! The alpha is kept apart from the config's `opacity` field; the two are
//! only multiplied when a final CSS value is written.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use palette::Srgb;
use regex::Regex;

use crate::units::css_number;

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*([\d.]+)\s*)?\)$")
        .expect("rgb() pattern is valid")
});

static HEX6: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?[0-9a-fA-F]{6}$").expect("hex pattern is valid")
});

/// A normalized color: sRGB triple plus its own alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlassColor {
    /// The color channels, 0-255.
    pub rgb: Srgb<u8>,
    /// The color's own alpha (0.0-1.0). `1.0` for hex and `rgb()` input.
    pub alpha: f64,
}

impl GlassColor {
    /// Opaque white, the fallback for anything unparseable.
    pub const WHITE: Self = Self {
        rgb: Srgb::new(255, 255, 255),
        alpha: 1.0,
    };

    /// Creates a color from channels and alpha. Alpha is clamped to 0-1.
    pub fn new(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self {
            rgb: Srgb::new(r, g, b),
            alpha: clamp_alpha(alpha),
        }
    }

    /// Parses `rgb()`, `rgba()` or 6-digit hex (with or without `#`).
    ///
    /// Channel values above 255 saturate at 255.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        if let Some(caps) = RGB_FUNCTION.captures(input) {
            let channel = |i: usize| -> u8 {
                caps.get(i)
                    .and_then(|m| m.as_str().parse::<u32>().ok())
                    .map_or(255, |v| v.min(255) as u8)
            };
            let alpha = caps
                .get(4)
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .unwrap_or(1.0);
            return Some(Self::new(channel(1), channel(2), channel(3), alpha));
        }

        if HEX6.is_match(input) {
            let rgb = Srgb::<u8>::from_str(input).ok()?;
            return Some(Self { rgb, alpha: 1.0 });
        }

        None
    }

    /// Parses a color, falling back to opaque white.
    pub fn normalize(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|| {
            tracing::debug!("Unparseable color {input:?}, using white");
            Self::WHITE
        })
    }

    /// Returns the `(r, g, b)` triple.
    pub fn rgb_tuple(&self) -> (u8, u8, u8) {
        (self.rgb.red, self.rgb.green, self.rgb.blue)
    }

    /// Writes `rgba(r, g, b, alpha)` with an explicit alpha.
    pub fn rgba_with_alpha(&self, alpha: f64) -> String {
        let (r, g, b) = self.rgb_tuple();
        format!("rgba({r}, {g}, {b}, {})", css_number(clamp_alpha(alpha)))
    }

    /// Writes the color with its own alpha.
    pub fn to_css(&self) -> String {
        self.rgba_with_alpha(self.alpha)
    }

    /// Writes the color with its own alpha multiplied by `opacity`.
    pub fn composite(&self, opacity: f64) -> String {
        self.rgba_with_alpha(self.alpha * opacity)
    }

    /// Writes `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.rgb_tuple();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Writes a space-free `rgba(r,g,b,a)` usable inside a Tailwind
    /// arbitrary value.
    pub fn to_compact_css(&self) -> String {
        let (r, g, b) = self.rgb_tuple();
        format!("rgba({r},{g},{b},{})", css_number(self.alpha))
    }
}

impl Default for GlassColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for GlassColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) }
}
