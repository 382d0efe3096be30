use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

use super::color_names::NAMED_COLORS;

/// RGBA color with 8-bit color channels and a `0..=1` alpha channel.
///
/// This is the value form of every color the layout pipeline touches: the
/// configured scheme, explicit series colors, and the resolved fill/hover
/// colors of each layer. It (de)serializes as a CSS color string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Builds a color from unbounded float channels.
    ///
    /// Color channels are clamped to `0..=255` and floored; alpha is clamped
    /// to `0..=1`.
    #[must_use]
    pub fn from_channels(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: floor_byte(r),
            g: floor_byte(g),
            b: floor_byte(b),
            a: clamp_unit(a),
        }
    }

    /// Parses a CSS color: keywords, `#rgb`, `#rrggbb`, `rgb()`, `rgba()`,
    /// `hsl()` and `hsla()`.
    pub fn parse(input: &str) -> ChartResult<Self> {
        parse_css_color(input).ok_or_else(|| ChartError::InvalidColor {
            input: input.to_owned(),
        })
    }

    /// Returns the channels as floats, for interpolation.
    #[must_use]
    pub fn channels(self) -> [f64; 4] {
        [
            f64::from(self.r),
            f64::from(self.g),
            f64::from(self.b),
            self.a,
        ]
    }

    /// Scales each color channel by `multiplier`, leaving alpha unchanged.
    ///
    /// Results above 255 saturate.
    #[must_use]
    pub fn scaled(self, multiplier: f64) -> Self {
        let [r, g, b, a] = self.channels();
        Self::from_channels(
            (r * multiplier).min(255.0),
            (g * multiplier).min(255.0),
            (b * multiplier).min(255.0),
            a,
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let input = String::deserialize(deserializer)?;
        Self::parse(&input).map_err(serde::de::Error::custom)
    }
}

fn floor_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).floor() as u8
}

fn round_byte(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

fn parse_css_color(input: &str) -> Option<Rgba> {
    let normalized: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    if normalized == "transparent" {
        return Some(Rgba::new(0, 0, 0, 0.0));
    }
    if let Ok(index) = NAMED_COLORS.binary_search_by(|(name, _)| (*name).cmp(normalized.as_str()))
    {
        let [r, g, b] = NAMED_COLORS[index].1;
        return Some(Rgba::opaque(r, g, b));
    }

    if let Some(hex) = normalized.strip_prefix('#') {
        return parse_hex(hex);
    }

    let open = normalized.find('(')?;
    let body = normalized[open + 1..].strip_suffix(')')?;
    if body.contains(')') {
        return None;
    }
    let function = &normalized[..open];
    let mut params: Vec<&str> = body.split(',').collect();

    match function {
        "rgb" | "rgba" => {
            let alpha = match (function, params.len()) {
                ("rgba", 4) => parse_css_float(params.pop()?)?,
                ("rgb", 3) => 1.0,
                _ => return None,
            };
            Some(Rgba::new(
                parse_css_int(params[0])?,
                parse_css_int(params[1])?,
                parse_css_int(params[2])?,
                alpha,
            ))
        }
        "hsl" | "hsla" => {
            let alpha = match (function, params.len()) {
                ("hsla", 4) => parse_css_float(params.pop()?)?,
                ("hsl", 3) => 1.0,
                _ => return None,
            };
            let hue = leading_number(params[0], true)?.rem_euclid(360.0) / 360.0;
            let saturation = parse_css_float(params[1])?;
            let lightness = parse_css_float(params[2])?;
            let m2 = if lightness <= 0.5 {
                lightness * (saturation + 1.0)
            } else {
                lightness + saturation - lightness * saturation
            };
            let m1 = lightness * 2.0 - m2;
            Some(Rgba::new(
                round_byte(hue_to_rgb(m1, m2, hue + 1.0 / 3.0) * 255.0),
                round_byte(hue_to_rgb(m1, m2, hue) * 255.0),
                round_byte(hue_to_rgb(m1, m2, hue - 1.0 / 3.0) * 255.0),
                alpha,
            ))
        }
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    match hex.len() {
        3 => {
            let r = ((value & 0xf00) >> 4) | ((value & 0xf00) >> 8);
            let g = (value & 0xf0) | ((value & 0xf0) >> 4);
            let b = (value & 0xf) | ((value & 0xf) << 4);
            Some(Rgba::opaque(r as u8, g as u8, b as u8))
        }
        6 => Some(Rgba::opaque(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )),
        _ => None,
    }
}

/// Integer channel or percentage, rounded and clamped to a byte.
fn parse_css_int(token: &str) -> Option<u8> {
    match token.strip_suffix('%') {
        Some(percent) => Some(round_byte(leading_number(percent, true)? / 100.0 * 255.0)),
        None => Some(round_byte(leading_number(token, false)?)),
    }
}

/// Float channel or percentage, clamped to `0..=1`.
fn parse_css_float(token: &str) -> Option<f64> {
    match token.strip_suffix('%') {
        Some(percent) => Some(clamp_unit(leading_number(percent, true)? / 100.0)),
        None => Some(clamp_unit(leading_number(token, true)?)),
    }
}

/// Parses the longest numeric prefix of `token`.
///
/// With `fractional == false` only the integer part is read, so `"12.7"`
/// yields `12`.
fn leading_number(token: &str, fractional: bool) -> Option<f64> {
    let bytes = token.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > digits_start;
    if fractional && end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        if fraction_end > fraction_start {
            has_digits = true;
            end = fraction_end;
        } else if has_digits {
            end = fraction_start;
        }
    }
    if !has_digits {
        return None;
    }
    token[..end].parse().ok()
}

fn hue_to_rgb(m1: f64, m2: f64, mut hue: f64) -> f64 {
    if hue < 0.0 {
        hue += 1.0;
    } else if hue > 1.0 {
        hue -= 1.0;
    }

    if hue * 6.0 < 1.0 {
        return m1 + (m2 - m1) * hue * 6.0;
    }
    if hue * 2.0 < 1.0 {
        return m2;
    }
    if hue * 3.0 < 2.0 {
        return m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0;
    }
    m1
}
