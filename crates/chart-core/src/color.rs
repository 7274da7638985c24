// File: crates/chart-core/src/color.rs
// Summary: RGBA color type with CSS-style parsing (#rgb, #rrggbb, rgb(), rgba(), a few names).

use std::str::FromStr;

use crate::error::ChartError;

/// 8-bit RGBA color, straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Alpha as a float in `[0, 1]`.
    pub fn alpha_f(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Same color with alpha multiplied by `factor` (clamped to `[0, 1]`).
    pub fn scale_alpha(self, factor: f64) -> Self {
        let a = (self.a as f64 * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// Parse a CSS color string.
    pub fn parse(input: &str) -> Result<Self, ChartError> {
        let s = input.trim();
        let err = || ChartError::InvalidColor(input.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(err);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(args).ok_or_else(err);
        }
        match lower.as_str() {
            "white" => Ok(Color::WHITE),
            "black" => Ok(Color::BLACK),
            "transparent" => Ok(Color::TRANSPARENT),
            "red" => Ok(Color::rgb(255, 0, 0)),
            "green" => Ok(Color::rgb(0, 128, 0)),
            "blue" => Ok(Color::rgb(0, 0, 255)),
            "gray" | "grey" => Ok(Color::rgb(128, 128, 128)),
            _ => Err(err()),
        }
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digit = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 => Some(Color::rgb(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

fn parse_functional(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let channel = |s: &str| -> Option<u8> {
        let v: f64 = s.parse().ok()?;
        v.is_finite().then(|| v.clamp(0.0, 255.0).round() as u8)
    };
    match parts.as_slice() {
        [r, g, b] => Some(Color::rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => {
            let a: f64 = a.parse().ok()?;
            if !a.is_finite() {
                return None;
            }
            let a = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
            Some(Color::from_argb(a, channel(r)?, channel(g)?, channel(b)?))
        }
        _ => None,
    }
}
