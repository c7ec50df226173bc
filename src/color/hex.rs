use crate::foundation::core::Rgba8;
use crate::foundation::error::{GaltonError, GaltonResult};
use serde::{Deserialize, Serialize};

/// Parse a CSS-style colour string.
///
/// Accepted forms (case-insensitive, surrounding whitespace ignored):
/// - `#RRGGBB` and `#RRGGBBAA`
/// - `rgb(r, g, b)` and `rgba(r, g, b, a)` with `r,g,b` in `0..=255` and `a` in `0.0..=1.0`
pub fn parse_color(s: &str) -> GaltonResult<Rgba8> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgba_args(args);
    }
    Err(GaltonError::validation(format!(
        "unrecognized color \"{s}\" (expected #RRGGBB, #RRGGBBAA or rgba(r, g, b, a))"
    )))
}

/// Format as lowercase `#rrggbb`, or `#rrggbbaa` when not fully opaque.
pub fn format_hex(c: Rgba8) -> String {
    if c.a == 255 {
        format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
    }
}

fn parse_hex(s: &str) -> GaltonResult<Rgba8> {
    fn hex_byte(pair: &str) -> GaltonResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| GaltonError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if !s.is_ascii() {
        return Err(GaltonError::validation("hex color must be ASCII"));
    }
    match s.len() {
        6 => Ok(Rgba8::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Rgba8::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err(GaltonError::validation(
            "hex color must be #RRGGBB or #RRGGBBAA",
        )),
    }
}

fn parse_rgba_args(args: &str) -> GaltonResult<Rgba8> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(GaltonError::validation(
            "rgb()/rgba() expects 3 or 4 comma-separated components",
        ));
    }

    let channel = |p: &str| -> GaltonResult<u8> {
        p.parse::<u8>()
            .map_err(|_| GaltonError::validation(format!("invalid color channel \"{p}\"")))
    };
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = match parts.get(3) {
        Some(p) => {
            let a: f64 = p
                .parse()
                .map_err(|_| GaltonError::validation(format!("invalid alpha \"{p}\"")))?;
            if !(0.0..=1.0).contains(&a) {
                return Err(GaltonError::validation("alpha must be within 0.0..=1.0"));
            }
            (a * 255.0).round() as u8
        }
        None => 255,
    };
    Ok(Rgba8::rgba(r, g, b, a))
}

impl Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format_hex(*self))
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) => parse_color(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => match v.as_slice() {
                &[r, g, b] => Ok(Rgba8::rgb(r, g, b)),
                &[r, g, b, a] => Ok(Rgba8::rgba(r, g, b, a)),
                _ => Err(serde::de::Error::custom(
                    "color array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/hex.rs"]
mod tests;
