//! Color space conversion helpers.
//!
//! HSV components are normalized floats: hue in 0.0-1.0 (one full turn of the
//! color wheel), saturation and value in 0.0-1.0. Conversions return
//! `palette::Srgb` with channels in the same normalized range, and the `*_rgb8`
//! helpers scale that down to the 8-bit channels strip drivers take.
//!
//! Inputs are never clamped. Out-of-range components produce whatever the
//! formula yields; only the 8-bit scaling saturates.

use palette::Srgb;
use palette::num::Round;
use smart_leds::RGB8;

/// Converts normalized HSV components to normalized RGB.
///
/// The hue circle is split into six sectors. Hues outside 0.0-1.0 wrap onto
/// the circle for sector selection.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Srgb {
    if saturation == 0.0 {
        return Srgb::new(value, value, value);
    }

    let scaled = hue * 6.0;
    let floor = Round::floor(scaled);
    let fractional = scaled - floor;
    let sector = (floor as i32).rem_euclid(6);

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * fractional);
    let t = value * (1.0 - saturation * (1.0 - fractional));

    let (red, green, blue) = match sector {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Srgb::new(red, green, blue)
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Srgb {
    hsv_to_rgb(hue, 1.0, 1.0)
}

/// Scales a normalized color to 8-bit channels, rounding and saturating.
#[inline]
pub fn to_rgb8(color: Srgb) -> RGB8 {
    let color: Srgb<u8> = color.into_format();
    RGB8::new(color.red, color.green, color.blue)
}

/// Converts HSV straight to the 8-bit form a strip driver expects.
#[inline]
pub fn hsv_to_rgb8(hue: f32, saturation: f32, value: f32) -> RGB8 {
    to_rgb8(hsv_to_rgb(hue, saturation, value))
}

/// Packs a color into `0x00RRGGBB`, the layout NeoPixel-style APIs use.
#[inline]
pub const fn pack_rgb(color: RGB8) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Unpacks `0x00RRGGBB`. The top byte is ignored.
#[inline]
pub const fn unpack_rgb(packed: u32) -> RGB8 {
    RGB8::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
}
