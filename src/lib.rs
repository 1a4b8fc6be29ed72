#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Pixel`**: HSV intent plus an independent RGB triple for one LED
//! - **`PixelId`**: Position of a pixel on the physical strip
//! - **`PixelStrip`**: Fixed-capacity, bounds-checked collection of pixels
//! - **`StripDriver`**: Trait to implement for your LED strip hardware
//! - **`SmartLedsStrip`**: `StripDriver` adapter over any `smart_leds::SmartLedsWrite` writer
//! - **`colors`**: HSV to RGB conversion and 8-bit packing helpers
//!
//! HSV components are normalized `f32` values (0.0-1.0, hue wraps). RGB at the
//! driver boundary is `RGB8`; during conversion it is `Srgb<f32>` (0.0-1.0).

// Re-export color types for user convenience
pub use palette::Srgb;
pub use smart_leds::RGB8;

mod logging;

pub mod colors;
pub mod driver;
pub mod strip;
pub mod types;

pub use driver::{SmartLedsStrip, StripDriver};
pub use strip::PixelStrip;
pub use types::{
    DEFAULT_HUE, DEFAULT_RGB, DEFAULT_SATURATION, DEFAULT_VALUE, Pixel, PixelError, PixelId,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pixel_converts_to_default_rgb() {
        let pixel = Pixel::new(PixelId(0));
        assert_eq!(pixel.hsv_to_rgb8(), DEFAULT_RGB);
        assert_eq!(pixel.rgb(), DEFAULT_RGB);
    }
}
