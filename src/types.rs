//! Pixel records, identifiers and errors.

use crate::colors;
use smart_leds::RGB8;

/// Hue a freshly created pixel starts with.
pub const DEFAULT_HUE: f32 = 0.0;

/// Saturation a freshly created pixel starts with.
pub const DEFAULT_SATURATION: f32 = 1.0;

/// Value (brightness) a freshly created pixel starts with.
pub const DEFAULT_VALUE: f32 = 1.0;

/// RGB fields a freshly created pixel starts with (pure red).
pub const DEFAULT_RGB: RGB8 = RGB8::new(255, 0, 0);

/// Position of a pixel on the physical strip, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelId(pub usize);

impl From<usize> for PixelId {
    fn from(id: usize) -> Self {
        PixelId(id)
    }
}

impl From<PixelId> for usize {
    fn from(id: PixelId) -> Self {
        id.0
    }
}

/// Errors that can occur when creating or indexing a pixel strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelError {
    /// The pixel ID is past the end of the strip.
    IndexOutOfBounds { id: PixelId, len: usize },

    /// More pixels were requested than the strip can hold.
    CapacityExceeded { requested: usize, capacity: usize },
}

impl core::fmt::Display for PixelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PixelError::IndexOutOfBounds { id, len } => {
                write!(f, "pixel {} is out of bounds for a strip of {}", id.0, len)
            }
            PixelError::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "requested {} pixels but the strip holds at most {}",
                    requested, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PixelError {}

/// Color state of one LED.
///
/// A pixel carries two independent colors: an HSV intent and a raw RGB
/// triple. Setting one never touches the other, so the RGB fields may be
/// stale relative to the HSV fields. [`Pixel::hsv_to_rgb8`] derives RGB from
/// the HSV fields on demand without storing it.
///
/// HSV setters store their arguments as given. Nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    id: PixelId,
    hue: f32,
    saturation: f32,
    value: f32,
    rgb: RGB8,
}

impl Pixel {
    /// Creates a pixel at `id` in the default state (HSV red, RGB red).
    pub const fn new(id: PixelId) -> Self {
        Self {
            id,
            hue: DEFAULT_HUE,
            saturation: DEFAULT_SATURATION,
            value: DEFAULT_VALUE,
            rgb: DEFAULT_RGB,
        }
    }

    /// Position on the strip.
    #[inline]
    pub fn id(&self) -> PixelId {
        self.id
    }

    /// Hue, nominally 0.0-1.0.
    #[inline]
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Saturation, nominally 0.0-1.0.
    #[inline]
    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    /// Value (brightness), nominally 0.0-1.0.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The stored RGB fields, independent of the HSV fields.
    #[inline]
    pub fn rgb(&self) -> RGB8 {
        self.rgb
    }

    /// Converts the HSV fields to 8-bit RGB.
    #[inline]
    pub fn hsv_to_rgb8(&self) -> RGB8 {
        colors::hsv_to_rgb8(self.hue, self.saturation, self.value)
    }

    /// Overwrites the hue.
    #[inline]
    pub fn set_hue(&mut self, hue: f32) {
        self.hue = hue;
    }

    /// Overwrites the saturation.
    #[inline]
    pub fn set_saturation(&mut self, saturation: f32) {
        self.saturation = saturation;
    }

    /// Overwrites the value.
    #[inline]
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }

    /// Overwrites all three HSV fields.
    #[inline]
    pub fn set_hsv(&mut self, hue: f32, saturation: f32, value: f32) {
        self.hue = hue;
        self.saturation = saturation;
        self.value = value;
    }

    /// Overwrites the RGB fields. The HSV fields are left alone.
    #[inline]
    pub fn set_rgb(&mut self, red: u8, green: u8, blue: u8) {
        self.rgb = RGB8::new(red, green, blue);
    }

    /// Moves the hue `step` around the color wheel.
    ///
    /// A result above 1.0 is wrapped by subtracting 1.0 once. The wrap is not
    /// a modulo: starting at 0.5 with a step of 1.6 leaves the hue at 1.1.
    /// Conversion still treats such a hue as a point on the wheel.
    #[inline]
    pub fn advance_hue(&mut self, step: f32) {
        let mut hue = self.hue + step;
        if hue > 1.0 {
            hue -= 1.0;
        }
        self.hue = hue;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Pixel {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "Pixel {{ id: {}, hsv: ({}, {}, {}), rgb: ({}, {}, {}) }}",
            self.id,
            self.hue,
            self.saturation,
            self.value,
            self.rgb.r,
            self.rgb.g,
            self.rgb.b
        );
    }
}
