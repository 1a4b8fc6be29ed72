//! Fixed-capacity pixel state store.
//!
//! Provides [`PixelStrip`], which owns one [`Pixel`] per LED and pushes their
//! colors to a [`StripDriver`].

use crate::driver::StripDriver;
use crate::logging::{debug, trace};
use crate::types::{Pixel, PixelError, PixelId};
use heapless::Vec;

/// Color state for every LED on a strip.
///
/// The strip length is fixed when the strip is created and never changes.
/// Pixel `i` always sits at position `i` and carries `PixelId(i)`. Storage is
/// inline, so no allocator is needed.
///
/// # Type Parameters
/// * `N` - Maximum number of pixels this strip can hold
#[derive(Debug, Clone)]
pub struct PixelStrip<const N: usize> {
    pixels: Vec<Pixel, N>,
}

impl<const N: usize> PixelStrip<N> {
    /// Creates a strip of `len` pixels in the default state.
    ///
    /// `len` must match the physical strip; that is not checked here.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `len` is larger than `N`
    pub fn new(len: usize) -> Result<Self, PixelError> {
        if len > N {
            return Err(PixelError::CapacityExceeded {
                requested: len,
                capacity: N,
            });
        }

        let mut pixels = Vec::new();
        for i in 0..len {
            // Cannot fail, len <= N.
            let _ = pixels.push(Pixel::new(PixelId(i)));
        }

        debug!("created pixel strip with {} of {} pixels", len, N);
        Ok(Self { pixels })
    }

    /// Creates a strip using the full capacity `N`.
    pub fn full() -> Self {
        Self {
            pixels: (0..N).map(|i| Pixel::new(PixelId(i))).collect(),
        }
    }

    /// Number of pixels on the strip.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Returns `true` if the strip has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Maximum number of pixels, `N`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the pixel at `id`, or `None` past the end.
    #[inline]
    pub fn get(&self, id: PixelId) -> Option<&Pixel> {
        self.pixels.get(id.0)
    }

    /// Returns the pixel at `id` for mutation, or `None` past the end.
    #[inline]
    pub fn get_mut(&mut self, id: PixelId) -> Option<&mut Pixel> {
        self.pixels.get_mut(id.0)
    }

    /// Returns the pixel at `id`.
    ///
    /// # Errors
    /// * `IndexOutOfBounds` - `id` is not below [`len`](Self::len)
    pub fn pixel(&self, id: PixelId) -> Result<&Pixel, PixelError> {
        let len = self.len();
        self.pixels
            .get(id.0)
            .ok_or(PixelError::IndexOutOfBounds { id, len })
    }

    /// Returns the pixel at `id` for mutation.
    ///
    /// # Errors
    /// * `IndexOutOfBounds` - `id` is not below [`len`](Self::len)
    pub fn pixel_mut(&mut self, id: PixelId) -> Result<&mut Pixel, PixelError> {
        let len = self.len();
        self.pixels
            .get_mut(id.0)
            .ok_or(PixelError::IndexOutOfBounds { id, len })
    }

    /// All pixels in strip order.
    #[inline]
    pub fn as_slice(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Iterates pixels in strip order.
    pub fn iter(&self) -> core::slice::Iter<'_, Pixel> {
        self.pixels.iter()
    }

    /// Iterates pixels in strip order for mutation.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Pixel> {
        self.pixels.iter_mut()
    }

    /// Sets the same HSV on every pixel. RGB fields are untouched.
    pub fn set_hsv_all(&mut self, hue: f32, saturation: f32, value: f32) {
        for pixel in self.pixels.iter_mut() {
            pixel.set_hsv(hue, saturation, value);
        }
    }

    /// Sets the same RGB on every pixel. HSV fields are untouched.
    pub fn set_rgb_all(&mut self, red: u8, green: u8, blue: u8) {
        for pixel in self.pixels.iter_mut() {
            pixel.set_rgb(red, green, blue);
        }
    }

    /// Advances every pixel's hue by `step`, see [`Pixel::advance_hue`].
    pub fn advance_hue_all(&mut self, step: f32) {
        for pixel in self.pixels.iter_mut() {
            pixel.advance_hue(step);
        }
    }

    /// Converts each pixel's HSV to RGB, hands it to `driver`, then shows.
    ///
    /// `show` is called exactly once, after every pixel has been set.
    pub fn show_hsv<D: StripDriver>(&self, driver: &mut D) {
        trace!("showing {} pixels from hsv", self.len());
        for pixel in self.pixels.iter() {
            driver.set_pixel_color(pixel.id().0, pixel.hsv_to_rgb8());
        }
        driver.show();
    }

    /// Hands each pixel's stored RGB to `driver` as-is, then shows.
    pub fn show_rgb<D: StripDriver>(&self, driver: &mut D) {
        trace!("showing {} pixels from rgb", self.len());
        for pixel in self.pixels.iter() {
            driver.set_pixel_color(pixel.id().0, pixel.rgb());
        }
        driver.show();
    }
}

impl<'a, const N: usize> IntoIterator for &'a PixelStrip<N> {
    type Item = &'a Pixel;
    type IntoIter = core::slice::Iter<'a, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}

impl<'a, const N: usize> IntoIterator for &'a mut PixelStrip<N> {
    type Item = &'a mut Pixel;
    type IntoIter = core::slice::IterMut<'a, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_leds::RGB8;

    #[test]
    fn new_assigns_sequential_ids() {
        let strip = PixelStrip::<8>::new(5).unwrap();
        assert_eq!(strip.len(), 5);
        assert_eq!(strip.capacity(), 8);
        for (i, pixel) in strip.iter().enumerate() {
            assert_eq!(pixel.id(), PixelId(i));
        }
    }

    #[test]
    fn new_rejects_more_pixels_than_capacity() {
        let result = PixelStrip::<4>::new(5);
        assert_eq!(
            result.unwrap_err(),
            PixelError::CapacityExceeded {
                requested: 5,
                capacity: 4
            }
        );
    }

    #[test]
    fn empty_strip_is_allowed() {
        let strip = PixelStrip::<4>::new(0).unwrap();
        assert!(strip.is_empty());
        assert!(strip.get(PixelId(0)).is_none());
    }

    #[test]
    fn full_uses_whole_capacity() {
        let strip = PixelStrip::<6>::full();
        assert_eq!(strip.len(), 6);
        assert_eq!(strip.as_slice()[5].id(), PixelId(5));
    }

    #[test]
    fn pixel_lookup_is_bounds_checked() {
        let mut strip = PixelStrip::<8>::new(3).unwrap();
        assert!(strip.pixel(PixelId(2)).is_ok());
        assert_eq!(
            strip.pixel(PixelId(3)).unwrap_err(),
            PixelError::IndexOutOfBounds {
                id: PixelId(3),
                len: 3
            }
        );
        assert!(strip.pixel_mut(PixelId(7)).is_err());
    }

    #[test]
    fn mutation_through_pixel_mut_sticks() {
        let mut strip = PixelStrip::<4>::full();
        strip.pixel_mut(PixelId(1)).unwrap().set_rgb(0, 0, 9);
        assert_eq!(strip.pixel(PixelId(1)).unwrap().rgb(), RGB8::new(0, 0, 9));
        assert_eq!(strip.pixel(PixelId(0)).unwrap().rgb(), RGB8::new(255, 0, 0));
    }

    #[test]
    fn set_rgb_all_leaves_hsv_untouched() {
        let mut strip = PixelStrip::<4>::full();
        strip.set_hsv_all(0.25, 0.5, 0.75);
        strip.set_rgb_all(10, 20, 30);
        for pixel in &strip {
            assert_eq!(pixel.rgb(), RGB8::new(10, 20, 30));
            assert_eq!(pixel.hue(), 0.25);
            assert_eq!(pixel.saturation(), 0.5);
            assert_eq!(pixel.value(), 0.75);
        }
    }

    #[test]
    fn advance_hue_all_moves_every_pixel() {
        let mut strip = PixelStrip::<3>::full();
        for (i, pixel) in (&mut strip).into_iter().enumerate() {
            pixel.set_hue(i as f32 * 0.25);
        }
        strip.advance_hue_all(0.25);
        let hues: [f32; 3] = core::array::from_fn(|i| strip.as_slice()[i].hue());
        assert_eq!(hues, [0.25, 0.5, 0.75]);
    }
}
