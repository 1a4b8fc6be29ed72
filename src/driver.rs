//! Strip driver abstraction.
//!
//! [`StripDriver`] is the boundary to the hardware: it takes one pending color
//! per index and transmits them all on [`show`](StripDriver::show). Timing and
//! chipset encoding belong to the implementation.
//!
//! [`SmartLedsStrip`] adapts any `smart_leds::SmartLedsWrite` writer to this
//! trait by buffering a frame between `show` calls.

use crate::logging::{trace, warn};
use smart_leds::{RGB8, SmartLedsWrite};

/// Trait for abstracting addressable LED strip hardware.
pub trait StripDriver {
    /// Sets the pending color of the LED at `index`. Does not transmit.
    fn set_pixel_color(&mut self, index: usize, color: RGB8);

    /// Transmits every pending color to the strip.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn show(&mut self);
}

impl<D: StripDriver + ?Sized> StripDriver for &mut D {
    fn set_pixel_color(&mut self, index: usize, color: RGB8) {
        (**self).set_pixel_color(index, color);
    }

    fn show(&mut self) {
        (**self).show();
    }
}

/// Buffers a frame of `N` colors for a `SmartLedsWrite` writer.
///
/// The whole frame is written on every [`show`](StripDriver::show). Indices
/// past the frame are dropped. A failed write is kept until
/// [`take_error`](Self::take_error) is called; a later failure replaces it.
pub struct SmartLedsStrip<W: SmartLedsWrite<Color = RGB8>, const N: usize> {
    writer: W,
    frame: [RGB8; N],
    last_error: Option<W::Error>,
}

impl<W: SmartLedsWrite<Color = RGB8>, const N: usize> SmartLedsStrip<W, N> {
    /// Wraps `writer` with an all-black frame.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frame: [RGB8::default(); N],
            last_error: None,
        }
    }

    /// Colors that the next `show` will write.
    #[inline]
    pub fn frame(&self) -> &[RGB8; N] {
        &self.frame
    }

    /// Sets every pending color to black. Nothing is transmitted.
    pub fn clear(&mut self) {
        self.frame = [RGB8::default(); N];
    }

    /// Returns and clears the error from the most recent failed write.
    pub fn take_error(&mut self) -> Option<W::Error> {
        self.last_error.take()
    }

    /// The wrapped writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// The wrapped writer, for mutation.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Unwraps the writer, dropping any pending frame.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> core::fmt::Debug for SmartLedsStrip<W, N>
where
    W: SmartLedsWrite<Color = RGB8> + core::fmt::Debug,
    W::Error: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SmartLedsStrip")
            .field("writer", &self.writer)
            .field("frame", &self.frame)
            .field("last_error", &self.last_error)
            .finish()
    }
}

impl<W: SmartLedsWrite<Color = RGB8>, const N: usize> StripDriver for SmartLedsStrip<W, N> {
    fn set_pixel_color(&mut self, index: usize, color: RGB8) {
        match self.frame.get_mut(index) {
            Some(slot) => *slot = color,
            None => warn!("dropping pixel {} past frame of {}", index, N),
        }
    }

    fn show(&mut self) {
        trace!("writing frame of {} pixels", N);
        if let Err(err) = self.writer.write(self.frame.iter().copied()) {
            warn!("strip write failed");
            self.last_error = Some(err);
        }
    }
}
