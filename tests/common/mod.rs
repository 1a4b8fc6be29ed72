//! Shared test infrastructure for led-strip-state integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use led_strip_state::{RGB8, Srgb, StripDriver};

// ============================================================================
// Mock Strip Driver
// ============================================================================

/// Mock driver that records every pending color and counts `show` calls
pub struct MockDriver {
    calls: heapless::Vec<(usize, RGB8), 64>,
    shows: usize,
    /// Number of `set_pixel_color` calls made before the first `show`
    sets_before_first_show: Option<usize>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self {
            calls: heapless::Vec::new(),
            shows: 0,
            sets_before_first_show: None,
        }
    }

    pub fn calls(&self) -> &[(usize, RGB8)] {
        &self.calls
    }

    pub fn show_count(&self) -> usize {
        self.shows
    }

    pub fn sets_before_first_show(&self) -> Option<usize> {
        self.sets_before_first_show
    }

    pub fn reset(&mut self) {
        self.calls.clear();
        self.shows = 0;
        self.sets_before_first_show = None;
    }
}

impl StripDriver for MockDriver {
    fn set_pixel_color(&mut self, index: usize, color: RGB8) {
        let _ = self.calls.push((index, color));
    }

    fn show(&mut self) {
        if self.sets_before_first_show.is_none() {
            self.sets_before_first_show = Some(self.calls.len());
        }
        self.shows += 1;
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    colors_equal_epsilon(a, b, 0.001)
}

/// Compare two colors with custom epsilon
pub fn colors_equal_epsilon(a: Srgb, b: Srgb, epsilon: f32) -> bool {
    (a.red - b.red).abs() < epsilon
        && (a.green - b.green).abs() < epsilon
        && (a.blue - b.blue).abs() < epsilon
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}
