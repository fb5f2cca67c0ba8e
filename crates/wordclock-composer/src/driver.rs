//! Output seam between the clock engine and the LED strip.
//!
//! The clock always writes whole frames: the 110 letter cells in serpentine
//! order followed by the four minute dots.

use crate::Rgb;

/// Sink for complete frames of `N` colors
///
/// The engine uses `LedDriver<LED_COUNT>`, index `i` of the frame is strip
/// position `i`. Implementations own their error handling, a failed write must
/// not stop the next tick.
pub trait LedDriver<const N: usize> {
    fn write(&mut self, colors: &[Rgb; N]);
}
