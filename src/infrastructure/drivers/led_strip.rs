use smart_leds::SmartLedsWrite;
use wordclock_composer::{LED_COUNT, LedDriver, Rgb};

use crate::logging::log_warn;

/// LED driver over any `smart-leds` writer
///
/// Wraps a WS2812 adapter (RMT, SPI or bit-banged) so the clock engine can
/// drive it. Write errors are counted and logged, the next tick retries.
pub struct SmartLedsDriver<W> {
    writer: W,
    failed_writes: u32,
}

impl<W> SmartLedsDriver<W> {
    /// Create a new driver
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            failed_writes: 0,
        }
    }

    /// Number of frames the writer rejected
    pub const fn failed_writes(&self) -> u32 {
        self.failed_writes
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W> LedDriver<LED_COUNT> for SmartLedsDriver<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, colors: &[Rgb; LED_COUNT]) {
        if self.writer.write(colors.iter().copied()).is_err() {
            self.failed_writes = self.failed_writes.saturating_add(1);
            log_warn!("clock: led write failed ({} so far)", self.failed_writes);
        }
    }
}
