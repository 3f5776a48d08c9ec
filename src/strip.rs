//! Strip table
//!
//! Each configured strip owns a contiguous range of the shared
//! [`PixelBuffer`](crate::buffer::PixelBuffer). Slots are appended in
//! configuration order and never reset, so offsets only grow.

use core::ops::Range;

#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;

use crate::buffer::PixelBuffer;
use crate::color::{COLOR_DEPTH, ColorOrder};
use crate::config::OutputMode;
use crate::error::ConfigError;

/// Abstract strip output trait
///
/// Implement this trait to push pixel data to real hardware. The
/// controller calls it once per changed strip on every SHOW.
pub trait StripDriver {
    type Error: core::fmt::Debug;

    /// Write the strip's pixel range to its output
    ///
    /// `pixels` is the whole shared buffer; use [`Strip::bytes`] to get the
    /// strip's own range.
    fn sync(&mut self, strip: &Strip, pixels: &[u8]) -> Result<(), Self::Error>;
}

/// One physical LED chain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strip {
    output: Option<u8>,
    length: usize,
    offset: usize,
    order: ColorOrder,
    changed: bool,
}

impl Strip {
    /// Output selector (pin or channel), `None` until bound
    pub const fn output(&self) -> Option<u8> {
        self.output
    }

    pub fn set_output(&mut self, output: u8) {
        self.output = Some(output);
    }

    /// Number of pixels, 0 means unused
    pub const fn length(&self) -> usize {
        self.length
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = length;
    }

    /// First pixel of this strip within the shared buffer
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
    }

    /// Channel order requested when this strip was configured
    pub const fn order(&self) -> ColorOrder {
        self.order
    }

    pub const fn is_changed(&self) -> bool {
        self.changed
    }

    /// Pixel indices covered by this strip
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.length
    }

    pub const fn contains(&self, pixel_index: usize) -> bool {
        pixel_index >= self.offset && pixel_index < self.offset + self.length
    }

    /// Slice this strip's bytes out of the shared buffer
    ///
    /// Yields an empty slice when the buffer does not cover the strip.
    pub fn bytes<'b>(&self, pixels: &'b [u8]) -> &'b [u8] {
        let range = self.range();
        pixels
            .get(range.start * COLOR_DEPTH..range.end * COLOR_DEPTH)
            .unwrap_or(&[])
    }
}

/// One decoded CONFIG entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripEntry {
    /// Output selector, ignored in fixed output mode
    pub pin: u8,
    /// Raw 2-bit color order code
    pub order_code: u8,
    pub length: u16,
}

/// Result of a successful configuration batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSummary {
    /// Strips appended by this batch
    pub added: usize,
    /// Configured strips in total
    pub strips: usize,
    /// Pixels across all strips
    pub pixel_count: usize,
}

/// Outcome of a sync pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub synced: usize,
    pub failed: usize,
}

/// Bounded table of configured strips
#[derive(Debug, Clone)]
pub struct StripRegistry<const MAX_STRIPS: usize> {
    strips: Vec<Strip, MAX_STRIPS>,
    output_mode: OutputMode,
    total_pixels: usize,
}

impl<const MAX_STRIPS: usize> StripRegistry<MAX_STRIPS> {
    pub const fn new(output_mode: OutputMode) -> Self {
        Self {
            strips: Vec::new(),
            output_mode,
            total_pixels: 0,
        }
    }

    pub fn strips(&self) -> &[Strip] {
        &self.strips
    }

    pub fn get(&self, slot: usize) -> Option<&Strip> {
        self.strips.get(slot)
    }

    /// Number of configured strips
    pub fn len(&self) -> usize {
        self.strips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strips.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        MAX_STRIPS
    }

    pub const fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Sum of all configured strip lengths
    pub const fn total_pixels(&self) -> usize {
        self.total_pixels
    }

    pub fn is_changed(&self, slot: usize) -> bool {
        self.strips.get(slot).is_some_and(Strip::is_changed)
    }

    /// Append one strip per entry and resize the buffer to the new total
    ///
    /// Every entry's color order is applied to the buffer's active order,
    /// so the last recognized one wins. Entries that do not fit a free slot
    /// are dropped; the ones before them stay configured. The buffer is only
    /// reallocated when the pixel total changes.
    #[allow(clippy::cast_possible_truncation)]
    pub fn configure<I, const MAX_PIXELS: usize>(
        &mut self,
        entries: I,
        buffer: &mut PixelBuffer<MAX_PIXELS>,
    ) -> Result<ConfigSummary, ConfigError>
    where
        I: IntoIterator<Item = StripEntry>,
    {
        let mut entries = entries.into_iter().peekable();
        if entries.peek().is_none() {
            return Err(ConfigError::Malformed);
        }

        let previous_total = self.total_pixels;
        let mut added = 0;
        let mut overflow = false;
        for entry in entries {
            let slot = self.strips.len();
            if self.strips.is_full() {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[StripRegistry.configure] no free slot for strip {}, {} max",
                    slot, MAX_STRIPS
                );
                overflow = true;
                break;
            }

            let mut strip = Strip::default();
            strip.set_output(match self.output_mode {
                OutputMode::Explicit => entry.pin,
                OutputMode::Fixed { start_pin } => start_pin.wrapping_add(slot as u8),
            });

            let policy = buffer.policy_mut();
            policy.set_raw(entry.order_code);
            strip.order = policy.order();

            strip.set_length(usize::from(entry.length));
            strip.set_offset(self.total_pixels);
            self.total_pixels += strip.length();
            // Capacity checked above
            let _ = self.strips.push(strip);
            added += 1;
        }

        // Pixels written so far survive a batch that adds none
        let resized = if self.total_pixels == previous_total {
            Ok(())
        } else {
            buffer.resize(self.total_pixels)
        };

        if overflow {
            return Err(ConfigError::TooManyStrips {
                capacity: MAX_STRIPS,
                configured: added,
                buffer: resized.err(),
            });
        }
        resized?;

        Ok(ConfigSummary {
            added,
            strips: self.strips.len(),
            pixel_count: self.total_pixels,
        })
    }

    /// Slot of the first strip whose range holds `pixel_index`
    pub fn owner_of(&self, pixel_index: usize) -> Option<usize> {
        self.strips
            .iter()
            .position(|strip| strip.contains(pixel_index))
    }

    /// Flag the strip holding `pixel_index` for the next sync
    ///
    /// Returns the slot that was marked.
    pub fn mark_changed(&mut self, pixel_index: usize) -> Option<usize> {
        let slot = self.owner_of(pixel_index)?;
        self.strips[slot].changed = true;
        Some(slot)
    }

    pub fn mark_all_changed(&mut self) {
        for strip in &mut self.strips {
            strip.changed = true;
        }
    }

    /// Visit every strip with pending changes and clear its flag
    ///
    /// Strips without pixels are skipped but still cleared.
    pub fn for_each_due_for_sync<F>(&mut self, pixels: &[u8], mut f: F)
    where
        F: FnMut(&Strip, &[u8]),
    {
        for strip in &mut self.strips {
            if strip.length > 0 && strip.changed {
                f(strip, pixels);
            }
            strip.changed = false;
        }
    }

    /// Push every changed strip through `driver`
    ///
    /// Flags are cleared whether or not the driver succeeds.
    pub fn sync_due<D: StripDriver>(&mut self, pixels: &[u8], driver: &mut D) -> SyncReport {
        let mut report = SyncReport::default();
        self.for_each_due_for_sync(pixels, |strip, pixels| {
            match driver.sync(strip, pixels) {
                Ok(()) => report.synced += 1,
                Err(_e) => {
                    #[cfg(feature = "esp32-log")]
                    println!(
                        "[StripRegistry.sync_due] strip at offset {} failed: {:?}",
                        strip.offset(),
                        _e
                    );
                    report.failed += 1;
                }
            }
        });
        report
    }
}
