//! Shared pixel storage for every configured strip
//!
//! Pixels of all strips are laid out back to back, three bytes each, in the
//! channel order that was active when they were written.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;

use crate::color::{COLOR_DEPTH, ColorOrder, ColorOrderPolicy, Rgb, rgb_from_u32};
use crate::error::{BufferExhausted, OutOfRange};

/// Fixed-capacity pixel buffer
///
/// `MAX_PIXELS` is the upper bound of addressable pixels across all strips.
/// The byte size is always `pixel_count() * 3`.
#[derive(Debug, Clone, Default)]
pub struct PixelBuffer<const MAX_PIXELS: usize> {
    pixels: Vec<[u8; COLOR_DEPTH], MAX_PIXELS>,
    policy: ColorOrderPolicy,
}

impl<const MAX_PIXELS: usize> PixelBuffer<MAX_PIXELS> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            pixels: Vec::new(),
            policy: ColorOrderPolicy::new(ColorOrder::Grb),
        }
    }

    pub const fn capacity(&self) -> usize {
        MAX_PIXELS
    }

    /// Total addressable pixels
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Active channel order for writes that do not pass their own
    pub const fn policy(&self) -> ColorOrderPolicy {
        self.policy
    }

    pub fn policy_mut(&mut self) -> &mut ColorOrderPolicy {
        &mut self.policy
    }

    pub fn set_order(&mut self, order: ColorOrder) {
        self.policy.set_order(order);
    }

    /// Release the current pixels and acquire `pixel_count` zeroed ones
    ///
    /// When the request exceeds capacity the buffer stays empty and every
    /// later write fails its bounds check.
    pub fn resize(&mut self, pixel_count: usize) -> Result<(), BufferExhausted> {
        self.pixels.clear();
        if pixel_count == 0 {
            return Ok(());
        }
        if self.pixels.resize(pixel_count, [0; COLOR_DEPTH]).is_err() {
            self.pixels.clear();
            #[cfg(feature = "esp32-log")]
            println!(
                "[PixelBuffer.resize] cannot hold {} pixels, buffer left empty",
                pixel_count
            );
            return Err(BufferExhausted {
                requested: pixel_count,
                capacity: MAX_PIXELS,
            });
        }
        Ok(())
    }

    /// Write a packed 0xRRGGBB color using the active order
    pub fn set_pixel(&mut self, index: usize, color: u32) -> Result<(), OutOfRange> {
        self.set_pixel_ordered(index, color, self.policy.order())
    }

    /// Write a packed 0xRRGGBB color using an explicit order
    pub fn set_pixel_ordered(
        &mut self,
        index: usize,
        color: u32,
        order: ColorOrder,
    ) -> Result<(), OutOfRange> {
        let pixel_count = self.pixels.len();
        let Some(pixel) = self.pixels.get_mut(index) else {
            return Err(OutOfRange { index, pixel_count });
        };
        let Rgb { r, g, b } = rgb_from_u32(color);
        *pixel = order.encode(r, g, b);
        Ok(())
    }

    /// Write the same color to `len` pixels starting at `offset`
    ///
    /// Pixels past the end of the buffer are skipped.
    pub fn fill_range(&mut self, offset: usize, len: usize, color: u32, order: ColorOrder) {
        let Rgb { r, g, b } = rgb_from_u32(color);
        let raw = order.encode(r, g, b);
        let end = offset.saturating_add(len).min(self.pixels.len());
        if let Some(range) = self.pixels.get_mut(offset..end) {
            range.fill(raw);
        }
    }

    /// Write the same color to every pixel using the active order
    pub fn fill(&mut self, color: u32) {
        self.fill_range(0, self.pixels.len(), color, self.policy.order());
    }

    /// Zero every pixel
    pub fn clear(&mut self) {
        self.pixels.fill([0; COLOR_DEPTH]);
    }

    /// Raw bytes of one pixel, in wire order
    pub fn raw(&self, index: usize) -> Option<[u8; COLOR_DEPTH]> {
        self.pixels.get(index).copied()
    }

    /// Read a pixel back as a logical color using the active order
    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        self.pixel_ordered(index, self.policy.order())
    }

    pub fn pixel_ordered(&self, index: usize, order: ColorOrder) -> Option<Rgb> {
        let (r, g, b) = order.decode(self.raw(index)?);
        Some(Rgb { r, g, b })
    }

    /// Whole buffer as a flat byte slice
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened()
    }

    /// Bytes of `len` pixels starting at pixel `offset`
    pub fn range_bytes(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        self.pixels.get(offset..end).map(<[[u8; COLOR_DEPTH]]>::as_flattened)
    }
}
