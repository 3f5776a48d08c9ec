mod order;
mod packed;

use smart_leds::RGB8;

pub use order::{ChannelOffsets, ColorOrder, ColorOrderPolicy};
pub use packed::{rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;

/// Bytes used to hold one pixel
pub const COLOR_DEPTH: usize = 3;
