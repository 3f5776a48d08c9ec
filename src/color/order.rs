//! Channel ordering of a pixel on the wire
//!
//! Strips expect the three color channels in different byte orders.
//! The order is selected by a 2-bit code carried in the CONFIG command.

use super::COLOR_DEPTH;

const COLOR_ORDER_GRB: u8 = 0;
const COLOR_ORDER_RGB: u8 = 1;
const COLOR_ORDER_BRG: u8 = 2;

/// Known channel orders that can be requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorOrder {
    #[default]
    Grb = COLOR_ORDER_GRB,
    Rgb = COLOR_ORDER_RGB,
    Brg = COLOR_ORDER_BRG,
}

/// Byte position of every logical channel within a pixel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelOffsets {
    pub red: usize,
    pub green: usize,
    pub blue: usize,
}

impl ColorOrder {
    /// Parse a 2-bit order code, `None` for unassigned codes
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            COLOR_ORDER_GRB => Self::Grb,
            COLOR_ORDER_RGB => Self::Rgb,
            COLOR_ORDER_BRG => Self::Brg,
            _ => return None,
        })
    }

    pub const fn offsets(self) -> ChannelOffsets {
        match self {
            Self::Grb => ChannelOffsets {
                green: 0,
                red: 1,
                blue: 2,
            },
            Self::Rgb => ChannelOffsets {
                red: 0,
                green: 1,
                blue: 2,
            },
            Self::Brg => ChannelOffsets {
                blue: 0,
                red: 1,
                green: 2,
            },
        }
    }

    /// Lay out logical channels in wire order
    pub const fn encode(self, red: u8, green: u8, blue: u8) -> [u8; COLOR_DEPTH] {
        let offsets = self.offsets();
        let mut raw = [0; COLOR_DEPTH];
        raw[offsets.red] = red;
        raw[offsets.green] = green;
        raw[offsets.blue] = blue;
        raw
    }

    /// Read logical channels back from wire order as `(red, green, blue)`
    pub const fn decode(self, raw: [u8; COLOR_DEPTH]) -> (u8, u8, u8) {
        let offsets = self.offsets();
        (raw[offsets.red], raw[offsets.green], raw[offsets.blue])
    }
}

/// Active channel order applied to pixel writes
///
/// Exactly one order is active at a time. It stays in effect for every
/// following write until replaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorOrderPolicy {
    order: ColorOrder,
}

impl ColorOrderPolicy {
    pub const fn new(order: ColorOrder) -> Self {
        Self { order }
    }

    pub const fn order(self) -> ColorOrder {
        self.order
    }

    pub const fn offsets(self) -> ChannelOffsets {
        self.order.offsets()
    }

    pub fn set_order(&mut self, order: ColorOrder) {
        self.order = order;
    }

    /// Apply a raw order code
    ///
    /// Unassigned codes keep the current order. Returns `true` when the code
    /// was recognized.
    pub fn set_raw(&mut self, code: u8) -> bool {
        match ColorOrder::from_raw(code) {
            Some(order) => {
                self.order = order;
                true
            }
            None => false,
        }
    }
}
