//! Host command decoding
//!
//! Every multi-bit field travels as 7-bit groups, one per byte, least
//! significant group first.

use crate::strip::StripEntry;

const COMMAND_CONFIG: u8 = 0x01;
const COMMAND_SHOW: u8 = 0x02;
const COMMAND_SET_PIXEL: u8 = 0x03;
const COMMAND_SET_STRIP: u8 = 0x04;

const SELECTOR_MASK: u8 = 0x0F;
const GROUP_MASK: u8 = 0x7F;
const GROUP_BITS: u32 = 7;

const PIN_MASK: u8 = 0x1F;
const ORDER_SHIFT: u8 = 5;
const ORDER_MASK: u8 = 0x03;

/// Bytes in one CONFIG entry
pub const CONFIG_ENTRY_LEN: usize = 3;
/// Bytes of a color field
pub const COLOR_FIELD_LEN: usize = 4;
/// Bytes of a pixel index field
pub const INDEX_FIELD_LEN: usize = 2;

/// Commands understood by the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// Append strip configuration entries
    Config = COMMAND_CONFIG,
    /// Push pending changes to hardware
    Show = COMMAND_SHOW,
    /// Write one pixel
    SetPixel = COMMAND_SET_PIXEL,
    /// Fill the whole buffer with one color
    SetStrip = COMMAND_SET_STRIP,
}

impl Command {
    /// Parse the selector from the low nibble of a command byte
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value & SELECTOR_MASK {
            COMMAND_CONFIG => Self::Config,
            COMMAND_SHOW => Self::Show,
            COMMAND_SET_PIXEL => Self::SetPixel,
            COMMAND_SET_STRIP => Self::SetStrip,
            _ => return None,
        })
    }
}

/// Join 7-bit groups into one value, least significant group first
///
/// Only the low 7 bits of every byte are used. At most four groups are
/// read, giving up to 28 bits.
#[allow(clippy::cast_possible_truncation)]
pub fn decode_groups(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .take(4)
        .enumerate()
        .fold(0, |acc, (i, byte)| {
            acc | (u32::from(byte & GROUP_MASK) << (GROUP_BITS * i as u32))
        })
}

/// Split a value into `N` 7-bit groups, least significant group first
#[allow(clippy::cast_possible_truncation)]
pub fn encode_groups<const N: usize>(value: u32) -> [u8; N] {
    let mut bytes = [0; N];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = ((value >> (GROUP_BITS * i as u32)) as u8) & GROUP_MASK;
    }
    bytes
}

/// Decode a packed color field
///
/// Returns the full 28-bit value; only the low 24 bits carry RGB.
pub fn decode_color(args: &[u8]) -> Option<u32> {
    args.get(..COLOR_FIELD_LEN).map(decode_groups)
}

/// Decode a 14-bit pixel index field
#[allow(clippy::cast_possible_truncation)]
pub fn decode_index(args: &[u8]) -> Option<u16> {
    args.get(..INDEX_FIELD_LEN)
        .map(|field| decode_groups(field) as u16)
}

impl StripEntry {
    /// Decode a 3-byte CONFIG entry
    ///
    /// Byte 0 holds the pin in bits 0..4 and the order code in bits 5..6,
    /// bytes 1..2 hold the 14-bit length.
    #[allow(clippy::cast_possible_truncation)]
    pub fn parse(entry: [u8; CONFIG_ENTRY_LEN]) -> Self {
        let [head, length @ ..] = entry;
        Self {
            pin: head & PIN_MASK,
            order_code: (head >> ORDER_SHIFT) & ORDER_MASK,
            length: decode_groups(&length) as u16,
        }
    }
}

/// Iterate the complete entries of a CONFIG payload
///
/// Trailing bytes that do not form a full entry are ignored.
pub fn config_entries(args: &[u8]) -> impl Iterator<Item = StripEntry> + '_ {
    args.chunks_exact(CONFIG_ENTRY_LEN).map(|chunk| {
        let mut entry = [0; CONFIG_ENTRY_LEN];
        entry.copy_from_slice(chunk);
        StripEntry::parse(entry)
    })
}
