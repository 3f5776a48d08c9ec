/// Default number of strip slots
pub const DEFAULT_MAX_STRIPS: usize = 8;

/// How strips get bound to their outputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Output comes from the pin bits of each CONFIG entry
    #[default]
    Explicit,
    /// Slot `i` always drives `start_pin + i`; CONFIG pin bits are ignored
    Fixed { start_pin: u8 },
}

/// Which channel order a pixel write uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorOrderScope {
    /// The order from the most recent CONFIG entry applies to every strip
    #[default]
    Global,
    /// Each strip keeps the order it was configured with
    PerStrip,
}

/// Configuration for the pixel controller
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerConfig {
    pub output_mode: OutputMode,
    pub color_order_scope: ColorOrderScope,
}
