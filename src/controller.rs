//! Command interpreter
//!
//! Owns the strip table and pixel buffer and applies one host command at
//! a time. Nothing here fails hard: bad input is reported through
//! [`CommandOutcome`] and the controller keeps going.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::buffer::PixelBuffer;
use crate::color::ColorOrder;
use crate::command::{self, Command};
use crate::config::{ColorOrderScope, ControllerConfig, DEFAULT_MAX_STRIPS};
use crate::error::{ConfigError, OutOfRange};
use crate::guard::FrameGuard;
use crate::strip::{ConfigSummary, StripDriver, StripRegistry, SyncReport};

/// What a processed command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Changed strips were written to their outputs
    Shown(SyncReport),
    /// A frame was already being written, the SHOW was dropped
    ShowDropped,
    /// Every pixel was set to one color
    Filled,
    /// One pixel was written; `strip` is the slot marked for sync
    PixelSet { index: usize, strip: Option<usize> },
    /// Pixel write outside the buffer, nothing changed
    PixelOutOfRange(OutOfRange),
    Configured(ConfigSummary),
    ConfigRejected(ConfigError),
    /// Too few argument bytes for the command
    Malformed(Command),
    /// Unknown selector
    Ignored,
}

/// Controller with the default number of strip slots
pub type DefaultController<'a, D, const MAX_PIXELS: usize> =
    PixelController<'a, D, DEFAULT_MAX_STRIPS, MAX_PIXELS>;

/// Pixel controller - the main command dispatcher
pub struct PixelController<'a, D: StripDriver, const MAX_STRIPS: usize, const MAX_PIXELS: usize> {
    // External dependencies and configuration
    guard: &'a FrameGuard,
    driver: D,
    scope: ColorOrderScope,

    // Internal state
    registry: StripRegistry<MAX_STRIPS>,
    buffer: PixelBuffer<MAX_PIXELS>,
}

impl<'a, D: StripDriver, const MAX_STRIPS: usize, const MAX_PIXELS: usize>
    PixelController<'a, D, MAX_STRIPS, MAX_PIXELS>
{
    /// Create a controller with no strips configured
    pub const fn new(guard: &'a FrameGuard, driver: D, config: &ControllerConfig) -> Self {
        Self {
            guard,
            driver,
            scope: config.color_order_scope,
            registry: StripRegistry::new(config.output_mode),
            buffer: PixelBuffer::new(),
        }
    }

    pub const fn buffer(&self) -> &PixelBuffer<MAX_PIXELS> {
        &self.buffer
    }

    pub const fn registry(&self) -> &StripRegistry<MAX_STRIPS> {
        &self.registry
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Process one command frame
    ///
    /// The low nibble of the first byte selects the command, the remaining
    /// bytes are its arguments. An empty frame is ignored.
    pub fn process(&mut self, frame: &[u8]) -> CommandOutcome {
        match frame.split_first() {
            Some((&command, args)) => self.process_command(command, args),
            None => CommandOutcome::Ignored,
        }
    }

    /// Process a command byte with its arguments
    pub fn process_command(&mut self, command: u8, args: &[u8]) -> CommandOutcome {
        let Some(command) = Command::from_raw(command) else {
            return CommandOutcome::Ignored;
        };
        match command {
            Command::Show => self.show(),
            Command::SetStrip => match command::decode_color(args) {
                Some(color) => self.set_strip(color),
                None => CommandOutcome::Malformed(command),
            },
            Command::SetPixel => {
                let index = command::decode_index(args);
                let color = args
                    .get(command::INDEX_FIELD_LEN..)
                    .and_then(command::decode_color);
                match (index, color) {
                    (Some(index), Some(color)) => self.set_pixel(usize::from(index), color),
                    _ => CommandOutcome::Malformed(command),
                }
            }
            Command::Config => self.configure(args),
        }
    }

    /// Write every changed strip to its output
    ///
    /// Dropped without effect while another frame is being written.
    pub fn show(&mut self) -> CommandOutcome {
        let Some(_token) = self.guard.try_acquire() else {
            #[cfg(feature = "esp32-log")]
            println!("[PixelController.show] frame in progress, show dropped");
            return CommandOutcome::ShowDropped;
        };
        let report = self
            .registry
            .sync_due(self.buffer.as_bytes(), &mut self.driver);
        CommandOutcome::Shown(report)
    }

    /// Fill every pixel with a packed color and flag all strips
    ///
    /// A zero color takes the clear path.
    pub fn set_strip(&mut self, color: u32) -> CommandOutcome {
        if color == 0 {
            self.buffer.clear();
        } else {
            match self.scope {
                ColorOrderScope::Global => self.buffer.fill(color),
                ColorOrderScope::PerStrip => {
                    for strip in self.registry.strips() {
                        self.buffer
                            .fill_range(strip.offset(), strip.length(), color, strip.order());
                    }
                }
            }
        }
        self.registry.mark_all_changed();
        CommandOutcome::Filled
    }

    /// Write one pixel and flag the strip that owns it
    pub fn set_pixel(&mut self, index: usize, color: u32) -> CommandOutcome {
        let order = self.order_for(index);
        if let Err(e) = self.buffer.set_pixel_ordered(index, color, order) {
            return CommandOutcome::PixelOutOfRange(e);
        }
        let strip = self.registry.mark_changed(index);
        CommandOutcome::PixelSet { index, strip }
    }

    /// Apply a CONFIG payload
    pub fn configure(&mut self, args: &[u8]) -> CommandOutcome {
        if args.len() < command::CONFIG_ENTRY_LEN {
            return CommandOutcome::Malformed(Command::Config);
        }
        let result = self
            .registry
            .configure(command::config_entries(args), &mut self.buffer);

        #[cfg(feature = "esp32-log")]
        println!(
            "[PixelController.configure] {} strips, {} pixels ({:?})",
            self.registry.len(),
            self.buffer.pixel_count(),
            result
        );

        match result {
            Ok(summary) => CommandOutcome::Configured(summary),
            Err(e) => CommandOutcome::ConfigRejected(e),
        }
    }

    /// Channel order used for a write to `index`
    fn order_for(&self, index: usize) -> ColorOrder {
        let global = self.buffer.policy().order();
        match self.scope {
            ColorOrderScope::Global => global,
            ColorOrderScope::PerStrip => self
                .registry
                .owner_of(index)
                .and_then(|slot| self.registry.get(slot))
                .map_or(global, |strip| strip.order()),
        }
    }

    /// Print every pixel as logical `r g b`
    #[cfg(feature = "esp32-log")]
    pub fn dump(&self) {
        println!("Pixel values");
        for index in 0..self.buffer.pixel_count() {
            let order = self.order_for(index);
            if let Some(color) = self.buffer.pixel_ordered(index, order) {
                println!("{}: {} {} {}", index, color.r, color.g, color.b);
            }
        }
    }
}
