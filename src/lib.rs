#![no_std]

pub mod buffer;
pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod guard;
pub mod strip;

pub use buffer::PixelBuffer;
pub use color::{COLOR_DEPTH, ColorOrder, ColorOrderPolicy, Rgb};
pub use command::Command;
pub use config::{ColorOrderScope, ControllerConfig, DEFAULT_MAX_STRIPS, OutputMode};
pub use controller::{CommandOutcome, DefaultController, PixelController};
pub use error::{BufferExhausted, ConfigError, OutOfRange};
pub use guard::{FrameGuard, FrameToken};
pub use strip::{ConfigSummary, Strip, StripDriver, StripEntry, StripRegistry, SyncReport};
