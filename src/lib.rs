#![no_std]

pub mod color;
pub mod command;
pub mod config;
pub mod context;
mod effect;
pub mod math8;
pub mod mode;
pub mod modifier;
pub mod output;
pub mod renderer;
pub mod scheduler;
pub mod storage;
pub mod transport;

pub use command::{Command, OptionOutcome, OptionValue};
pub use config::{Configuration, ScheduleState};
pub use context::{Frame, SpeedSource};
pub use mode::ModeId;
pub use modifier::{ModifierKind, ModifierState};
pub use output::SmartLedsOutput;
pub use renderer::{Renderer, RendererConfig};
pub use scheduler::StepScheduler;
pub use storage::{LoadError, MemoryStore, PersistentStore};
pub use transport::{Transport, TransportEvent, TransportQueue};

pub use color::{ColorOrder, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED sink
///
/// Implement this trait to support different hardware platforms.
/// The renderer is generic over this trait.
pub trait OutputDriver {
    /// Stage one pixel of the next frame
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Push the staged frame to the strip
    fn flush(&mut self);
}
