pub mod error;
pub mod frame;
pub mod modules;
pub mod pipeline;
pub mod settings;

pub use error::{Result, VisionError};
pub use frame::{Frame, Mask};
pub use pipeline::{LoopState, StopReason, VisionLoop};
pub use settings::VisionSettings;
