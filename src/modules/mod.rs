pub mod input;
pub mod threshold;
pub mod track;
pub mod output;

use crate::error::Result;
use crate::frame::Frame;
use crate::settings::VisionSettings;

/// Pixel color in blue, green, red order.
pub type Bgr = [u8; 3];

/// Hue in `[0, 180)`, saturation and value in `[0, 255]`.
pub type Hsv = [u8; 3];

pub trait InputModule {
	fn new(settings: &VisionSettings) -> Result<Self>
	where
		Self: Sized;

	/// Blocks until the next frame arrives. `VisionError::CaptureFailure` when none does.
	fn read(&mut self) -> Result<Frame>;

	fn release(&mut self) -> Result<()>;
}

pub trait OutputModule {
	fn new(settings: &VisionSettings) -> Result<Self>
	where
		Self: Sized;

	fn show(&mut self, frame: &Frame) -> Result<()>;

	/// Waits up to `delay_ms` for a keypress.
	fn poll_key(&mut self, delay_ms: i32) -> Result<Option<char>>;

	fn close(&mut self) -> Result<()>;
}
