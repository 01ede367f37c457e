use crate::error::Result;
use crate::frame::Frame;
use crate::modules::OutputModule;
use crate::settings::VisionSettings;

use opencv::core::{Mat, Scalar, CV_8UC3};
use opencv::highgui;
use opencv::prelude::*;

/// A highgui window showing the annotated stream.
pub struct WindowOutput {
	name: String,
	// reused between frames of the same size
	scratch: Mat,
	closed: bool,
}

impl OutputModule for WindowOutput {
	fn new(settings: &VisionSettings) -> Result<Self> {
		let name = settings.output.window.clone();
		highgui::named_window(&name, highgui::WINDOW_AUTOSIZE)?;

		Ok(Self {
			name,
			scratch: Mat::default(),
			closed: false,
		})
	}

	fn show(&mut self, frame: &Frame) -> Result<()> {
		let (rows, cols) = (frame.height() as i32, frame.width() as i32);
		if self.scratch.rows() != rows || self.scratch.cols() != cols {
			self.scratch = Mat::new_rows_cols_with_default(rows, cols, CV_8UC3, Scalar::all(0.))?;
		}
		self.scratch.data_bytes_mut()?.copy_from_slice(frame.as_bytes());

		highgui::imshow(&self.name, &self.scratch)?;
		Ok(())
	}

	fn poll_key(&mut self, delay_ms: i32) -> Result<Option<char>> {
		let key = highgui::wait_key(delay_ms)?;
		if key < 0 {
			return Ok(None);
		}
		Ok(Some(char::from((key & 0xFF) as u8)))
	}

	fn close(&mut self) -> Result<()> {
		if !self.closed {
			highgui::destroy_all_windows()?;
			self.closed = true;
		}
		Ok(())
	}
}
