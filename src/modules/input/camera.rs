use crate::error::{Result, VisionError};
use crate::frame::Frame;
use crate::modules::InputModule;
use crate::settings::VisionSettings;

use opencv::core::{Mat, CV_8UC3};
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};

use log::{debug, info};

pub struct CameraInput {
	cap: VideoCapture,
	index: i32,
	released: bool,
}

impl InputModule for CameraInput {
	fn new(settings: &VisionSettings) -> Result<Self> {
		let index = settings.input.camera_index;
		let cap = VideoCapture::new(index, videoio::CAP_ANY)?;
		if !cap.is_opened()? {
			return Err(VisionError::CameraUnavailable(index));
		}
		info!("opened camera {}", index);

		Ok(Self {
			cap,
			index,
			released: false,
		})
	}

	fn read(&mut self) -> Result<Frame> {
		let mut mat = Mat::default();
		if !self.cap.read(&mut mat)? || mat.empty() {
			return Err(VisionError::CaptureFailure);
		}
		if mat.typ() != CV_8UC3 {
			return Err(VisionError::FrameType(mat.typ()));
		}

		let (width, height) = (mat.cols() as usize, mat.rows() as usize);
		let data = if mat.is_continuous() {
			mat.data_bytes()?.to_vec()
		} else {
			mat.try_clone()?.data_bytes()?.to_vec()
		};

		Frame::new(data, width, height)
	}

	fn release(&mut self) -> Result<()> {
		if !self.released {
			self.cap.release()?;
			self.released = true;
			debug!("released camera {}", self.index);
		}
		Ok(())
	}
}
