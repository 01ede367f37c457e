//! The capture, threshold and display loop.
//!
//! Each iteration reads one frame, masks the pixels near the reference hue,
//! draws the bounding box of the mask onto the frame and shows it. The loop
//! stops on the quit key or the first failed capture, and always hands the
//! camera and window back before returning.

use log::{debug, error, info};

use std::time::{Duration, Instant};

use crate::error::{Result, VisionError};
use crate::frame::Frame;
use crate::modules::output::draw_rectangle;
use crate::modules::threshold::SimpleColor;
use crate::modules::track::BoundingBox;
use crate::modules::{Bgr, InputModule, OutputModule};
use crate::settings::VisionSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
	QuitKey,
	CaptureFailure,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
	Running,
	Stopped(StopReason),
}

struct FpsCounter {
	frames: u32,
	since: Instant,
}

impl FpsCounter {
	fn new() -> Self {
		Self {
			frames: 0,
			since: Instant::now(),
		}
	}

	fn tick(&mut self) {
		self.frames += 1;
		let elapsed = self.since.elapsed();
		if elapsed >= Duration::from_secs(1) {
			debug!("{:.1} fps", self.frames as f64 / elapsed.as_secs_f64());
			self.frames = 0;
			self.since = Instant::now();
		}
	}
}

pub struct VisionLoop<I: InputModule, O: OutputModule> {
	input: I,
	output: O,
	threshold: SimpleColor,

	box_color: Bgr,
	box_thickness: u32,
	quit_key: char,
	poll_ms: i32,

	fps: FpsCounter,
}

impl<I: InputModule, O: OutputModule> VisionLoop<I, O> {
	pub fn new(input: I, output: O, settings: &VisionSettings) -> Self {
		Self {
			input,
			output,
			threshold: SimpleColor::new(settings),

			box_color: settings.output.box_color,
			box_thickness: settings.output.box_thickness,
			quit_key: settings.output.quit_key,
			poll_ms: settings.output.poll_ms,

			fps: FpsCounter::new(),
		}
	}

	/// Masks `frame` against the reference color and outlines the match in place.
	pub fn annotate(&self, frame: &mut Frame) -> Option<BoundingBox> {
		let mask = self.threshold.run(frame);
		let bbox = mask.bounding_box()?;
		draw_rectangle(frame, &bbox, self.box_color, self.box_thickness);
		Some(bbox)
	}

	/// Runs a single iteration.
	pub fn step(&mut self) -> Result<LoopState> {
		let mut frame = match self.input.read() {
			Ok(frame) => frame,
			Err(VisionError::CaptureFailure) => {
				error!("{}", VisionError::CaptureFailure);
				return Ok(LoopState::Stopped(StopReason::CaptureFailure));
			}
			Err(e) => return Err(e),
		};

		if let Some(bbox) = self.annotate(&mut frame) {
			debug!("detected {:?}", bbox);
		}

		self.output.show(&frame)?;
		self.fps.tick();

		match self.output.poll_key(self.poll_ms)? {
			Some(key) if key == self.quit_key => Ok(LoopState::Stopped(StopReason::QuitKey)),
			_ => Ok(LoopState::Running),
		}
	}

	/// Loops until stopped, then releases the camera and closes the window.
	///
	/// A backend error also stops the loop; it is returned after cleanup.
	pub fn run(mut self) -> Result<StopReason> {
		info!("tracking {:?}, press '{}' to quit", self.threshold.target(), self.quit_key);

		let outcome = loop {
			match self.step() {
				Ok(LoopState::Running) => {}
				Ok(LoopState::Stopped(reason)) => break Ok(reason),
				Err(e) => break Err(e),
			}
		};

		let released = self.input.release();
		let closed = self.output.close();

		let reason = outcome?;
		released?;
		closed?;

		info!("stopped: {:?}", reason);
		Ok(reason)
	}
}
