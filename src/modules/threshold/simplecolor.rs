use crate::frame::{Frame, Mask};
use crate::modules::threshold::{bgr_to_hsv, hue_window, HueWindow, HueWrap};
use crate::modules::Bgr;
use crate::settings::VisionSettings;

/// Marks pixels of one reference color.
pub struct SimpleColor {
	target: Bgr,
	wrap: HueWrap,
}

impl SimpleColor {
	pub fn new(settings: &VisionSettings) -> Self {
		Self {
			target: settings.threshold.target,
			wrap: settings.threshold.wrap,
		}
	}

	pub fn target(&self) -> Bgr {
		self.target
	}

	pub fn run(&self, frame: &Frame) -> Mask {
		threshold(frame, &hue_window(self.target, self.wrap))
	}
}

/// 255 where the pixel's HSV falls inside `window`, 0 elsewhere.
pub fn threshold(frame: &Frame, window: &HueWindow) -> Mask {
	let data = frame
		.pixels()
		.map(|px| if window.contains(bgr_to_hsv(px)) { 255 } else { 0 })
		.collect();

	Mask::from_raw(data, frame.width(), frame.height())
}
