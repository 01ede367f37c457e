use serde::Deserialize;

use log::warn;

use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;
use crate::modules::threshold::HueWrap;
use crate::modules::Bgr;

pub const SETTINGS_FILE: &str = "vset.toml";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct VisionSettings {
	pub input: InputSettings,
	pub threshold: ThresholdSettings,
	pub output: OutputSettings,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputSettings {
	pub camera_index: i32,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThresholdSettings {
	/// Reference color in BGR order.
	pub target: Bgr,
	pub wrap: HueWrap,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
	pub window: String,
	pub box_color: Bgr,
	pub box_thickness: u32,
	pub quit_key: char,
	pub poll_ms: i32,
}

impl Default for InputSettings {
	fn default() -> Self {
		Self { camera_index: 0 }
	}
}

impl Default for ThresholdSettings {
	fn default() -> Self {
		Self {
			target: [0, 165, 255],
			wrap: HueWrap::Clamp,
		}
	}
}

impl Default for OutputSettings {
	fn default() -> Self {
		Self {
			window: String::from("frame"),
			box_color: [0, 255, 0],
			box_thickness: 5,
			quit_key: 'q',
			poll_ms: 1,
		}
	}
}

impl VisionSettings {
	pub fn from_toml(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}

	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let content = fs::read_to_string(path)?;
		Self::from_toml(&content)
	}

	/// Loads `path`, falling back to the built-in settings when the file does not exist.
	pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
		match fs::read_to_string(path.as_ref()) {
			Ok(content) => Self::from_toml(&content),
			Err(e) if e.kind() == io::ErrorKind::NotFound => {
				warn!("{} not found, using default settings", path.as_ref().display());
				Ok(Self::default())
			}
			Err(e) => Err(e.into()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::VisionError;

	#[test]
	fn empty_file_yields_defaults() {
		let vset = VisionSettings::from_toml("").unwrap();
		assert_eq!(vset, VisionSettings::default());
		assert_eq!(vset.threshold.target, [0, 165, 255]);
		assert_eq!(vset.input.camera_index, 0);
		assert_eq!(vset.output.quit_key, 'q');
		assert_eq!(vset.output.poll_ms, 1);
	}

	#[test]
	fn partial_sections_keep_other_defaults() {
		let vset = VisionSettings::from_toml(
			r#"
			[threshold]
			target = [255, 0, 0]
			wrap = "split"

			[output]
			box_thickness = 2
			"#,
		)
		.unwrap();

		assert_eq!(vset.threshold.target, [255, 0, 0]);
		assert_eq!(vset.threshold.wrap, HueWrap::Split);
		assert_eq!(vset.output.box_thickness, 2);
		assert_eq!(vset.output.box_color, [0, 255, 0]);
		assert_eq!(vset.output.window, "frame");
	}

	#[test]
	fn rejects_out_of_range_channel() {
		let err = VisionSettings::from_toml("[threshold]\ntarget = [0, 300, 0]\n").unwrap_err();
		assert!(matches!(err, VisionError::Settings(_)));
	}

	#[test]
	fn missing_file_falls_back() {
		let vset = VisionSettings::load_or_default("does/not/exist/vset.toml").unwrap();
		assert_eq!(vset, VisionSettings::default());
	}

	#[test]
	fn shipped_file_matches_defaults() {
		let path = concat!(env!("CARGO_MANIFEST_DIR"), "/vset.toml");
		assert_eq!(VisionSettings::from_file(path).unwrap(), VisionSettings::default());
	}
}
