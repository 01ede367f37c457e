//! Hue threshold bounds around a reference color.

use serde::Deserialize;

use crate::modules::threshold::bgr_to_hsv;
use crate::modules::{Bgr, Hsv};

/// Half width of the hue band.
pub const HUE_MARGIN: u8 = 10;
/// Hues this close to either end of the circle take the clamped branches.
pub const HUE_EDGE: u8 = 15;
pub const HUE_MAX: u8 = 180;

pub const SV_FLOOR: u8 = 100;
pub const SV_CEIL: u8 = 255;

/// How a band that crosses the red end of the hue circle is handled.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HueWrap {
	/// Clamp the band at 0 or 180, dropping the part past the seam.
	#[default]
	Clamp,
	/// Split the band in two so it covers both sides of the seam.
	Split,
}

/// Inclusive lower and upper HSV thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HsvBounds {
	pub lower: Hsv,
	pub upper: Hsv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HueWindow {
	Single(HsvBounds),
	Split(HsvBounds, HsvBounds),
}

impl HsvBounds {
	fn hue_band(lower_hue: u8, upper_hue: u8) -> Self {
		Self {
			lower: [lower_hue, SV_FLOOR, SV_FLOOR],
			upper: [upper_hue, SV_CEIL, SV_CEIL],
		}
	}

	pub fn contains(&self, hsv: Hsv) -> bool {
		hsv.iter()
			.zip(self.lower.iter().zip(self.upper.iter()))
			.all(|(c, (lo, hi))| c >= lo && c <= hi)
	}
}

impl HueWindow {
	pub fn contains(&self, hsv: Hsv) -> bool {
		match self {
			HueWindow::Single(bounds) => bounds.contains(hsv),
			HueWindow::Split(a, b) => a.contains(hsv) || b.contains(hsv),
		}
	}

	pub fn bands(&self) -> Vec<HsvBounds> {
		match *self {
			HueWindow::Single(bounds) => vec![bounds],
			HueWindow::Split(a, b) => vec![a, b],
		}
	}
}

/// Thresholds a ±10 hue band around `color`, clamped at the ends of the hue circle.
///
/// A color within 15 of either end gets a one sided window: the part of the
/// band that would wrap past 0 or 180 is not covered.
pub fn hue_limits(color: Bgr) -> HsvBounds {
	let h = bgr_to_hsv(color)[0];

	if h >= HUE_MAX - HUE_EDGE {
		HsvBounds::hue_band(h - HUE_MARGIN, HUE_MAX)
	} else if h <= HUE_EDGE {
		HsvBounds::hue_band(0, h + HUE_MARGIN)
	} else {
		HsvBounds::hue_band(h - HUE_MARGIN, h + HUE_MARGIN)
	}
}

pub fn hue_window(color: Bgr, wrap: HueWrap) -> HueWindow {
	match wrap {
		HueWrap::Clamp => HueWindow::Single(hue_limits(color)),
		HueWrap::Split => circular_window(bgr_to_hsv(color)[0]),
	}
}

fn circular_window(h: u8) -> HueWindow {
	let top = HUE_MAX - 1;
	let lo = i16::from(h) - i16::from(HUE_MARGIN);
	let hi = i16::from(h) + i16::from(HUE_MARGIN);

	if lo < 0 {
		HueWindow::Split(
			HsvBounds::hue_band(0, hi as u8),
			HsvBounds::hue_band((lo + i16::from(HUE_MAX)) as u8, top),
		)
	} else if hi > i16::from(top) {
		HueWindow::Split(
			HsvBounds::hue_band(lo as u8, top),
			HsvBounds::hue_band(0, (hi - i16::from(HUE_MAX)) as u8),
		)
	} else {
		HueWindow::Single(HsvBounds::hue_band(lo as u8, hi as u8))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ORANGE: Bgr = [0, 165, 255];
	const RED: Bgr = [0, 0, 255];
	// hue 165
	const ROSE: Bgr = [128, 0, 255];
	// hue 15
	const AMBER: Bgr = [0, 128, 255];

	fn band(lo: u8, hi: u8) -> HsvBounds {
		HsvBounds {
			lower: [lo, 100, 100],
			upper: [hi, 255, 255],
		}
	}

	#[test]
	fn orange_gets_symmetric_band() {
		assert_eq!(hue_limits(ORANGE), band(9, 29));
	}

	#[test]
	fn mid_range_hues_are_symmetric() {
		for color in [[0, 255, 0], [255, 0, 0], [0, 255, 255], [255, 255, 0], [40, 200, 90]] {
			let h = bgr_to_hsv(color)[0];
			assert!(h > 15 && h < 165, "hue {} for {:?}", h, color);
			assert_eq!(hue_limits(color), band(h - 10, h + 10));
		}
	}

	#[test]
	fn red_clamps_at_zero() {
		assert_eq!(hue_limits(RED), band(0, 10));
	}

	#[test]
	fn high_hue_clamps_at_180() {
		assert_eq!(bgr_to_hsv([64, 0, 255])[0], 172);
		assert_eq!(hue_limits([64, 0, 255]), band(162, 180));
	}

	#[test]
	fn boundaries_take_clamped_branches() {
		assert_eq!(bgr_to_hsv(ROSE)[0], 165);
		assert_eq!(hue_limits(ROSE), band(155, 180));

		assert_eq!(bgr_to_hsv(AMBER)[0], 15);
		assert_eq!(hue_limits(AMBER), band(0, 25));
	}

	#[test]
	fn limits_are_pure() {
		for color in [ORANGE, RED, ROSE, AMBER, [12, 34, 56]] {
			assert_eq!(hue_limits(color), hue_limits(color));
		}
	}

	#[test]
	fn clamp_window_is_limits() {
		assert_eq!(hue_window(RED, HueWrap::Clamp), HueWindow::Single(band(0, 10)));
	}

	#[test]
	fn split_window_covers_both_sides() {
		let window = hue_window(RED, HueWrap::Split);
		assert_eq!(window, HueWindow::Split(band(0, 10), band(170, 179)));
		assert!(window.contains([175, 200, 200]));
		assert!(window.contains([5, 200, 200]));
		assert!(!window.contains([20, 200, 200]));

		let window = hue_window([64, 0, 255], HueWrap::Split);
		assert_eq!(window, HueWindow::Split(band(162, 179), band(0, 2)));
	}

	#[test]
	fn split_window_without_wrap_is_single() {
		assert_eq!(hue_window(ORANGE, HueWrap::Split), HueWindow::Single(band(9, 29)));
		assert_eq!(hue_window(AMBER, HueWrap::Split), HueWindow::Single(band(5, 25)));
	}

	#[test]
	fn bounds_are_inclusive() {
		let bounds = band(9, 29);
		assert!(bounds.contains([9, 100, 100]));
		assert!(bounds.contains([29, 255, 255]));
		assert!(!bounds.contains([30, 255, 255]));
		assert!(!bounds.contains([19, 99, 255]));
	}
}
