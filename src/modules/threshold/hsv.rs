use crate::modules::{Bgr, Hsv};

const HSV_SHIFT: u32 = 12;
const HSV_ROUND: i32 = 1 << (HSV_SHIFT - 1);

// round(num / i) for i in 1..256, 0 at index 0. None of the quotients land
// on a half, so integer rounding gives the same table as rounding a double.
const fn div_table(num: i32) -> [i32; 256] {
	let mut table = [0; 256];
	let mut i = 1;
	while i < 256 {
		table[i] = (2 * num + i as i32) / (2 * i as i32);
		i += 1;
	}
	table
}

const SDIV_TABLE: [i32; 256] = div_table(255 << HSV_SHIFT);
// (180 << 12) / 6
const HDIV_TABLE_180: [i32; 256] = div_table(30 << HSV_SHIFT);

/// 8-bit BGR to HSV with hue on the half-scale circle.
///
/// Uses the same 12-bit fixed point tables as OpenCV's `COLOR_BGR2HSV`, so
/// rounding matches `cvtColor` pixel for pixel, ties included.
pub fn bgr_to_hsv(color: Bgr) -> Hsv {
	let [b, g, r] = color.map(i32::from);

	let v = b.max(g).max(r);
	let diff = v - b.min(g).min(r);

	let s = (diff * SDIV_TABLE[v as usize] + HSV_ROUND) >> HSV_SHIFT;

	// red owns ties, then green
	let numer = if v == r {
		g - b
	} else if v == g {
		b - r + 2 * diff
	} else {
		r - g + 4 * diff
	};
	let h = (numer * HDIV_TABLE_180[diff as usize] + HSV_ROUND) >> HSV_SHIFT;
	let h = if h < 0 { h + 180 } else { h };

	[h as u8, s as u8, v as u8]
}
