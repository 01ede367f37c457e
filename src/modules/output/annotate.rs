use crate::frame::Frame;
use crate::modules::track::BoundingBox;
use crate::modules::Bgr;

/// Draws the outline of `bbox` onto `frame`, `thickness` pixels wide and
/// centered on the box edges. Pixels outside the frame are skipped.
///
/// Corners are square, unlike the rounded joins `imgproc::rectangle` draws
/// for thick lines.
pub fn draw_rectangle(frame: &mut Frame, bbox: &BoundingBox, color: Bgr, thickness: u32) {
	let half = (thickness / 2) as i64;
	let (x0, y0) = (bbox.x_min as i64, bbox.y_min as i64);
	let (x1, y1) = (bbox.x_max as i64, bbox.y_max as i64);

	let left = (x0 - half).max(0);
	let top = (y0 - half).max(0);
	let right = (x1 + half).min(frame.width() as i64 - 1);
	let bottom = (y1 + half).min(frame.height() as i64 - 1);

	for y in top..=bottom {
		for x in left..=right {
			let inside = x > x0 + half && x < x1 - half && y > y0 + half && y < y1 - half;
			if !inside {
				frame.set_pixel(x as usize, y as usize, color);
			}
		}
	}
}
