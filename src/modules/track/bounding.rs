use itertools::Itertools;

use crate::frame::Mask;

/// Inclusive pixel coordinates of the smallest box around every nonzero mask pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
	pub x_min: usize,
	pub y_min: usize,
	pub x_max: usize,
	pub y_max: usize,
}

impl BoundingBox {
	pub fn width(&self) -> usize {
		self.x_max - self.x_min + 1
	}

	pub fn height(&self) -> usize {
		self.y_max - self.y_min + 1
	}
}

impl Mask {
	/// `None` when no pixel is set.
	pub fn bounding_box(&self) -> Option<BoundingBox> {
		// (row, first set column, last set column)
		let spans = self
			.rows()
			.enumerate()
			.filter_map(|(y, row)| {
				let first = row.iter().position(|&p| p != 0)?;
				let last = row.iter().rposition(|&p| p != 0)?;
				Some((y, first, last))
			})
			.collect::<Vec<_>>();

		let (y_min, y_max) = spans.iter().map(|s| s.0).minmax().into_option()?;
		let (x_min, x_max) = spans
			.iter()
			.flat_map(|&(_, first, last)| [first, last])
			.minmax()
			.into_option()?;

		Some(BoundingBox {
			x_min,
			y_min,
			x_max,
			y_max,
		})
	}
}
