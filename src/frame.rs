use crate::error::{Result, VisionError};
use crate::modules::Bgr;

/// A captured image, 8-bit BGR, row-major with no padding between rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
	data: Vec<u8>,
	width: usize,
	height: usize,
}

/// Single-channel binary image, every byte is 0 or 255.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
	data: Vec<u8>,
	width: usize,
	height: usize,
}

impl Frame {
	pub fn new(data: Vec<u8>, width: usize, height: usize) -> Result<Self> {
		let expected = width * height * 3;
		if width == 0 || height == 0 || data.len() != expected {
			return Err(VisionError::FrameLayout {
				expected,
				actual: data.len(),
			});
		}

		Ok(Self { data, width, height })
	}

	pub fn filled(width: usize, height: usize, color: Bgr) -> Result<Self> {
		let data = color.iter().copied().cycle().take(width * height * 3).collect();
		Self::new(data, width, height)
	}

	pub fn width(&self) -> usize {
		self.width
	}

	pub fn height(&self) -> usize {
		self.height
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.data
	}

	pub fn pixels(&self) -> impl Iterator<Item = Bgr> + '_ {
		self.data.chunks_exact(3).map(|px| [px[0], px[1], px[2]])
	}

	pub fn pixel(&self, x: usize, y: usize) -> Option<Bgr> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let i = (y * self.width + x) * 3;
		Some([self.data[i], self.data[i + 1], self.data[i + 2]])
	}

	/// Out of bounds writes are ignored.
	pub fn set_pixel(&mut self, x: usize, y: usize, color: Bgr) {
		if x < self.width && y < self.height {
			let i = (y * self.width + x) * 3;
			self.data[i..i + 3].copy_from_slice(&color);
		}
	}
}

impl Mask {
	pub fn new(data: Vec<u8>, width: usize, height: usize) -> Result<Self> {
		let expected = width * height;
		if width == 0 || height == 0 || data.len() != expected {
			return Err(VisionError::FrameLayout {
				expected,
				actual: data.len(),
			});
		}

		Ok(Self { data, width, height })
	}

	// callers hand over a buffer sized from an already validated frame
	pub(crate) fn from_raw(data: Vec<u8>, width: usize, height: usize) -> Self {
		debug_assert!(width > 0 && data.len() == width * height);
		Self { data, width, height }
	}

	pub fn width(&self) -> usize {
		self.width
	}

	pub fn height(&self) -> usize {
		self.height
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.data
	}

	pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
		self.data.chunks_exact(self.width.max(1))
	}

	pub fn count_nonzero(&self) -> usize {
		self.data.iter().filter(|&&p| p != 0).count()
	}
}
