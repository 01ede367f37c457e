use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisionError {
	#[error("Failed to capture frame. Check the camera index or connection.")]
	CaptureFailure,

	#[error("camera {0} could not be opened")]
	CameraUnavailable(i32),

	#[error("frame layout mismatch: expected {expected} bytes, got {actual}")]
	FrameLayout { expected: usize, actual: usize },

	#[error("unsupported frame type {0}, expected 8-bit BGR")]
	FrameType(i32),

	#[error("could not read settings: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid settings: {0}")]
	Settings(#[from] toml::de::Error),

	#[cfg(feature = "camera")]
	#[error(transparent)]
	OpenCv(#[from] opencv::Error),
}

pub type Result<T> = std::result::Result<T, VisionError>;
