#[cfg(feature = "camera")]
pub mod camera;

#[cfg(feature = "camera")]
pub use camera::CameraInput;
