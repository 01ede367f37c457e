pub mod annotate;
#[cfg(feature = "camera")]
pub mod window;

pub use annotate::draw_rectangle;
#[cfg(feature = "camera")]
pub use window::WindowOutput;
