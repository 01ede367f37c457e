pub mod hsv;
pub mod huerange;
pub mod simplecolor;

pub use hsv::bgr_to_hsv;
pub use huerange::{hue_limits, hue_window, HsvBounds, HueWindow, HueWrap};
pub use simplecolor::{threshold, SimpleColor};
