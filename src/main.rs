use ferrohue::modules::input::CameraInput;
use ferrohue::modules::output::WindowOutput;
use ferrohue::modules::threshold::hue_window;
use ferrohue::modules::{InputModule, OutputModule};
use ferrohue::settings::SETTINGS_FILE;
use ferrohue::{Result, VisionLoop, VisionSettings};

use log::info;

// Main
fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.target(env_logger::Target::Stdout)
		.init();

	//Load Vision Settings
	let vset = VisionSettings::load_or_default(SETTINGS_FILE)?;
	for band in hue_window(vset.threshold.target, vset.threshold.wrap).bands() {
		info!("hsv band {:?} - {:?}", band.lower, band.upper);
	}

	//Input Module
	let input = CameraInput::new(&vset)?;

	//Output Module
	let output = match WindowOutput::new(&vset) {
		Ok(output) => output,
		Err(e) => {
			let mut input = input;
			input.release()?;
			return Err(e);
		}
	};

	//Main Vision Loop
	VisionLoop::new(input, output, &vset).run()?;
	Ok(())
}
