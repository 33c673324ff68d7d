// src/main.rs
// Entry point for the slider teleop surface: config, publisher, window.

// - env_logger: Logging backend, filtered by RUST_LOG.
// - slider_cmdvel: Control surface, publishers and the egui window.
use log::info;
use slider_cmdvel::{ControlSurface, DEFAULT_CONFIG_PATH, TeleopConfig, ui};
use std::error::Error;

/// Starts the messaging context, builds the control surface and runs the
/// window until it is closed.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    info!("Starting slider teleop...");

    let config = TeleopConfig::load_or_default(DEFAULT_CONFIG_PATH)?;

    #[cfg(feature = "ros2")]
    let publisher = slider_cmdvel::RosCommandPublisher::new(&config)?;
    #[cfg(not(feature = "ros2"))]
    let publisher = {
        log::warn!("Built without the ros2 feature; commands are only logged");
        slider_cmdvel::LogCommandPublisher::new(&config.topic)
    };

    let surface = ControlSurface::new(publisher);
    ui::run(&config, surface)?;

    info!("Teleop window closed");
    Ok(())
}
