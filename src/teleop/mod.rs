//! Teleoperation core
//!
//! Slider positions, the mapping from slider positions to a velocity command,
//! and the control surface that publishes a command on every slider change.

mod mapper;
mod surface;

pub use mapper::*;
pub use surface::*;
