//! slider-cmdvel - Slider Teleoperation Surface
//!
//! This library provides a small manual teleoperation window: two sliders are
//! mapped to a linear and an angular velocity, and every slider change
//! publishes a velocity command on a motion-control topic (`/cmd_vel` by
//! default). An emergency stop button zeroes both sliders and publishes a stop
//! command.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod ros_interface;
pub mod teleop;
pub mod ui;

use serde::{Deserialize, Serialize};
use std::path::Path;

// Re-export commonly used items for easier access
pub use ros_interface::{CommandPublisher, LogCommandPublisher, RosError};
#[cfg(feature = "ros2")]
pub use ros_interface::RosCommandPublisher;
pub use teleop::{ControlSurface, SliderPosition, VelocityCommand, map_velocity};
pub use ui::TeleopWindow;

/// Configuration file read from the working directory at startup.
pub const DEFAULT_CONFIG_PATH: &str = "slider_cmdvel.yaml";

/// Main configuration structure for the teleop surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeleopConfig {
    /// ROS node name
    pub node_name: String,
    /// Append a process-unique suffix to the node name
    pub anonymous: bool,
    /// ROS namespace of the node
    pub namespace: String,
    /// Motion-control topic the commands are published on
    pub topic: String,
    /// QoS history depth of the command publisher
    pub qos_depth: usize,
    /// Title of the teleop window
    pub window_title: String,
}

impl Default for TeleopConfig {
    fn default() -> Self {
        TeleopConfig {
            node_name: "velocity_control".to_string(),
            anonymous: true,
            namespace: String::new(),
            topic: "/cmd_vel".to_string(),
            qos_depth: 10,
            window_title: "Velocity Control".to_string(),
        }
    }
}

impl TeleopConfig {
    /// Read a configuration from a YAML file. Missing keys take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TeleopError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| TeleopError::ConfigError(format!("{}: {}", path.display(), e)))?;
        serde_yaml::from_reader(file)
            .map_err(|e| TeleopError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Like [`TeleopConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, TeleopError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(TeleopConfig::default());
        }
        Self::load(path)
    }

    /// Node name to register with, made unique per process when `anonymous` is set.
    pub fn resolved_node_name(&self) -> String {
        if self.anonymous {
            format!("{}_{}", self.node_name, std::process::id())
        } else {
            self.node_name.clone()
        }
    }
}

/// Teleop error types
#[derive(Debug)]
pub enum TeleopError {
    /// ROS interface error
    Ros(RosError),
    /// Configuration error
    ConfigError(String),
    /// Window or event loop error
    UiError(String),
}

impl std::fmt::Display for TeleopError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TeleopError::Ros(err) => write!(f, "{}", err),
            TeleopError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            TeleopError::UiError(msg) => write!(f, "UI error: {}", msg),
        }
    }
}

impl std::error::Error for TeleopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TeleopError::Ros(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RosError> for TeleopError {
    fn from(err: RosError) -> Self {
        TeleopError::Ros(err)
    }
}
