//! ROS 2 interface for the teleop surface
//!
//! This module owns the outbound side of the crate:
//! - The `CommandPublisher` seam the control surface publishes through
//! - A log-only publisher for machines without ROS 2
//! - The r2r `Twist` publisher (behind the `ros2` feature)

mod publisher;

pub use publisher::*;

/// ROS error types
#[derive(Debug, Clone, PartialEq)]
pub enum RosError {
    /// Context, node or publisher could not be created
    InitError(String),
    /// Publishing a message failed
    PublishError(String),
}

impl std::fmt::Display for RosError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RosError::InitError(msg) => write!(f, "ROS init error: {}", msg),
            RosError::PublishError(msg) => write!(f, "Publish error: {}", msg),
        }
    }
}

impl std::error::Error for RosError {}

#[cfg(feature = "ros2")]
impl From<r2r::Error> for RosError {
    fn from(err: r2r::Error) -> Self {
        RosError::InitError(err.to_string())
    }
}
