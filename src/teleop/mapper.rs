// src/teleop/mapper.rs
// Maps raw slider positions to the velocity command sent on the motion-control topic.

use serde::{Deserialize, Serialize};

/// Scale between one slider step and one unit of velocity.
const SLIDER_SCALE: f64 = 100.0;

/// Position of a single teleop slider.
///
/// Always within `[SliderPosition::MIN, SliderPosition::MAX]`; values outside
/// that range are clamped on construction, the same way a range-bounded slider
/// widget refuses to move past its ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SliderPosition(i32);

impl SliderPosition {
    /// Lowest slider position.
    pub const MIN: i32 = -100;
    /// Highest slider position.
    pub const MAX: i32 = 100;
    /// Resting position of both sliders.
    pub const ZERO: SliderPosition = SliderPosition(0);

    /// Creates a slider position, clamping `raw` into the slider range.
    pub fn new(raw: i32) -> Self {
        SliderPosition(raw.clamp(Self::MIN, Self::MAX))
    }

    /// Raw integer value of the slider.
    pub fn raw(self) -> i32 {
        self.0
    }
}

impl From<i32> for SliderPosition {
    fn from(raw: i32) -> Self {
        SliderPosition::new(raw)
    }
}

/// Velocity command for the robot base.
///
/// Only forward and yaw components are carried; both lie in `[-1.0, 1.0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VelocityCommand {
    /// Forward velocity
    pub linear: f64,
    /// Yaw rate
    pub angular: f64,
}

impl VelocityCommand {
    /// The all-stop command.
    pub const STOP: VelocityCommand = VelocityCommand {
        linear: 0.0,
        angular: 0.0,
    };

    /// Convert to a ROS `geometry_msgs/msg/Twist`.
    #[cfg(feature = "ros2")]
    pub fn to_ros_message(&self) -> r2r::geometry_msgs::msg::Twist {
        r2r::geometry_msgs::msg::Twist {
            linear: r2r::geometry_msgs::msg::Vector3 {
                x: self.linear,
                y: 0.0,
                z: 0.0,
            },
            angular: r2r::geometry_msgs::msg::Vector3 {
                x: 0.0,
                y: 0.0,
                z: self.angular,
            },
        }
    }
}

/// Turns the two slider positions into a velocity command.
///
/// The angular slider is inverted: pushing it towards its positive end turns
/// the robot clockwise (negative yaw rate).
pub fn map_velocity(linear: SliderPosition, angular: SliderPosition) -> VelocityCommand {
    VelocityCommand {
        linear: f64::from(linear.raw()) / SLIDER_SCALE,
        angular: -(f64::from(angular.raw()) / SLIDER_SCALE),
    }
}
