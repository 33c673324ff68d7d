// src/ros_interface/publisher.rs
// Outbound side of the teleop surface: everything that can carry a velocity command.

use super::RosError;
use crate::teleop::VelocityCommand;
use log::info;

/// Sink for velocity commands.
///
/// Implementations are fire-and-forget: the control surface never waits on an
/// acknowledgement and only logs a returned error.
#[cfg_attr(test, mockall::automock)]
pub trait CommandPublisher {
    /// Transmit one command to the motion-control channel.
    fn publish(&self, command: &VelocityCommand) -> Result<(), RosError>;
}

/// Publisher used when no ROS 2 graph is available; it only logs each command.
#[derive(Debug, Clone, Default)]
pub struct LogCommandPublisher {
    topic: String,
}

impl LogCommandPublisher {
    /// Creates a log-only publisher reporting commands as if sent on `topic`.
    pub fn new(topic: &str) -> Self {
        LogCommandPublisher {
            topic: topic.to_string(),
        }
    }
}

impl CommandPublisher for LogCommandPublisher {
    fn publish(&self, command: &VelocityCommand) -> Result<(), RosError> {
        info!(
            "{} <- linear={:.2}, angular={:.2}",
            self.topic, command.linear, command.angular
        );
        Ok(())
    }
}

/// Publishes `geometry_msgs/msg/Twist` on a ROS 2 topic through r2r.
#[cfg(feature = "ros2")]
pub struct RosCommandPublisher {
    // Publisher handles are only valid while the node is alive.
    _node: r2r::Node,
    inner: r2r::Publisher<r2r::geometry_msgs::msg::Twist>,
}

#[cfg(feature = "ros2")]
impl RosCommandPublisher {
    /// Start a ROS 2 context, create the node and advertise the command topic.
    pub fn new(config: &crate::TeleopConfig) -> Result<Self, RosError> {
        let context = r2r::Context::create()?;
        let node_name = config.resolved_node_name();
        let mut node = r2r::Node::create(context, &node_name, &config.namespace)?;
        info!("ROS 2 node '{}' initialized", node_name);

        let qos = r2r::QosProfile::default().keep_last(config.qos_depth);
        let inner = node.create_publisher::<r2r::geometry_msgs::msg::Twist>(&config.topic, qos)?;
        info!("Publishing to {}", config.topic);

        Ok(RosCommandPublisher { _node: node, inner })
    }
}

#[cfg(feature = "ros2")]
impl CommandPublisher for RosCommandPublisher {
    fn publish(&self, command: &VelocityCommand) -> Result<(), RosError> {
        self.inner
            .publish(&command.to_ros_message())
            .map_err(|e| RosError::PublishError(e.to_string()))
    }
}
