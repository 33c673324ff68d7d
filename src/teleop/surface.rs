// src/teleop/surface.rs
// Slider state of the teleop window and the publish-on-change logic behind it.

use super::mapper::{SliderPosition, VelocityCommand, map_velocity};
use crate::ros_interface::CommandPublisher;
use log::{debug, error, warn};

/// State behind the teleop window: two slider positions, the two velocity
/// labels and the publisher every change is forwarded to.
///
/// Each real change to either slider publishes exactly one command carrying
/// both axes. There is no debouncing, so a fast drag publishes once per step.
pub struct ControlSurface<P> {
    publisher: P,
    linear: SliderPosition,
    angular: SliderPosition,
    linear_label: String,
    angular_label: String,
}

impl<P: CommandPublisher> ControlSurface<P> {
    /// Creates a surface at rest. Nothing is published until the first change.
    pub fn new(publisher: P) -> Self {
        let rest = VelocityCommand::STOP;
        ControlSurface {
            publisher,
            linear: SliderPosition::ZERO,
            angular: SliderPosition::ZERO,
            linear_label: linear_label(rest.linear),
            angular_label: angular_label(rest.angular),
        }
    }

    /// Current linear slider position.
    pub fn linear(&self) -> SliderPosition {
        self.linear
    }

    /// Current angular slider position.
    pub fn angular(&self) -> SliderPosition {
        self.angular
    }

    /// Text of the linear velocity label.
    pub fn linear_label(&self) -> &str {
        &self.linear_label
    }

    /// Text of the angular velocity label.
    pub fn angular_label(&self) -> &str {
        &self.angular_label
    }

    /// Borrow the injected publisher.
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Change handler of the linear slider.
    ///
    /// Returns the published command, or `None` when `raw` equals the current
    /// position and nothing changed.
    pub fn set_linear(&mut self, raw: i32) -> Option<VelocityCommand> {
        let position = SliderPosition::new(raw);
        if position == self.linear {
            return None;
        }
        self.linear = position;
        Some(self.on_slider_changed())
    }

    /// Change handler of the angular slider. Same contract as [`Self::set_linear`].
    pub fn set_angular(&mut self, raw: i32) -> Option<VelocityCommand> {
        let position = SliderPosition::new(raw);
        if position == self.angular {
            return None;
        }
        self.angular = position;
        Some(self.on_slider_changed())
    }

    /// Recompute the command from both sliders, refresh the labels and publish.
    pub fn on_slider_changed(&mut self) -> VelocityCommand {
        let command = map_velocity(self.linear, self.angular);

        self.linear_label = linear_label(command.linear);
        self.angular_label = angular_label(command.angular);

        match self.publisher.publish(&command) {
            Ok(()) => debug!(
                "Published command: linear={:.2}, angular={:.2}",
                command.linear, command.angular
            ),
            Err(e) => error!("Failed to publish command: {}", e),
        }

        command
    }

    /// Snap both sliders back to zero and publish a stop command.
    ///
    /// Sliders that were off zero publish their own change first; the final
    /// stop is published unconditionally, so it goes out even when the
    /// surface was already at rest.
    pub fn emergency_stop(&mut self) -> VelocityCommand {
        warn!(
            "Emergency stop (linear={}, angular={})",
            self.linear.raw(),
            self.angular.raw()
        );
        self.set_linear(0);
        self.set_angular(0);
        self.on_slider_changed()
    }
}

fn linear_label(velocity: f64) -> String {
    format!("Linear Velocity: {:.2}", display_value(velocity))
}

fn angular_label(velocity: f64) -> String {
    format!("Angular Velocity: {:.2}", display_value(velocity))
}

// Adding +0.0 turns -0.0 into 0.0 so a resting axis never shows "-0.00".
fn display_value(velocity: f64) -> f64 {
    velocity + 0.0
}
