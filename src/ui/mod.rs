//! Teleop window
//!
//! Draws the control surface with egui and forwards slider and button
//! interaction to it. Layout, top to bottom: linear label, linear slider,
//! angular label, angular slider, emergency stop button.

use crate::ros_interface::CommandPublisher;
use crate::teleop::{ControlSurface, SliderPosition};
use crate::{TeleopConfig, TeleopError};
use eframe::egui;

/// eframe application wrapping a [`ControlSurface`].
pub struct TeleopWindow<P> {
    surface: ControlSurface<P>,
}

impl<P: CommandPublisher> TeleopWindow<P> {
    /// Wrap a surface for display.
    pub fn new(surface: ControlSurface<P>) -> Self {
        TeleopWindow { surface }
    }

    /// Read-only access to the wrapped surface.
    pub fn surface(&self) -> &ControlSurface<P> {
        &self.surface
    }

    /// Draw one frame of the surface into `ui`.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.label(self.surface.linear_label());
        let mut linear = self.surface.linear().raw();
        if ui.add(velocity_slider(&mut linear)).changed() {
            self.surface.set_linear(linear);
        }

        ui.label(self.surface.angular_label());
        let mut angular = self.surface.angular().raw();
        if ui.add(velocity_slider(&mut angular)).changed() {
            self.surface.set_angular(angular);
        }

        if ui.button("Emergency Stop").clicked() {
            self.surface.emergency_stop();
        }
    }
}

fn velocity_slider(value: &mut i32) -> egui::Slider<'_> {
    egui::Slider::new(value, SliderPosition::MIN..=SliderPosition::MAX)
        .step_by(1.0)
        .show_value(false)
}

impl<P: CommandPublisher> eframe::App for TeleopWindow<P> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| self.show(ui));
    }
}

/// Open the teleop window and block until it is closed.
pub fn run<P>(config: &TeleopConfig, surface: ControlSurface<P>) -> Result<(), TeleopError>
where
    P: CommandPublisher + 'static,
{
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size([360.0, 200.0]),
        ..Default::default()
    };
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(TeleopWindow::new(surface)))),
    )
    .map_err(|e| TeleopError::UiError(e.to_string()))
}
