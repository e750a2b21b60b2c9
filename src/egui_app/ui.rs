//! egui renderer for the prediction window.

pub(crate) mod prediction_form;
pub mod style;

use crate::egui_app::controller::EguiController;
use eframe::egui::{self, Frame, Margin, RichText};
use std::time::Duration;

/// Smallest window that still fits the form without clipping.
pub const MIN_VIEWPORT_SIZE: [f32; 2] = [420.0, 460.0];

const IN_FLIGHT_REPAINT: Duration = Duration::from_millis(50);

/// Renders the form using the controller's state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn from_controller(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::default()
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), 6.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).strong());
                    ui.separator();
                    ui.label(&status.text);
                });
                if !self.controller.ui.endpoint_label.is_empty() {
                    ui.label(
                        RichText::new(format!("Endpoint: {}", self.controller.ui.endpoint_label))
                            .small()
                            .color(palette.text_muted),
                    );
                }
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_prediction_form(ui);
            });
        });
        if self.controller.is_prediction_in_flight() {
            ctx.request_repaint_after(IN_FLIGHT_REPAINT);
        }
    }
}
