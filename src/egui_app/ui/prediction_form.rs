use super::EguiApp;
use super::style;
use crate::egui_app::controller::{RiskVerdict, risk_percent_label};
use crate::egui_app::state::PredictionFormState;
use eframe::egui::{self, RichText};

const FIELD_WIDTH: f32 = 220.0;

impl EguiApp {
    /// Student inputs, the submit button, and the result section.
    pub(super) fn render_prediction_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Dropout prediction");
        ui.add_space(12.0);

        let in_flight = self.controller.ui.form.in_flight;
        section(ui, "Student data", |ui| {
            let fields = &mut self.controller.ui.form.fields;
            egui::Grid::new("student_fields")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    numeric_field(ui, "Absences", &mut fields.faltas, "e.g. 3");
                    numeric_field(ui, "Average grade", &mut fields.nota_media, "e.g. 7,5");
                    numeric_field(ui, "Work hours", &mut fields.horas_trabalho, "e.g. 20");
                    numeric_field(ui, "Age", &mut fields.idade, "e.g. 19");
                });
        });

        ui.add_space(10.0);
        let mut submit_clicked = false;
        ui.horizontal(|ui| {
            submit_clicked = ui
                .add_enabled(!in_flight, egui::Button::new("Predict dropout"))
                .clicked();
            if in_flight {
                ui.spinner();
            }
        });
        if submit_clicked {
            self.controller.submit_prediction();
        }

        let form = &self.controller.ui.form;
        if form.shows_result() {
            ui.add_space(12.0);
            section(ui, "Result", |ui| render_result(ui, form));
        }
    }
}

fn section(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui)) {
    ui.label(RichText::new(title).strong());
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        body(ui);
    });
}

fn numeric_field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(FIELD_WIDTH),
    );
    ui.end_row();
}

fn render_result(ui: &mut egui::Ui, form: &PredictionFormState) {
    let palette = style::palette();
    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 8.0;
        if let Some(score) = form.risk_score {
            let dropout = RiskVerdict::from_score(score) == RiskVerdict::LikelyDropout;
            ui.label(
                RichText::new(format!("Risk: {}", risk_percent_label(score)))
                    .heading()
                    .color(style::risk_color(dropout)),
            );
        }
        ui.label(&form.result_message);
        if let Some(version) = &form.model_version {
            ui.label(
                RichText::new(format!("Model: {version}"))
                    .small()
                    .color(palette.text_muted),
            );
        }
    });
}
