//! Plain state read and written by the controller and the renderer.

use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Everything the window draws.
#[derive(Clone, Debug)]
pub struct UiState {
    pub form: PredictionFormState,
    pub status: StatusBarState,
    /// Endpoint shown in the footer, for orientation only.
    pub endpoint_label: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            form: PredictionFormState::default(),
            status: StatusBarState::idle(),
            endpoint_label: String::new(),
        }
    }
}

/// Footer badge and message.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self::new("Fill in the student data to request a prediction", StatusTone::Idle)
    }

    pub fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            badge_label: style::status_badge_label(tone).to_string(),
            badge_color: style::status_badge_color(tone),
        }
    }
}

/// Raw text typed into the four inputs, kept verbatim between submissions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub faltas: String,
    pub nota_media: String,
    pub horas_trabalho: String,
    pub idade: String,
}

/// The single prediction form and its latest outcome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionFormState {
    pub fields: StudentForm,
    /// Verdict, validation notice, or error description.
    pub result_message: String,
    /// Score of the last successful prediction.
    pub risk_score: Option<f64>,
    /// Model that produced [`Self::risk_score`].
    pub model_version: Option<String>,
    /// True while a request is outstanding; disables the submit button.
    pub in_flight: bool,
}

impl PredictionFormState {
    /// The result section stays hidden until there is something to show.
    pub fn shows_result(&self) -> bool {
        !self.result_message.is_empty() || self.risk_score.is_some()
    }

    pub(crate) fn clear_outcome(&mut self) {
        self.result_message.clear();
        self.risk_score = None;
        self.model_version = None;
    }
}
