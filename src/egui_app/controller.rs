//! Drives the prediction form: validation, the background request, and the outcome.

mod form;
mod jobs;
mod verdict;

pub use form::{VALIDATION_NOTICE, parse_decimal};
pub use verdict::{DROPOUT_THRESHOLD, RiskVerdict, risk_percent_label};

use crate::config::{AppConfig, ConfigError};
use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::StatusTone;
use crate::prediction::{PredictError, PredictResponseItem, PredictionClient, Predictor};
use jobs::{ControllerJobs, PredictionJobOutcome};
use std::sync::Arc;

/// Shown when a worker disappears without delivering a result.
pub const WORKER_LOST_MESSAGE: &str = "Prediction stopped unexpectedly.";

/// Owns the form state and bridges it to a [`Predictor`].
pub struct EguiController {
    pub ui: UiState,
    predictor: Arc<dyn Predictor>,
    jobs: ControllerJobs,
}

impl EguiController {
    /// Controller talking HTTP to the endpoint named in `config`.
    pub fn new(config: &AppConfig) -> Self {
        let client = PredictionClient::new(config.api.base_url.clone());
        let endpoint_label = match client.endpoint() {
            Ok(url) => url.to_string(),
            Err(err) => {
                tracing::warn!("Configured prediction endpoint is unusable: {err}");
                client.base_url().to_string()
            }
        };
        let mut controller = Self::with_predictor(Arc::new(client));
        controller.ui.endpoint_label = endpoint_label;
        controller
    }

    pub fn with_predictor(predictor: Arc<dyn Predictor>) -> Self {
        Self {
            ui: UiState::default(),
            predictor,
            jobs: ControllerJobs::default(),
        }
    }

    /// Tell the user the settings file was unusable and defaults are in effect.
    pub fn report_config_fallback(&mut self, err: &ConfigError) {
        self.set_status(format!("Using default settings. {err}"), StatusTone::Warning);
    }

    pub fn is_prediction_in_flight(&self) -> bool {
        self.ui.form.in_flight
    }

    /// Handle a tap on the submit button.
    ///
    /// Invalid input sets [`VALIDATION_NOTICE`] and issues no request. Otherwise
    /// one background request starts and the form stays in flight until
    /// [`Self::poll_background_jobs`] sees it finish.
    pub fn submit_prediction(&mut self) {
        if self.ui.form.in_flight || self.jobs.prediction_in_progress() {
            return;
        }
        self.ui.form.clear_outcome();
        let Some(student) = self.ui.form.fields.parse() else {
            self.ui.form.result_message = VALIDATION_NOTICE.to_string();
            self.set_status("Some fields are empty or not numbers", StatusTone::Warning);
            return;
        };

        tracing::info!(?student, "Submitting prediction");
        self.ui.form.in_flight = true;
        self.set_status("Requesting prediction…", StatusTone::Busy);
        self.jobs
            .begin_prediction(Arc::clone(&self.predictor), student);
    }

    /// Apply a finished prediction, if any. Call once per frame.
    pub fn poll_background_jobs(&mut self) {
        let Some(outcome) = self.jobs.poll_prediction() else {
            return;
        };
        self.ui.form.in_flight = false;
        match outcome {
            PredictionJobOutcome::Finished(Ok(item)) => self.apply_prediction(item),
            PredictionJobOutcome::Finished(Err(err)) => self.apply_prediction_error(&err),
            PredictionJobOutcome::WorkerLost => {
                tracing::error!("Prediction worker exited without a result");
                self.show_error(WORKER_LOST_MESSAGE);
            }
        }
    }

    fn apply_prediction(&mut self, item: PredictResponseItem) {
        let verdict = RiskVerdict::from_score(item.risk_score);
        self.set_status(
            format!(
                "Risk {} from model {}",
                risk_percent_label(item.risk_score),
                item.model_version
            ),
            StatusTone::Info,
        );
        self.ui.form.result_message = verdict.label().to_string();
        self.ui.form.risk_score = Some(item.risk_score);
        self.ui.form.model_version = Some(item.model_version);
    }

    fn apply_prediction_error(&mut self, err: &PredictError) {
        self.show_error(&err.to_string());
    }

    fn show_error(&mut self, description: &str) {
        self.ui.form.result_message = format!("Error: {description}");
        self.set_status(format!("Prediction failed: {description}"), StatusTone::Error);
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = crate::egui_app::state::StatusBarState::new(text, tone);
    }
}
