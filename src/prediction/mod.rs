//! Client for the remote dropout-risk prediction service.

mod client;
mod wire;

pub use client::{DEFAULT_BASE_URL, PREDICT_PATH, PredictError, PredictionClient, Predictor};
pub use wire::{PredictRequest, PredictResponse, PredictResponseItem, StudentInput};
