//! JSON shapes exchanged with `POST /predict`.
//!
//! Field names are part of the service contract and must not be renamed.

use serde::{Deserialize, Serialize};

/// The four attributes describing one student.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    /// Number of absences.
    pub faltas: f64,
    /// Average grade.
    pub nota_media: f64,
    /// Weekly work hours.
    pub horas_trabalho: f64,
    /// Age in years.
    pub idade: f64,
}

/// Request body. The service accepts a batch; the app always sends one student.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub alunos: Vec<StudentInput>,
}

impl PredictRequest {
    pub fn single(student: StudentInput) -> Self {
        Self {
            alunos: vec![student],
        }
    }
}

/// One scored student as returned by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictResponseItem {
    /// Dropout probability, nominally in `0.0..=1.0`. Not clamped.
    pub risk_score: f64,
    /// Opaque identifier of the model that produced the score.
    pub model_version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub results: Vec<PredictResponseItem>,
}
