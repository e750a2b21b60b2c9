use crate::prediction::{PredictError, PredictResponseItem, Predictor, StudentInput};
use std::{
    sync::{
        Arc,
        mpsc::{self, Receiver, TryRecvError},
    },
    thread,
};

type PredictionResult = Result<PredictResponseItem, PredictError>;

/// How an outstanding prediction ended.
#[derive(Debug)]
pub(crate) enum PredictionJobOutcome {
    Finished(PredictionResult),
    /// The worker went away without reporting, e.g. it panicked.
    WorkerLost,
}

/// Owns the receiving end of the one prediction worker that may be running.
#[derive(Default)]
pub(crate) struct ControllerJobs {
    prediction_rx: Option<Receiver<PredictionResult>>,
}

impl ControllerJobs {
    pub(super) fn prediction_in_progress(&self) -> bool {
        self.prediction_rx.is_some()
    }

    pub(super) fn begin_prediction(&mut self, predictor: Arc<dyn Predictor>, student: StudentInput) {
        if self.prediction_in_progress() {
            return;
        }
        let (tx, rx) = mpsc::channel();
        self.prediction_rx = Some(rx);
        let spawned = thread::Builder::new()
            .name("prediction".into())
            .spawn(move || {
                let result = predictor.predict(&student);
                // The form may have been torn down meanwhile; nobody is left to tell.
                let _ = tx.send(result);
            });
        // On failure the closure and its sender are dropped, so the next poll sees `WorkerLost`.
        if let Err(err) = spawned {
            tracing::error!("Failed to start prediction worker: {err}");
        }
    }

    /// Non-blocking; returns `Some` exactly once per started prediction.
    pub(super) fn poll_prediction(&mut self) -> Option<PredictionJobOutcome> {
        let outcome = match self.prediction_rx.as_ref()?.try_recv() {
            Ok(result) => PredictionJobOutcome::Finished(result),
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => PredictionJobOutcome::WorkerLost,
        };
        self.prediction_rx = None;
        Some(outcome)
    }
}
