//! Background jobs: network calls and file loading off the UI task.
//!
//! Every job reports back by sending [`Action`]s on an unbounded channel the
//! event loop drains on each tick. Jobs are never cancelled individually; a
//! superseded job still delivers its result. Dropping the manager aborts
//! whatever is still running.

use super::actions::{Action, DialogType};
use crate::classifier::{Audience, Classifier, Features, ModelKind};
use crate::constants::ERROR_DATASET_LOAD_FAILED;
use crate::curves::load_light_curves;
use crate::ingest::load_dataset;
use log::{debug, warn};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type JobId = u64;

#[derive(Debug)]
pub struct BackgroundJob {
    pub id: JobId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: Instant,
}

impl BackgroundJob {
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

pub struct JobManager {
    jobs: HashMap<JobId, BackgroundJob>,
    next_job_id: JobId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl JobManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                jobs: HashMap::new(),
                next_job_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a future whose output is the action to deliver
    pub fn spawn<F>(&mut self, description: impl Into<String>, job: F) -> JobId
    where
        F: std::future::Future<Output = Action> + Send + 'static,
    {
        let job_id = self.next_job_id;
        self.next_job_id += 1;

        let description = description.into();
        debug!("jobs: #{} started: {}", job_id, description);

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            let action = job.await;
            if action_sender.send(action).is_err() {
                warn!("jobs: #{} finished after the UI closed", job_id);
            }
        });

        self.jobs.insert(
            job_id,
            BackgroundJob {
                id: job_id,
                handle,
                description,
                started_at: Instant::now(),
            },
        );
        job_id
    }

    /// Classify one feature set
    pub fn spawn_classify(&mut self, classifier: Arc<dyn Classifier>, model: ModelKind, features: Features) -> JobId {
        self.spawn(format!("Classify with {}", model), async move {
            match classifier.classify(model, &features).await {
                Ok(prediction) => Action::PredictionReady(prediction),
                Err(e) => Action::ClassificationFailed(e.to_string()),
            }
        })
    }

    /// Classify every row of a CSV file
    pub fn spawn_classify_file(&mut self, classifier: Arc<dyn Classifier>, model: ModelKind, path: PathBuf) -> JobId {
        self.spawn(format!("Classify {} with {}", path.display(), model), async move {
            match classifier.classify_file(model, &path).await {
                Ok(batch) => Action::BatchReady(batch),
                Err(e) => Action::ClassificationFailed(e.to_string()),
            }
        })
    }

    /// Fetch an explanation for a feature set
    pub fn spawn_explain(&mut self, classifier: Arc<dyn Classifier>, features: Features, audience: Audience) -> JobId {
        self.spawn(format!("Explain for {:?}", audience), async move {
            match classifier.explain(&features, audience).await {
                Ok(explanation) => Action::ExplanationReady(explanation),
                Err(e) => Action::ExplanationFailed(e.to_string()),
            }
        })
    }

    /// Parse a dataset CSV on the blocking pool
    pub fn spawn_dataset_load(&mut self, path: PathBuf) -> JobId {
        self.spawn(format!("Load dataset {}", path.display()), async move {
            let display = path.display().to_string();
            match tokio::task::spawn_blocking(move || load_dataset(&path)).await {
                Ok(Ok(dataset)) => Action::DatasetLoaded(dataset.shared()),
                Ok(Err(e)) => Action::ShowDialog(DialogType::Error(format!(
                    "{}: {}",
                    ERROR_DATASET_LOAD_FAILED,
                    e
                ))),
                Err(e) => Action::ShowDialog(DialogType::Error(format!(
                    "{} {}: {}",
                    ERROR_DATASET_LOAD_FAILED,
                    display,
                    e
                ))),
            }
        })
    }

    /// Parse a light-curve CSV on the blocking pool
    pub fn spawn_curve_load(&mut self, path: PathBuf) -> JobId {
        self.spawn(format!("Load light curves {}", path.display()), async move {
            let source = path.clone();
            match tokio::task::spawn_blocking(move || load_light_curves(&source)).await {
                Ok(Ok(curves)) => Action::CurvesLoaded { path, curves },
                Ok(Err(e)) => Action::CurvesFailed(e.to_string()),
                Err(e) => Action::CurvesFailed(e.to_string()),
            }
        })
    }

    /// Drop bookkeeping for jobs that have finished
    pub fn cleanup_finished_jobs(&mut self) -> Vec<JobId> {
        let finished: Vec<JobId> = self
            .jobs
            .iter()
            .filter(|(_, job)| job.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for job_id in &finished {
            if let Some(job) = self.jobs.remove(job_id) {
                debug!("jobs: #{} done after {:?}: {}", job.id, job.elapsed(), job.description);
            }
        }
        finished
    }

    /// Cancel all running jobs
    pub fn cancel_all_jobs(&mut self) {
        for (_, job) in self.jobs.drain() {
            job.handle.abort();
        }
    }

    /// Get the number of active jobs
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_busy(&self) -> bool {
        !self.jobs.is_empty()
    }

    /// Descriptions of running jobs, oldest first
    pub fn descriptions(&self) -> Vec<String> {
        let mut jobs: Vec<&BackgroundJob> = self.jobs.values().collect();
        jobs.sort_by_key(|job| job.id);
        jobs.into_iter().map(|job| job.description.clone()).collect()
    }
}

impl Drop for JobManager {
    fn drop(&mut self) {
        // Cancel all jobs when the manager is dropped
        self.cancel_all_jobs();
    }
}
