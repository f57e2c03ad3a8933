//! Recording connector for factory tests
//!
//! Stands in for the external connect primitive. Every target it is asked to
//! connect to is recorded, and each call yields a distinct handle so tests can
//! check that nothing is cached between calls.

use std::sync::Mutex;

use async_trait::async_trait;
use db_select::{ConnectionTarget, Connector};
use thiserror::Error;

/// Handle produced by [`RecordingConnector`]. `id` is the zero-based call index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedHandle {
    pub id: usize,
    pub target: ConnectionTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("connection refused by test double: {message}")]
pub struct RecordingError {
    pub message: String,
    pub target: ConnectionTarget,
}

#[derive(Debug, Default)]
pub struct RecordingConnector {
    targets: Mutex<Vec<ConnectionTarget>>,
    failure: Option<String>,
}

impl RecordingConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// A connector that records the target and then fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            targets: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    /// Targets seen so far, in call order.
    pub fn targets(&self) -> Vec<ConnectionTarget> {
        self.targets.lock().expect("recording poisoned").clone()
    }

    pub fn calls(&self) -> usize {
        self.targets.lock().expect("recording poisoned").len()
    }

    pub fn last_target(&self) -> Option<ConnectionTarget> {
        self.targets.lock().expect("recording poisoned").last().cloned()
    }
}

#[async_trait]
impl Connector for RecordingConnector {
    type Handle = RecordedHandle;
    type Error = RecordingError;

    async fn connect(&self, target: &ConnectionTarget) -> Result<RecordedHandle, RecordingError> {
        let id = {
            let mut targets = self.targets.lock().expect("recording poisoned");
            targets.push(target.clone());
            targets.len() - 1
        };

        match &self.failure {
            Some(message) => Err(RecordingError {
                message: message.clone(),
                target: target.clone(),
            }),
            None => Ok(RecordedHandle {
                id,
                target: target.clone(),
            }),
        }
    }
}
