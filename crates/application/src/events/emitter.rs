use ripple_domain::ProgressEvent;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// Bounded sink for the progress events of one run.
///
/// Intermediate events are sent with `try_send` and dropped when the consumer
/// falls behind, so a slow front end never stalls polling. The terminal event
/// goes through [`ProgressEmitter::finish`], which waits for queue space.
/// Anything emitted after the terminal event is discarded.
#[derive(Clone)]
pub struct ProgressEmitter {
    sender: Option<mpsc::Sender<ProgressEvent>>,
    finished: Arc<AtomicBool>,
}

impl ProgressEmitter {
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Emitter with no consumer. Used by the one-shot report path.
    pub fn new_disabled() -> Self {
        Self {
            sender: None,
            finished: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn new_enabled(capacity: usize) -> (Self, mpsc::Receiver<ProgressEvent>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let emitter = Self {
            sender: Some(tx),
            finished: Arc::new(AtomicBool::new(false)),
        };
        (emitter, rx)
    }

    /// Best-effort, never waits.
    pub fn emit(&self, event: ProgressEvent) {
        if self.finished.load(Ordering::Acquire) {
            return;
        }
        let Some(ref tx) = self.sender else {
            return;
        };
        if let Err(mpsc::error::TrySendError::Full(event)) = tx.try_send(event) {
            debug!(event = event.name(), "Progress consumer lagging, event dropped");
        }
    }

    /// Delivers the terminal event and closes the stream to further events.
    /// A second call is ignored.
    pub async fn finish(&self, event: ProgressEvent) {
        debug_assert!(event.is_terminal());
        if self.finished.swap(true, Ordering::AcqRel) {
            return;
        }
        if let Some(ref tx) = self.sender {
            // Receiver gone means nobody is listening; nothing left to deliver.
            let _ = tx.send(event).await;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }
}

impl Default for ProgressEmitter {
    fn default() -> Self {
        Self::new_disabled()
    }
}

impl std::fmt::Debug for ProgressEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressEmitter")
            .field("enabled", &self.is_enabled())
            .field("finished", &self.is_finished())
            .finish()
    }
}
