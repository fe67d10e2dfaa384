use super::options::{ConcurrencyPolicy, SubmissionOptions};
use super::state::SubmissionState;
use crate::client::FeedbackClient;
use crate::core::{SubmissionResult, SubmitOptions};
use crate::error::{FeedbackError, SubmissionError};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Submission state machine for one UI owner (a widget, a button, a hook
/// call site).
///
/// Handles are cheap to clone so a UI can move one into a spawned task; all
/// clones observe the same state. Distinct owners get distinct machines.
///
/// ```text
/// Idle ──submit──▶ Submitting ──ok──▶ Succeeded ──reset──▶ Idle
///                       │                  │
///                       └──err──▶ Failed ──┴──submit──▶ Submitting
/// ```
#[derive(Debug, Clone)]
pub struct Submission {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    client: FeedbackClient,
    options: SubmissionOptions,
    state: watch::Sender<SubmissionState>,
    disposed: AtomicBool,
}

impl Submission {
    pub fn new(client: FeedbackClient, options: SubmissionOptions) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            inner: Arc::new(Inner {
                client,
                options,
                state,
                disposed: AtomicBool::new(false),
            }),
        }
    }

    /// Run one submission to completion and settle the state with its
    /// outcome.
    ///
    /// A blank message is the caller's problem: the machine sends whatever it
    /// is given. Nothing cancels a call once issued; [`Submission::reset`]
    /// leaves it running and [`Submission::dispose`] only suppresses its
    /// effects. A machine that is already disposed sends nothing and answers
    /// `Disposed`.
    pub async fn submit(&self, options: SubmitOptions) -> Result<SubmissionResult, SubmissionError> {
        if self.is_disposed() {
            warn!("submit called on a disposed feedback owner, nothing sent");
            return Err(FeedbackError::Disposed.into());
        }
        if !self.enter_submitting() {
            debug!("submission refused, another one is in flight");
            return Err(FeedbackError::Busy.into());
        }

        let outcome = self.run(options).await.map_err(SubmissionError::from);

        if self.is_disposed() {
            debug!("owner disposed before submission settled, dropping outcome");
            return outcome;
        }

        match &outcome {
            Ok(result) => {
                info!(id = %result.id, "feedback submitted");
                self.inner
                    .state
                    .send_replace(SubmissionState::Succeeded(result.clone()));
                if let Some(callback) = &self.inner.options.on_success {
                    callback(result);
                }
            }
            Err(err) => {
                warn!(kind = %err.kind, error = %err.message, "feedback submission failed");
                self.inner
                    .state
                    .send_replace(SubmissionState::Failed(err.clone()));
                if let Some(callback) = &self.inner.options.on_error {
                    callback(err);
                }
            }
        }
        outcome
    }

    fn enter_submitting(&self) -> bool {
        let reject = self.inner.options.concurrency == ConcurrencyPolicy::RejectWhileSubmitting;
        self.inner.state.send_if_modified(|state| {
            if reject && state.is_submitting() {
                return false;
            }
            *state = SubmissionState::Submitting;
            true
        })
    }

    async fn run(&self, mut options: SubmitOptions) -> Result<SubmissionResult, FeedbackError> {
        let inner = &self.inner;
        if inner.options.auto_capture_url && options.page_url.is_none() {
            options.page_url = match &inner.options.locator {
                Some(locator) => locator.current_url(),
                None => inner.client.current_page_url(),
            };
        }

        if let Some(hook) = &inner.options.before_submit {
            options = hook
                .transform(options)
                .await
                .map_err(|e| FeedbackError::TransformRejected(e.to_string()))?;
        }

        let payload = inner.client.payload(options);
        inner.client.send(&payload).await
    }

    /// Clear a settled outcome back to idle. Does nothing while submitting.
    pub fn reset(&self) {
        self.inner.state.send_if_modified(|state| {
            if state.is_settled() {
                *state = SubmissionState::Idle;
                true
            } else {
                false
            }
        });
    }

    pub fn state(&self) -> SubmissionState {
        self.inner.state.borrow().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.inner.state.borrow().is_submitting()
    }

    pub fn error(&self) -> Option<SubmissionError> {
        self.inner.state.borrow().error().cloned()
    }

    pub fn data(&self) -> Option<SubmissionResult> {
        self.inner.state.borrow().data().cloned()
    }

    /// Change notifications, one per transition.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.inner.state.subscribe()
    }

    /// Mark the owner as gone. In-flight calls still complete, but they no
    /// longer touch the state or fire callbacks.
    pub fn dispose(&self) {
        self.inner.disposed.store(true, Ordering::Release);
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::Acquire)
    }

    pub fn client(&self) -> &FeedbackClient {
        &self.inner.client
    }
}
