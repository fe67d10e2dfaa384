use super::transform::BeforeSubmit;
use crate::core::{PageLocator, SubmissionResult};
use crate::error::SubmissionError;
use std::sync::Arc;

pub type SuccessCallback = Arc<dyn Fn(&SubmissionResult) + Send + Sync>;
pub type ErrorCallback = Arc<dyn Fn(&SubmissionError) + Send + Sync>;

/// What happens when `submit` is called while another submit is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConcurrencyPolicy {
    /// Both calls run; whichever completes last decides the visible state.
    #[default]
    Overlap,
    /// The second call is refused with a `Busy` error and the state is left
    /// alone.
    RejectWhileSubmitting,
}

#[derive(Clone)]
pub struct SubmissionOptions {
    pub(crate) before_submit: Option<Arc<dyn BeforeSubmit>>,
    pub(crate) on_success: Option<SuccessCallback>,
    pub(crate) on_error: Option<ErrorCallback>,
    pub(crate) auto_capture_url: bool,
    pub(crate) locator: Option<Arc<dyn PageLocator>>,
    pub(crate) concurrency: ConcurrencyPolicy,
}

impl Default for SubmissionOptions {
    fn default() -> Self {
        Self {
            before_submit: None,
            on_success: None,
            on_error: None,
            auto_capture_url: true,
            locator: None,
            concurrency: ConcurrencyPolicy::default(),
        }
    }
}

impl SubmissionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn before_submit(mut self, hook: impl BeforeSubmit + 'static) -> Self {
        self.before_submit = Some(Arc::new(hook));
        self
    }

    pub fn on_success(mut self, callback: impl Fn(&SubmissionResult) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(callback));
        self
    }

    pub fn on_error(mut self, callback: impl Fn(&SubmissionError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(callback));
        self
    }

    /// Fill `pageUrl` from the client's locator when the caller leaves it
    /// out. On by default.
    pub fn auto_capture_url(mut self, enabled: bool) -> Self {
        self.auto_capture_url = enabled;
        self
    }

    /// Page source for auto-capture, in place of the client's.
    pub fn locator(mut self, locator: Arc<dyn PageLocator>) -> Self {
        self.locator = Some(locator);
        self
    }

    pub fn concurrency(mut self, policy: ConcurrencyPolicy) -> Self {
        self.concurrency = policy;
        self
    }
}

impl std::fmt::Debug for SubmissionOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionOptions")
            .field("before_submit", &self.before_submit.is_some())
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("auto_capture_url", &self.auto_capture_url)
            .field("locator", &self.locator)
            .field("concurrency", &self.concurrency)
            .finish()
    }
}
