use crate::core::SubmitOptions;
use std::future::Future;
use std::pin::Pin;

pub type TransformFuture<'a> =
    Pin<Box<dyn Future<Output = anyhow::Result<SubmitOptions>> + Send + 'a>>;

/// Pre-submit hook. Runs after page URL capture and before the network call.
///
/// Returning an error aborts the submission: the machine settles as failed
/// and the transport is never invoked.
pub trait BeforeSubmit: Send + Sync {
    fn transform<'a>(&'a self, options: SubmitOptions) -> TransformFuture<'a>;
}

impl<F> BeforeSubmit for F
where
    F: Fn(SubmitOptions) -> anyhow::Result<SubmitOptions> + Send + Sync,
{
    fn transform<'a>(&'a self, options: SubmitOptions) -> TransformFuture<'a> {
        let result = self(options);
        Box::pin(async move { result })
    }
}
