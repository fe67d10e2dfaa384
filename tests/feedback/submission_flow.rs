use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use pullrequest_feedback::core::{FixedLocation, SubmitOptions};
use pullrequest_feedback::error::ErrorKind;
use pullrequest_feedback::prelude::{
    ConcurrencyPolicy, FeedbackContext, SubmissionState, UseFeedbackOptions, use_feedback,
};

use super::endpoint_harness::Endpoint;

fn context(endpoint: &Endpoint) -> FeedbackContext {
    FeedbackContext::new("prj_pk_1", Some(endpoint.url.as_str())).unwrap()
}

#[tokio::test]
async fn success_settles_and_fires_callback_once() {
    let endpoint = Endpoint::start().await;
    endpoint.accept("fb_1").await;

    let successes = Arc::new(AtomicUsize::new(0));
    let seen = successes.clone();
    let feedback = use_feedback(
        &context(&endpoint),
        UseFeedbackOptions::new().on_success(move |result| {
            assert_eq!(result.id, "fb_1");
            seen.fetch_add(1, Ordering::SeqCst);
        }),
    );

    let mut states = feedback.subscribe();
    let result = feedback.submit(SubmitOptions::new("Great tool!")).await.unwrap();
    assert_eq!(result.id, "fb_1");
    assert_eq!(successes.load(Ordering::SeqCst), 1);
    assert!(states.has_changed().unwrap());
    assert!(matches!(*states.borrow_and_update(), SubmissionState::Succeeded(_)));
    assert!(!feedback.is_submitting());
    assert!(feedback.error().is_none());
}

#[tokio::test]
async fn rate_limited_failure_is_observable() {
    let endpoint = Endpoint::start().await;
    endpoint.reject(500, "rate limited").await;

    let failures = Arc::new(AtomicUsize::new(0));
    let seen = failures.clone();
    let feedback = use_feedback(
        &context(&endpoint),
        UseFeedbackOptions::new().on_error(move |err| {
            assert_eq!(err.message, "rate limited");
            seen.fetch_add(1, Ordering::SeqCst);
        }),
    );

    let err = feedback.submit(SubmitOptions::new("hi")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::RemoteRejected);
    assert_eq!(failures.load(Ordering::SeqCst), 1);
    assert_eq!(feedback.error().unwrap().message, "rate limited");
    assert!(feedback.data().is_none());

    feedback.reset();
    assert!(feedback.state().is_idle());
}

#[tokio::test]
async fn before_submit_rejection_never_hits_network() {
    let endpoint = Endpoint::start().await;
    endpoint.accept("fb_unused").await;

    let feedback = use_feedback(
        &context(&endpoint),
        UseFeedbackOptions::new().before_submit(
            |_: SubmitOptions| -> anyhow::Result<SubmitOptions> { anyhow::bail!("captcha missing") },
        ),
    );

    let err = feedback.submit(SubmitOptions::new("hi")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::TransformRejected);
    assert!(err.message.contains("captcha missing"));
    assert!(endpoint.bodies().await.is_empty());
}

#[tokio::test]
async fn page_url_is_captured_unless_disabled() {
    let endpoint = Endpoint::start().await;
    endpoint.accept("fb_page").await;

    let ctx = context(&endpoint)
        .with_locator(Arc::new(FixedLocation::parse("https://app.example.com/").unwrap()));
    use_feedback(&ctx, UseFeedbackOptions::new())
        .submit(SubmitOptions::new("with page"))
        .await
        .unwrap();
    use_feedback(&ctx, UseFeedbackOptions::new().auto_capture_url(false))
        .submit(SubmitOptions::new("without page"))
        .await
        .unwrap();

    let bodies = endpoint.bodies().await;
    assert_eq!(bodies[0]["pageUrl"], "https://app.example.com/");
    assert!(bodies[1].get("pageUrl").is_none());
}

#[tokio::test]
async fn reject_policy_refuses_second_submit_in_flight() {
    let endpoint = Endpoint::start().await;
    endpoint
        .accept_after("fb_slow", Duration::from_millis(300))
        .await;

    let feedback = use_feedback(
        &context(&endpoint),
        UseFeedbackOptions::new().concurrency(ConcurrencyPolicy::RejectWhileSubmitting),
    );
    let first = {
        let feedback = feedback.clone();
        tokio::spawn(async move { feedback.submit(SubmitOptions::new("first")).await })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;

    let err = feedback.submit(SubmitOptions::new("second")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Busy);
    assert!(feedback.is_submitting());

    assert_eq!(first.await.unwrap().unwrap().id, "fb_slow");
    assert_eq!(endpoint.bodies().await.len(), 1);
}

#[tokio::test]
async fn disposed_owner_sees_no_late_effects() {
    let endpoint = Endpoint::start().await;
    endpoint
        .accept_after("fb_late", Duration::from_millis(200))
        .await;

    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();
    let feedback = use_feedback(
        &context(&endpoint),
        UseFeedbackOptions::new().on_success(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        }),
    );
    let mut rx = feedback.subscribe();
    let pending = {
        let feedback = feedback.clone();
        tokio::spawn(async move { feedback.submit(SubmitOptions::new("late")).await })
    };
    rx.wait_for(SubmissionState::is_submitting).await.unwrap();
    feedback.dispose();

    assert!(pending.await.unwrap().is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(feedback.state().is_submitting());
}
