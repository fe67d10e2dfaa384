use pullrequest_feedback::core::{FeedbackCategory, FeedbackPayload, SubmitOptions};
use pullrequest_feedback::error::{ErrorKind, FeedbackError};
use pullrequest_feedback::media::ImageAttachment;
use pullrequest_feedback::transport::{GENERIC_FAILURE_MESSAGE, build_feedback_client};
use pullrequest_feedback::{create_feedback_client, submit_feedback};
use serde_json::json;
use wiremock::ResponseTemplate;

use super::endpoint_harness::{Endpoint, png_of_len};

#[tokio::test]
async fn full_payload_reaches_endpoint_verbatim() {
    let endpoint = Endpoint::start().await;
    endpoint.accept("fb_1").await;

    let options = SubmitOptions::new("Great tool!")
        .with_page_url("https://example.com/pricing")
        .with_user_email("me@example.com")
        .with_meta("plan", "pro")
        .with_captcha_token("tok_123")
        .with_category(FeedbackCategory::LovingIt);
    let payload = FeedbackPayload::new("prj_pk_1", options);

    let result = submit_feedback(&build_feedback_client(), Some(endpoint.url.as_str()), &payload)
        .await
        .unwrap();
    assert_eq!(result.id, "fb_1");

    let bodies = endpoint.bodies().await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "projectKey": "prj_pk_1",
            "message": "Great tool!",
            "pageUrl": "https://example.com/pricing",
            "userEmail": "me@example.com",
            "meta": {"plan": "pro"},
            "captchaToken": "tok_123",
            "category": "loving_it"
        })
    );
}

#[tokio::test]
async fn image_asset_keeps_original_size() {
    let endpoint = Endpoint::start().await;
    endpoint.accept("fb_img").await;

    let image = ImageAttachment::from_bytes(&png_of_len(2_048), None, Some("shot.png")).unwrap();
    let client = create_feedback_client("prj_pk_1", Some(endpoint.url.as_str()));
    client
        .submit(SubmitOptions::new("see attached").with_asset(image.to_asset()))
        .await
        .unwrap();

    let bodies = endpoint.bodies().await;
    let asset = &bodies[0]["assets"][0];
    assert_eq!(asset["kind"], "image");
    assert_eq!(asset["size"], 2_048);
    assert!(asset["url"].as_str().unwrap().starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn rejection_message_comes_from_server() {
    let endpoint = Endpoint::start().await;
    endpoint.reject(500, "rate limited").await;

    let client = create_feedback_client("prj_pk_1", Some(endpoint.url.as_str()));
    let err = client.submit(SubmitOptions::new("hi")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteRejected);
    assert_eq!(err.to_string(), "rate limited");
}

#[tokio::test]
async fn rejection_without_json_uses_generic_message() {
    let endpoint = Endpoint::start().await;
    endpoint
        .respond(ResponseTemplate::new(503).set_body_string("upstream down"))
        .await;

    let client = create_feedback_client("prj_pk_1", Some(endpoint.url.as_str()));
    let err = client.submit(SubmitOptions::new("hi")).await.unwrap_err();
    match err {
        FeedbackError::RemoteRejected { status, message, .. } => {
            assert_eq!(status, 503);
            assert_eq!(message, GENERIC_FAILURE_MESSAGE);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_distinct_from_rejection() {
    let client = create_feedback_client("prj_pk_1", Some("http://127.0.0.1:1/api/feedback"));
    let err = client.submit(SubmitOptions::new("hi")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransportFailed);
}

#[tokio::test]
async fn each_call_is_a_single_attempt() {
    let endpoint = Endpoint::start().await;
    endpoint.reject(502, "bad gateway").await;

    let client = create_feedback_client("prj_pk_1", Some(endpoint.url.as_str()));
    assert!(client.submit(SubmitOptions::new("once")).await.is_err());
    assert_eq!(endpoint.bodies().await.len(), 1);
}
