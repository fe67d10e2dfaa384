use std::sync::{Arc, Mutex};

use pullrequest_feedback::error::ErrorKind;
use pullrequest_feedback::prelude::{
    FeedbackButton, FeedbackButtonProps, FeedbackWidget, WidgetOptions, WidgetPosition, init,
};

use super::endpoint_harness::{Endpoint, png_of_len};

const THREE_MB: usize = 3 * 1_024 * 1_024;

#[tokio::test]
async fn widget_round_trip_from_open_to_toast() {
    let endpoint = Endpoint::start().await;
    endpoint.accept("fb_w1").await;

    let mut widget = init(
        WidgetOptions::new("prj_pk_1")
            .endpoint(endpoint.url.clone())
            .position(WidgetPosition::BottomLeft),
    )
    .unwrap();

    widget.open();
    widget.set_message("The export button is hidden");
    widget.set_email("qa@example.com");
    widget
        .attach_image(&png_of_len(512), Some("image/png"), Some("export.png"))
        .unwrap();

    let result = widget.submit().await.unwrap();
    assert_eq!(result.id, "fb_w1");

    let view = widget.view();
    assert!(view.success);
    assert_eq!(view.toast.as_deref(), Some("Thanks for your feedback!"));
    assert!(view.attachment.is_none());

    let bodies = endpoint.bodies().await;
    assert_eq!(bodies[0]["message"], "The export button is hidden");
    assert_eq!(bodies[0]["userEmail"], "qa@example.com");
    assert_eq!(bodies[0]["assets"][0]["size"], 512);

    widget.close();
    assert!(!widget.is_open());
    assert!(widget.state().is_idle());
    widget.destroy();
}

#[tokio::test]
async fn oversized_image_never_touches_state_or_network() {
    let endpoint = Endpoint::start().await;
    endpoint.accept("fb_unused").await;

    let mut widget =
        FeedbackWidget::new(WidgetOptions::new("prj_pk_1").endpoint(endpoint.url.clone())).unwrap();
    widget.open();

    let err = widget
        .attach_image(&png_of_len(THREE_MB + 1), None, Some("huge.png"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Attachment);
    assert_eq!(
        widget.view().error_banner.as_deref(),
        Some("Image must be less than 3MB")
    );
    assert!(widget.state().is_idle());
    assert!(endpoint.bodies().await.is_empty());
}

#[tokio::test]
async fn two_widgets_keep_separate_state() {
    let endpoint = Endpoint::start().await;
    endpoint.reject(429, "rate limited").await;

    let options = WidgetOptions::new("prj_pk_1").endpoint(endpoint.url.clone());
    let mut first = FeedbackWidget::new(options.clone()).unwrap();
    let second = FeedbackWidget::new(options).unwrap();

    first.set_message("one");
    assert!(first.submit().await.is_err());
    assert!(first.state().error().is_some());
    assert!(second.state().is_idle());
}

#[tokio::test]
async fn button_reports_failures_and_keeps_dialog_open() {
    let endpoint = Endpoint::start().await;
    endpoint.reject(500, "rate limited").await;

    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = errors.clone();
    let mut button = FeedbackButton::new(
        FeedbackButtonProps::new("prj_pk_1")
            .endpoint(endpoint.url.clone())
            .on_error(move |err| sink.lock().unwrap().push(err.message.clone())),
    );
    button.open();
    button.set_message("dark mode please");

    assert!(button.submit().await.is_err());
    assert!(button.is_open());
    assert_eq!(*errors.lock().unwrap(), vec!["rate limited".to_string()]);
    assert_eq!(button.view().submit_label, "Submit");
    button.unmount();
}

#[tokio::test]
async fn rendered_markup_reflects_options() {
    let widget = FeedbackWidget::new(
        WidgetOptions::new("prj_pk_1")
            .position(WidgetPosition::TopRight)
            .button_text("Ideas?")
            .primary_color("#0055ff"),
    )
    .unwrap();

    let html = widget.render_html().unwrap();
    assert!(html.contains("pr-feedback-button top-right"));
    assert!(html.contains(">Ideas?</button>"));
    assert!(html.contains("#0055ff"));
}
