use pullrequest_feedback::config::Config;
use pullrequest_feedback::hooks::FeedbackContext;
use pullrequest_feedback::widget::{WidgetOptions, WidgetPosition};
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn file_config_drives_widget_and_context() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r##"
project_key = "prj_pk_file"
endpoint = "https://feedback.internal.example/api/feedback"
timeout_secs = 5

[widget]
position = "top-left"
button_text = "Tell us"
primary_color = "#112233"

[attachments]
max_image_mb = 1
"##,
    );

    let mut config: Config = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    config.config_path = path;
    config.validate().unwrap();

    let options = WidgetOptions::from_config(&config).unwrap();
    assert_eq!(options.position, WidgetPosition::TopLeft);
    assert_eq!(options.button_text, "Tell us");
    assert_eq!(options.max_image_bytes, 1_024 * 1_024);

    let ctx = FeedbackContext::from_config(&config).unwrap();
    assert_eq!(ctx.client().project_key(), "prj_pk_file");
    assert_eq!(
        ctx.client().endpoint(),
        "https://feedback.internal.example/api/feedback"
    );
}

#[test]
fn non_http_endpoint_fails_validation() {
    let config = Config {
        endpoint: Some("ftp://example.com/feedback".into()),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}
