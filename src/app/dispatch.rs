use crate::app::status::render_config;
use crate::cli::commands::{Cli, Commands};
use anyhow::{Context, Result, bail};
use pullrequest_feedback::client::FeedbackClient;
use pullrequest_feedback::config::Config;
use pullrequest_feedback::core::{FeedbackCategory, FixedLocation, SubmitOptions};
use pullrequest_feedback::media::ImageAttachment;
use pullrequest_feedback::transport::build_feedback_client_with_timeout;
use pullrequest_feedback::ui::style as ui;
use pullrequest_feedback::widget::{FeedbackWidget, WidgetOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

struct SubmitArgs {
    message: String,
    email: Option<String>,
    category: Option<FeedbackCategory>,
    page_url: Option<String>,
    image: Option<PathBuf>,
    meta: Vec<(String, String)>,
    captcha_token: Option<String>,
    project_key: Option<String>,
    endpoint: Option<String>,
}

/// Resolve the client for a one-shot submit: flags beat env, env beats file.
fn submit_client(config: &Config, args: &SubmitArgs) -> Result<FeedbackClient> {
    let project_key = match args.project_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => config.project_key()?.to_string(),
    };
    let endpoint = args.endpoint.as_deref().unwrap_or_else(|| config.endpoint());

    let mut client = FeedbackClient::new(project_key, Some(endpoint))
        .with_http_client(build_feedback_client_with_timeout(config.timeout_secs));
    if let Some(page_url) = &args.page_url {
        let locator = FixedLocation::parse(page_url)
            .map_err(|e| anyhow::anyhow!("Invalid --page-url `{page_url}`: {e}"))?;
        client = client.with_locator(Arc::new(locator));
    }
    Ok(client)
}

fn submit_options(config: &Config, args: SubmitArgs) -> Result<SubmitOptions> {
    let message = args.message.trim();
    if message.is_empty() {
        bail!("Please enter a message");
    }

    let mut options = SubmitOptions::new(message)
        .with_meta("source", "cli")
        .with_meta("submittedAt", chrono::Utc::now().to_rfc3339());
    for (key, value) in args.meta {
        options = options.with_meta(key, value);
    }
    if let Some(email) = args.email.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
        options = options.with_user_email(email);
    }
    if let Some(category) = args.category {
        options = options.with_category(category);
    }
    if let Some(token) = args.captcha_token {
        options = options.with_captcha_token(token);
    }
    if let Some(path) = &args.image {
        let attachment =
            ImageAttachment::from_path_with_limit(path, config.attachments.max_image_bytes())
                .with_context(|| format!("Cannot attach {}", path.display()))?;
        options = options.with_asset(attachment.to_asset());
    }
    Ok(options)
}

async fn run_submit(config: &Config, args: SubmitArgs) -> Result<()> {
    let client = submit_client(config, &args)?;
    let options = submit_options(config, args)?;

    info!(endpoint = client.endpoint(), "sending feedback");
    let result = client.submit(options).await?;

    println!(
        "{} {} {}",
        ui::success("✓"),
        ui::header("Feedback received"),
        ui::value(&result.id)
    );
    Ok(())
}

fn run_widget(
    config: &Config,
    position: Option<pullrequest_feedback::widget::WidgetPosition>,
    button_text: Option<String>,
    color: Option<String>,
    open: bool,
) -> Result<()> {
    // Previews render without a configured key.
    let mut options = WidgetOptions::from_config(config)
        .unwrap_or_else(|_| WidgetOptions::new("prj_pk_preview"));
    if let Some(position) = position {
        options = options.position(position);
    }
    if let Some(text) = button_text {
        options = options.button_text(text);
    }
    if let Some(color) = color {
        options = options.primary_color(color);
    }

    let mut widget = FeedbackWidget::new(options)?;
    if open {
        widget.open();
    }
    println!("{}", widget.render_html()?);
    widget.destroy();
    Ok(())
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Submit {
            message,
            email,
            category,
            page_url,
            image,
            meta,
            captcha_token,
            project_key,
            endpoint,
        } => {
            let args = SubmitArgs {
                message,
                email,
                category,
                page_url,
                image,
                meta,
                captcha_token,
                project_key,
                endpoint,
            };
            run_submit(&config, args).await
        }

        Commands::Widget {
            position,
            button_text,
            color,
            open,
        } => run_widget(&config, position, button_text, color, open),

        Commands::Config => {
            println!("{}", render_config(&config));
            Ok(())
        }
    }
}
