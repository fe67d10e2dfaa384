use clap::{Parser, Subcommand};
use pullrequest_feedback::core::FeedbackCategory;
use pullrequest_feedback::widget::WidgetPosition;
use std::path::PathBuf;

/// `prfeedback` - send product feedback to Pullreque.st from the terminal.
#[derive(Parser, Debug)]
#[command(name = "prfeedback")]
#[command(version)]
#[command(about = "Send product feedback to Pullreque.st.", long_about = None)]
pub struct Cli {
    /// Log at debug level regardless of config
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit one piece of feedback and print its id
    Submit {
        /// The feedback text
        message: String,

        /// Reply-to address for the submitter
        #[arg(long)]
        email: Option<String>,

        /// loving_it, report_bug, missing_something, other
        #[arg(long)]
        category: Option<FeedbackCategory>,

        /// Page the feedback is about
        #[arg(long)]
        page_url: Option<String>,

        /// Image to attach (max size from config, default 3MB)
        #[arg(long)]
        image: Option<PathBuf>,

        /// Extra metadata, repeatable
        #[arg(long = "meta", value_name = "KEY=VALUE", value_parser = parse_meta)]
        meta: Vec<(String, String)>,

        /// Anti-abuse token
        #[arg(long)]
        captcha_token: Option<String>,

        /// Project key (overrides config and PULLREQUEST_PROJECT_KEY)
        #[arg(long)]
        project_key: Option<String>,

        /// Feedback endpoint (overrides config and PULLREQUEST_ENDPOINT)
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Print the widget stylesheet and markup
    Widget {
        /// bottom-right, bottom-left, top-right, top-left
        #[arg(long)]
        position: Option<WidgetPosition>,

        /// Floating button label
        #[arg(long)]
        button_text: Option<String>,

        /// Accent color
        #[arg(long)]
        color: Option<String>,

        /// Render with the modal open
        #[arg(long)]
        open: bool,
    },

    /// Show the resolved configuration
    Config,
}

fn parse_meta(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty key in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}
