use pullrequest_feedback::config::Config;
use pullrequest_feedback::ui::style as ui;

pub fn render_config(config: &Config) -> String {
    let project_key = config
        .project_key()
        .map_or_else(|_| ui::dim("(unset)"), ui::value);

    let timeout = config
        .timeout_secs
        .map_or_else(|| ui::dim("none"), |secs| format!("{secs}s"));

    let lines = vec![
        format!("◆ {}", ui::header("prfeedback configuration")),
        String::new(),
        format!("{}      {}", ui::cyan("Version"), env!("CARGO_PKG_VERSION")),
        format!("{}       {}", ui::cyan("Config"), config.config_path.display()),
        format!("{}  {}", ui::cyan("Project key"), project_key),
        format!("{}     {}", ui::cyan("Endpoint"), ui::url(config.endpoint())),
        format!("{}      {}", ui::cyan("Timeout"), timeout),
        format!("{}    {}", ui::cyan("Log level"), config.logging.level),
        String::new(),
        ui::header("Widget"),
        format!("  {}     {}", ui::cyan("position"), config.widget.position),
        format!("  {}  {}", ui::cyan("button text"), config.widget.button_text),
        format!("  {}        {}", ui::cyan("color"), config.widget.primary_color),
        format!("  {}        {}", ui::cyan("title"), config.widget.dialog_title),
        String::new(),
        ui::header("Attachments"),
        format!(
            "  {}    {}MB",
            ui::cyan("max image"),
            config.attachments.max_image_mb
        ),
    ];

    lines.join("\n")
}
