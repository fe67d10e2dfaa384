mod attachments;
mod core;
mod logging;
mod widget;

pub use attachments::AttachmentConfig;
pub use self::core::Config;
pub use logging::LoggingConfig;
pub use widget::WidgetConfig;
