pub mod schema;

pub use schema::{AttachmentConfig, Config, LoggingConfig, WidgetConfig};
