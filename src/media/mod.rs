pub mod attachment;
pub mod detection;
pub mod types;

pub use attachment::{ImageAttachment, MAX_IMAGE_BYTES, encode_data_url};
pub use types::MediaType;
