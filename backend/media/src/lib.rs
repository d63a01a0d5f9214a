//! Upload intake and local media storage for snapfind.
//!
//! Validates incoming product photos (size ceiling, image-extension
//! allow-list, sanitized filenames), persists them under collision-proof
//! storage keys with a content digest, and serves them back read-only.

pub mod mime_detect;
pub mod sanitize;
pub mod serve;
pub mod store;

pub use mime_detect::{allowed_image_mime, detect_mime_type, ALLOWED_EXTENSIONS};
pub use sanitize::sanitize_filename;
pub use serve::uploads_router;
pub use store::MediaStore;
