pub mod format;
pub mod validate;

pub use format::{format_number, format_price};
pub use validate::{redact_uri_password, validate_mongodb_uri};
