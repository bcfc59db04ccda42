// validators crate

mod form;
mod routing;
mod upload;

pub use form::{validate_fields, FieldValidator, NumericPolicy};
pub use routing::{is_routing_number, RoutingMatcher};
pub use upload::{validate_upload, UploadError, ACCEPTED_EXTENSIONS, MAX_UPLOAD_BYTES};
