mod error;
mod health;
mod multipart_upload;
mod process;
mod upload;

pub use error::{ApiError, ErrorResponse, GatewayError, GatewayErrorResponse};
pub use health::health_handler;
pub use process::process_handler;
pub use upload::upload_handler;
