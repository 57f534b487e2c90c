pub mod check;
pub mod stream;

pub use check::{ErrorResponse, HealthResponse};
pub use stream::StreamEvent;
