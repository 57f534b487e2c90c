pub mod check;
pub mod health;
pub mod stream;
pub mod ui;

pub use check::{check_body, check_query};
pub use health::health_check;
pub use stream::check_stream;
pub use ui::index;
