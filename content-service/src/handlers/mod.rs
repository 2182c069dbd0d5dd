pub mod content;
pub mod diagnostics;
pub mod greeting;
pub mod health;

pub use content::{list_books, list_lore, list_posts};
pub use diagnostics::{diagnostics, probe};
pub use greeting::{hello, root};
pub use health::{health_check, metrics_endpoint, readiness_check};
