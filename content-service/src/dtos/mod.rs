pub mod content;
pub mod diagnostics;
pub mod params;

pub use content::{BookResponse, LoreResponse, MessageResponse, PostResponse};
pub use diagnostics::DiagnosticsReport;
pub use params::{BookListParams, LoreListParams, PostListParams};
