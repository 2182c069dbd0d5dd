use serde::{Deserialize, Serialize};

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DATABASE_NOT_AVAILABLE: &str = "❌ Not Available";
pub const DATABASE_MODULE_MISSING: &str = "❌ Database module not found (run enable-database first)";
pub const DATABASE_UNINITIALIZED: &str = "⚠️  Available but not initialized";
pub const DATABASE_WORKING: &str = "✅ Connected & Working";
pub const CONNECTED: &str = "Connected";
pub const NOT_CONNECTED: &str = "Not Connected";
pub const ENV_SET: &str = "✅ Set";
pub const ENV_NOT_SET: &str = "❌ Not Set";

/// Error text is cut to this many characters before it is reported.
pub const ERROR_PREVIEW_CHARS: usize = 50;
/// At most this many collection names are listed.
pub const MAX_LISTED_COLLECTIONS: usize = 10;

/// Body of `GET /test`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for DiagnosticsReport {
    fn default() -> Self {
        Self {
            backend: BACKEND_RUNNING.to_string(),
            database: DATABASE_NOT_AVAILABLE.to_string(),
            database_url: ENV_NOT_SET.to_string(),
            database_name: ENV_NOT_SET.to_string(),
            connection_status: NOT_CONNECTED.to_string(),
            collections: Vec::new(),
        }
    }
}

impl DiagnosticsReport {
    pub fn connected_with_error(message: &str) -> String {
        format!("⚠️  Connected but Error: {}", preview(message))
    }

    pub fn failed(message: &str) -> String {
        format!("❌ Error: {}", preview(message))
    }

    pub fn env_indicator(is_set: bool) -> String {
        let indicator = if is_set { ENV_SET } else { ENV_NOT_SET };
        indicator.to_string()
    }
}

fn preview(message: &str) -> String {
    message.chars().take(ERROR_PREVIEW_CHARS).collect()
}
