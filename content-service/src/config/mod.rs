use service_core::config::{self as core_config, non_empty_env};
use service_core::error::AppError;

#[derive(Debug, Clone)]
pub struct ContentConfig {
    pub common: core_config::Config,
    pub database: DatabaseConfig,
}

/// Connection settings for the document store. Both values are optional:
/// a missing connection string leaves the store disabled rather than
/// failing startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl DatabaseConfig {
    pub const URL_VAR: &'static str = "DATABASE_URL";
    pub const NAME_VAR: &'static str = "DATABASE_NAME";

    pub fn from_env() -> Self {
        Self {
            url: non_empty_env(Self::URL_VAR),
            name: non_empty_env(Self::NAME_VAR),
        }
    }

    pub fn url_is_set(&self) -> bool {
        self.url.as_deref().is_some_and(|v| !v.is_empty())
    }

    pub fn name_is_set(&self) -> bool {
        self.name.as_deref().is_some_and(|v| !v.is_empty())
    }
}

impl ContentConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env, configuration.* and the APP__ prefix
        let common = core_config::Config::load()?;

        Ok(ContentConfig {
            common,
            database: DatabaseConfig::from_env(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_do_not_count_as_set() {
        let config = DatabaseConfig {
            url: Some(String::new()),
            name: None,
        };
        assert!(!config.url_is_set());
        assert!(!config.name_is_set());
    }

    #[test]
    fn whitespace_values_count_as_set() {
        let config = DatabaseConfig {
            url: Some("  ".to_string()),
            name: Some(" ".to_string()),
        };
        assert!(config.url_is_set());
        assert!(config.name_is_set());
    }

    #[test]
    fn configured_values_count_as_set() {
        let config = DatabaseConfig {
            url: Some("mongodb://localhost:27017".to_string()),
            name: Some("site".to_string()),
        };
        assert!(config.url_is_set());
        assert!(config.name_is_set());
    }
}
