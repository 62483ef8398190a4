use serde::{Deserialize, Serialize};

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://learning_games.db?mode=rwc";
pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistenceConfig {
    pub database_url: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl PersistenceConfig {
    /// Reads `DATABASE_URL`, falling back to a local sqlite file
    pub fn from_env() -> Self {
        Self::from_url(std::env::var(DATABASE_URL_VAR).ok())
    }

    pub fn from_url(url: Option<String>) -> Self {
        match url {
            Some(url) if !url.trim().is_empty() => Self {
                database_url: url.trim().to_string(),
            },
            _ => Self::default(),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            database_url: MEMORY_DATABASE_URL.to_string(),
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_blank_url_uses_default() {
        assert_eq!(PersistenceConfig::from_url(None), PersistenceConfig::default());
        assert_eq!(
            PersistenceConfig::from_url(Some("   ".to_string())).database_url,
            DEFAULT_DATABASE_URL
        );
    }

    #[test]
    fn test_explicit_url_is_trimmed() {
        let config = PersistenceConfig::from_url(Some(" sqlite://kids.db ".to_string()));
        assert_eq!(config.database_url, "sqlite://kids.db");
        assert!(!config.is_in_memory());
        assert!(PersistenceConfig::in_memory().is_in_memory());
    }
}
