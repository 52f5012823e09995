use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shared moderator secret, compared verbatim against `Bearer <secret>`.
    pub secret_key: String,
    /// Path of the persisted approved-word list, relative to the working directory.
    pub words_file: String,
    pub port: u16,
    /// Single origin allowed by the CORS layer.
    pub cors_origin: String,
    /// When true, the approve path lowercases its input before the duplicate
    /// check. Off by default: submission lowercases but approval historically
    /// does not, so case-variant duplicates can enter the approved list.
    pub normalize_approvals: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret_key: "default-secret-key".to_string(),
            words_file: "approvedWords.json".to_string(),
            port: 4200,
            cors_origin: "https://sozdle.3epge.com".to_string(),
            normalize_approvals: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("SECRET_KEY") {
            self.secret_key = v;
        }
        if let Ok(v) = env::var("WORDS_FILE") {
            self.words_file = v;
        }
        if let Ok(v) = env::var("PORT") {
            self.port = v.parse().unwrap_or(self.port);
        }
        if let Ok(v) = env::var("CORS_ORIGIN") {
            self.cors_origin = v;
        }
        if let Ok(v) = env::var("NORMALIZE_APPROVALS") {
            self.normalize_approvals = v.parse().unwrap_or(self.normalize_approvals);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.secret_key, "default-secret-key");
        assert_eq!(config.words_file, "approvedWords.json");
        assert_eq!(config.port, 4200);
        assert!(!config.normalize_approvals);
    }
}
