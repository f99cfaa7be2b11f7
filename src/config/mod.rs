use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub uploads: UploadConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub ttl_hours: i64,
    pub secure_cookies: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Hard ceiling on an attached resume, checked before anything persists.
    pub max_resume_bytes: usize,
    pub allowed_resume_types: Vec<String>,
    /// Transport-level request body cap for the intake route; must sit above
    /// max_resume_bytes plus multipart overhead so the handler, not the
    /// server, reports oversized files.
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub demo_data: bool,
    pub admin_username: String,
    /// Empty string disables admin seeding (the server logs a warning).
    pub admin_password: String,
}

const RESUME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("HOST") {
            self.server.host = v;
        }
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        // Session overrides
        if let Ok(v) = env::var("SESSION_COOKIE_NAME") {
            self.session.cookie_name = v;
        }
        if let Ok(v) = env::var("SESSION_TTL_HOURS") {
            self.session.ttl_hours = v.parse().unwrap_or(self.session.ttl_hours);
        }
        if let Ok(v) = env::var("SESSION_SECURE_COOKIES") {
            self.session.secure_cookies = v.parse().unwrap_or(self.session.secure_cookies);
        }

        // Upload overrides
        if let Ok(v) = env::var("UPLOAD_MAX_RESUME_BYTES") {
            self.uploads.max_resume_bytes = v.parse().unwrap_or(self.uploads.max_resume_bytes);
        }
        if let Ok(v) = env::var("UPLOAD_MAX_BODY_BYTES") {
            self.uploads.max_body_bytes = v.parse().unwrap_or(self.uploads.max_body_bytes);
        }

        // Seed overrides
        if let Ok(v) = env::var("SEED_DEMO_DATA") {
            self.seed.demo_data = v.parse().unwrap_or(self.seed.demo_data);
        }
        if let Ok(v) = env::var("ADMIN_USERNAME") {
            self.seed.admin_username = v;
        }
        if let Ok(v) = env::var("ADMIN_PASSWORD") {
            self.seed.admin_password = v;
        }

        self
    }

    fn base(environment: Environment) -> Self {
        Self {
            environment,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            session: SessionConfig {
                cookie_name: "sid".to_string(),
                ttl_hours: 24,
                secure_cookies: true,
            },
            uploads: UploadConfig {
                max_resume_bytes: 5 * 1024 * 1024, // 5 MiB
                allowed_resume_types: RESUME_TYPES.iter().map(|s| s.to_string()).collect(),
                max_body_bytes: 10 * 1024 * 1024,
            },
            seed: SeedConfig {
                demo_data: false,
                admin_username: "admin@pixelperfect.com".to_string(),
                admin_password: String::new(),
            },
        }
    }

    fn development() -> Self {
        let mut config = Self::base(Environment::Development);
        config.session.secure_cookies = false;
        config.session.ttl_hours = 24 * 7; // 1 week
        config.seed.demo_data = true;
        config.seed.admin_password = "admin123".to_string();
        config
    }

    fn staging() -> Self {
        let mut config = Self::base(Environment::Staging);
        config.seed.demo_data = true;
        config
    }

    fn production() -> Self {
        Self::base(Environment::Production)
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert!(!config.session.secure_cookies);
        assert!(config.seed.demo_data);
        assert_eq!(config.uploads.max_resume_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert!(config.session.secure_cookies);
        assert!(!config.seed.demo_data);
        // No baked-in admin credential outside development
        assert!(config.seed.admin_password.is_empty());
    }
}
