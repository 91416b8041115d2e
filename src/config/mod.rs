use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Fallbacks that only exist so `cargo run` works on a laptop. Any environment
/// other than development refuses to start with these.
const DEV_ADMIN_EMAIL: &str = "admin@example.com";
const DEV_ADMIN_PASSWORD: &str = "admin123";
const DEV_JWT_SECRET: &str = "dev-secret-change-me";

/// Token lifetime: 7 days
const DEFAULT_JWT_EXPIRY_HOURS: u64 = 24 * 7;

/// Longest token lifetime accepted from the environment: one year
const MAX_JWT_EXPIRY_HOURS: u64 = 24 * 365;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(&'static str),

    #[error("{0} is still set to the development default")]
    InsecureDefault(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub admin: AdminConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
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

/// The one identity allowed through the admin gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string. `None` selects the in-memory store.
    pub url: Option<String>,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub enable_request_logging: bool,
    pub max_request_size_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Load from the process environment. Call `dotenvy::dotenv()` first if a
    /// `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        let config = match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_overrides(&lookup)?;

        config.validate()?;
        Ok(config)
    }

    fn with_overrides<F>(mut self, lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(v) = lookup("HOST") {
            self.server.host = v;
        }
        if let Some(v) = lookup("PORT") {
            self.server.port = parse("PORT", &v)?;
        }

        // Admin identity
        if let Some(v) = lookup("ADMIN_EMAIL") {
            self.admin.email = v.trim().to_string();
        }
        if let Some(v) = lookup("ADMIN_PASSWORD") {
            self.admin.password = v;
        }

        // Database overrides
        if let Some(v) = lookup("DATABASE_URL") {
            self.database.url = Some(v).filter(|url| !url.trim().is_empty());
        }
        if let Some(v) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = parse("DATABASE_MAX_CONNECTIONS", &v)?;
        }
        if let Some(v) = lookup("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = parse("DATABASE_CONNECTION_TIMEOUT", &v)?;
        }

        // API overrides
        if let Some(v) = lookup("API_ENABLE_REQUEST_LOGGING") {
            self.api.enable_request_logging = v.parse().unwrap_or(self.api.enable_request_logging);
        }
        if let Some(v) = lookup("API_MAX_REQUEST_SIZE_BYTES") {
            self.api.max_request_size_bytes = parse("API_MAX_REQUEST_SIZE_BYTES", &v)?;
        }

        // Security overrides
        if let Some(v) = lookup("JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Some(v) = lookup("SECURITY_JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = parse("SECURITY_JWT_EXPIRY_HOURS", &v)?;
        }
        if let Some(v) = lookup("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Some(v) = lookup("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        Ok(self)
    }

    /// Outside development every secret must be supplied explicitly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let expiry = self.security.jwt_expiry_hours;
        if expiry == 0 || expiry > MAX_JWT_EXPIRY_HOURS {
            return Err(ConfigError::Invalid {
                name: "SECURITY_JWT_EXPIRY_HOURS",
                value: expiry.to_string(),
            });
        }

        if self.is_development() {
            return Ok(());
        }

        if self.admin.email.is_empty() {
            return Err(ConfigError::Missing("ADMIN_EMAIL"));
        }
        if self.admin.password.is_empty() {
            return Err(ConfigError::Missing("ADMIN_PASSWORD"));
        }
        if self.security.jwt_secret.is_empty() {
            return Err(ConfigError::Missing("JWT_SECRET"));
        }
        if self.database.url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        if self.admin.email == DEV_ADMIN_EMAIL {
            return Err(ConfigError::InsecureDefault("ADMIN_EMAIL"));
        }
        if self.admin.password == DEV_ADMIN_PASSWORD {
            return Err(ConfigError::InsecureDefault("ADMIN_PASSWORD"));
        }
        if self.security.jwt_secret == DEV_JWT_SECRET {
            return Err(ConfigError::InsecureDefault("JWT_SECRET"));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            admin: AdminConfig {
                email: DEV_ADMIN_EMAIL.to_string(),
                password: DEV_ADMIN_PASSWORD.to_string(),
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 10,
                connection_timeout: 30,
            },
            api: ApiConfig {
                enable_request_logging: true,
                max_request_size_bytes: 10 * 1024 * 1024, // 10MB
            },
            security: SecurityConfig {
                jwt_secret: DEV_JWT_SECRET.to_string(),
                jwt_expiry_hours: DEFAULT_JWT_EXPIRY_HOURS,
                enable_cors: true,
                cors_origins: vec!["*".to_string()],
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            admin: AdminConfig {
                email: String::new(),
                password: String::new(),
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 20,
                connection_timeout: 10,
            },
            api: ApiConfig {
                enable_request_logging: true,
                max_request_size_bytes: 5 * 1024 * 1024, // 5MB
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_hours: DEFAULT_JWT_EXPIRY_HOURS,
                enable_cors: true,
                cors_origins: vec!["https://staging.example.com".to_string()],
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            admin: AdminConfig {
                email: String::new(),
                password: String::new(),
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 50,
                connection_timeout: 5,
            },
            api: ApiConfig {
                enable_request_logging: false,
                max_request_size_bytes: 2 * 1024 * 1024, // 2MB
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_hours: DEFAULT_JWT_EXPIRY_HOURS,
                enable_cors: true,
                cors_origins: vec!["https://app.example.com".to_string()],
            },
        }
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.is_development());
        assert_eq!(config.admin.email, DEV_ADMIN_EMAIL);
        assert_eq!(config.security.jwt_expiry_hours, 168);
        assert!(config.database.url.is_none());
    }

    #[test]
    fn test_env_overrides_apply() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("ADMIN_EMAIL", " owner@studio.io "),
            ("SECURITY_CORS_ORIGINS", "https://a.io, https://b.io,"),
            ("DATABASE_URL", ""),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.admin.email, "owner@studio.io");
        assert_eq!(config.security.cors_origins, vec!["https://a.io", "https://b.io"]);
        assert!(config.database.url.is_none());
    }

    #[test]
    fn test_jwt_expiry_must_be_within_bounds() {
        for value in ["0", "8761", "3000000000000000"] {
            let err = AppConfig::from_lookup(lookup_from(&[("SECURITY_JWT_EXPIRY_HOURS", value)])).unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { name: "SECURITY_JWT_EXPIRY_HOURS", .. }),
                "{value} should be rejected"
            );
        }

        let config = AppConfig::from_lookup(lookup_from(&[("SECURITY_JWT_EXPIRY_HOURS", "8760")])).unwrap();
        assert_eq!(config.security.jwt_expiry_hours, 8760);
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn test_production_requires_secrets() {
        let err = AppConfig::from_lookup(lookup_from(&[("APP_ENV", "production")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("ADMIN_EMAIL")));

        let err = AppConfig::from_lookup(lookup_from(&[
            ("APP_ENV", "production"),
            ("ADMIN_EMAIL", "owner@studio.io"),
            ("ADMIN_PASSWORD", "hunter22"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn test_production_rejects_dev_defaults() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("APP_ENV", "prod"),
            ("ADMIN_EMAIL", "owner@studio.io"),
            ("ADMIN_PASSWORD", "hunter22"),
            ("JWT_SECRET", DEV_JWT_SECRET),
            ("DATABASE_URL", "postgres://localhost/showcase"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InsecureDefault("JWT_SECRET")));
    }

    #[test]
    fn test_production_config_loads_when_complete() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("APP_ENV", "production"),
            ("ADMIN_EMAIL", "owner@studio.io"),
            ("ADMIN_PASSWORD", "hunter22"),
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "postgres://localhost/showcase"),
        ]))
        .unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.database.max_connections, 50);
        assert!(!config.api.enable_request_logging);
    }
}
