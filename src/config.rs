use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub slow_statement_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/textile_reconcile";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
                max_connections: 20,
                acquire_timeout_secs: 10,
                slow_statement_secs: 5,
            },
            log: LogConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> config/default.toml -> APP_* 环境变量 -> SERVER_HOST/SERVER_PORT/DATABASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
            LegacyEnv::from_env(),
        )
    }

    fn build(env: Environment, legacy: LegacyEnv) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("database.url", defaults.database.url)?
            .set_default("database.max_connections", i64::from(defaults.database.max_connections))?
            .set_default("database.acquire_timeout_secs", defaults.database.acquire_timeout_secs as i64)?
            .set_default("database.slow_statement_secs", defaults.database.slow_statement_secs as i64)?
            .set_default("log.level", defaults.log.level)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(env)
            .set_override_option("server.host", legacy.server_host)?
            .set_override_option("server.port", legacy.server_port)?
            .set_override_option("database.url", legacy.database_url)?
            .build()?
            .try_deserialize()
    }
}

/// 兼容旧部署使用的环境变量
#[derive(Debug, Default)]
struct LegacyEnv {
    server_host: Option<String>,
    server_port: Option<String>,
    database_url: Option<String>,
}

impl LegacyEnv {
    fn from_env() -> Self {
        Self {
            server_host: std::env::var("SERVER_HOST").ok(),
            server_port: std::env::var("SERVER_PORT").ok(),
            database_url: std::env::var("DATABASE_URL").ok(),
        }
    }
}
