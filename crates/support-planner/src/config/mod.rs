use crate::assessment::StrengthMode;
use crate::auth::UserId;
use crate::progress::StreakPolicy;
use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub storage: StorageConfig,
    pub engine: EngineConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let backend = match env::var("APP_STORAGE") {
            Ok(raw) => StorageBackend::parse(&raw)?,
            Err(_) => StorageBackend::Memory,
        };
        let data_dir = env::var("APP_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let strength_mode = match env::var("APP_STRENGTH_MODE") {
            Ok(raw) => parse_strength_mode(&raw)?,
            Err(_) => StrengthMode::default(),
        };
        let streak_policy = match env::var("APP_STREAK_POLICY") {
            Ok(raw) => parse_streak_policy(&raw)?,
            Err(_) => StreakPolicy::default(),
        };

        let sessions = match env::var("APP_SESSION_TOKENS") {
            Ok(raw) => parse_session_tokens(&raw)?,
            Err(_) => BTreeMap::new(),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            storage: StorageConfig { backend, data_dir },
            engine: EngineConfig {
                strength_mode,
                streak_policy,
            },
            auth: AuthConfig { sessions },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Which backing store holds assessments and progress entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
}

impl StorageBackend {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" | "in_memory" => Ok(Self::Memory),
            "file" | "jsonl" => Ok(Self::File),
            other => Err(ConfigError::InvalidStorage(other.to_string())),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Memory => "in-memory",
            Self::File => "file",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
}

/// Selections that change engine output; fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub strength_mode: StrengthMode,
    pub streak_policy: StreakPolicy,
}

/// Bearer session table, keyed by token.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub sessions: BTreeMap<String, UserId>,
}

fn parse_strength_mode(value: &str) -> Result<StrengthMode, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "answer_rules" | "rules" => Ok(StrengthMode::AnswerRules),
        "preferred_activity" | "interest" => Ok(StrengthMode::PreferredActivity),
        other => Err(ConfigError::InvalidStrengthMode(other.to_string())),
    }
}

fn parse_streak_policy(value: &str) -> Result<StreakPolicy, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "elapsed" | "elapsed_days" => Ok(StreakPolicy::ElapsedDays),
        "calendar" | "calendar_days" => Ok(StreakPolicy::CalendarDays),
        other => Err(ConfigError::InvalidStreakPolicy(other.to_string())),
    }
}

fn parse_session_tokens(value: &str) -> Result<BTreeMap<String, UserId>, ConfigError> {
    let mut sessions = BTreeMap::new();
    for pair in value.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
        let (token, user) = pair
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidSessionToken(pair.to_string()))?;
        let (token, user) = (token.trim(), user.trim());
        if token.is_empty() || user.is_empty() {
            return Err(ConfigError::InvalidSessionToken(pair.to_string()));
        }
        sessions.insert(token.to_string(), UserId(user.to_string()));
    }
    Ok(sessions)
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidStorage(String),
    InvalidStrengthMode(String),
    InvalidStreakPolicy(String),
    InvalidSessionToken(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidStorage(value) => {
                write!(f, "APP_STORAGE must be 'memory' or 'file', got '{value}'")
            }
            ConfigError::InvalidStrengthMode(value) => write!(
                f,
                "APP_STRENGTH_MODE must be 'answer_rules' or 'preferred_activity', got '{value}'"
            ),
            ConfigError::InvalidStreakPolicy(value) => write!(
                f,
                "APP_STREAK_POLICY must be 'elapsed' or 'calendar', got '{value}'"
            ),
            ConfigError::InvalidSessionToken(entry) => write!(
                f,
                "APP_SESSION_TOKENS entries must look like token=user, got '{entry}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
