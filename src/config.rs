use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Runtime configuration for the records system.
///
/// Everything has a desktop-appropriate default so the portable binary runs
/// without any environment setup; env vars override individual values.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    /// Shared secret mixed into the certificate control code. Embedded
    /// default, overridable via env. Low-assurance tamper hint only, not a
    /// security-grade signing key.
    pub secret_key: String,
    /// Issuing organization printed on certificates and inside the QR payload.
    pub org_name: String,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let base_dir = base_dir();

        Ok(Self {
            host: get_env_or("HOST", "127.0.0.1"),
            port: get_env_parse_or("PORT", 5000)?,
            database_path: env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| base_dir.join("hygiene.db")),
            log_dir: env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| base_dir.join("logs")),
            secret_key: get_env_or("SECRET_KEY", "POL2KST-SECRET-2025"),
            org_name: get_env_or("ORG_NAME", "КГП \"Поликлиника № 2 города Костанай\""),
        })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Directory next to the executable, for the portable layout where the
/// database and logs travel with the binary.
fn base_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
