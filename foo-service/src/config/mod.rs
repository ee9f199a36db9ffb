use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const SERVICE_NAME: &str = "foo-service";
const DEFAULT_DATABASE: &str = "foo_db";

#[derive(Debug, Clone, Deserialize)]
pub struct FooConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    /// `None` selects the in-memory store (never allowed in prod).
    pub mongodb: Option<MongoConfig>,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl FooConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = common_config.is_production()
            || env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let mongodb = mongo_config(
            env::var("MONGODB_URI").ok(),
            env::var("MONGODB_DATABASE").ok(),
            is_prod,
        )?;

        Ok(FooConfig {
            common: common_config,
            mongodb,
            observability: ObservabilityConfig {
                log_level: get_env("LOG_LEVEL", Some("info"), false)?,
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            },
        })
    }
}

/// The URI is mandatory in prod; the database name always has a default.
fn mongo_config(
    uri: Option<String>,
    database: Option<String>,
    is_prod: bool,
) -> Result<Option<MongoConfig>, AppError> {
    match uri {
        Some(uri) => Ok(Some(MongoConfig {
            uri,
            database: database.unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
        })),
        None if is_prod => Err(AppError::ConfigError(anyhow::anyhow!(
            "MONGODB_URI is required in production but not set"
        ))),
        None => Ok(None),
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
