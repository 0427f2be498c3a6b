use std::env;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Allow cross-origin requests from any origin
    pub cors_allow_any: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match env::var("PORT") {
            Ok(p) => p
                .parse()
                .with_context(|| format!("PORT must be a port number, got {:?}", p))?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url,
            port,
            cors_allow_any: env::var("CORS_ALLOW_ANY")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        })
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
