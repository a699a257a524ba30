use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration for the client registry
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Database connection URL
    pub database_url: String,
    /// Upper bound on pooled connections
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Variables from a `.env` file are loaded first if the file exists,
    /// then the process environment is deserialized into `Config`.
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::from_env::<Config>()
            .context("failed to read configuration from the environment (is DATABASE_URL set?)")?;

        Ok(config)
    }

    /// Get a direct reference to the database URL
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Deserialize a set of variables into `Config`, letting `database_url`
/// stand in for `DATABASE_URL` when given
fn from_vars<I>(vars: I, database_url: Option<String>) -> Result<Config>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut vars: Vec<(String, String)> = vars.into_iter().collect();
    if let Some(url) = database_url {
        vars.retain(|(key, _)| key != "DATABASE_URL");
        vars.push(("DATABASE_URL".to_string(), url));
    }

    let config = envy::from_iter::<_, Config>(vars)
        .context("failed to read configuration (is DATABASE_URL set?)")?;

    Ok(config)
}

/// Initialize environment variables and load configuration
pub fn init(database_url: Option<String>) -> Result<Config> {
    if database_url.is_none() {
        return Config::load();
    }

    dotenv().ok();
    from_vars(std::env::vars(), database_url)
}
