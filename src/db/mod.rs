mod clients;
mod error;
mod search;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::Config;

pub use clients::ClientRepository;
pub use error::RepositoryError;

/// Open the connection pool described by `config`
pub async fn connect(config: &Config) -> Result<PgPool, RepositoryError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(config.database_url())
        .await
        .map_err(RepositoryError::Connection)?;

    Ok(pool)
}

/// Connect and hand the pool to a new repository
pub async fn init(config: &Config) -> Result<ClientRepository, RepositoryError> {
    let pool = connect(config).await?;
    info!(
        max_connections = config.database_max_connections,
        "database connection established"
    );

    Ok(ClientRepository::new(pool))
}
