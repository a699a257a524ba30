use std::collections::{HashMap, HashSet};

use sqlx::PgPool;
use tracing::{debug, info};

use super::RepositoryError;
use super::search::{criteria_of, intersect_all};
use crate::models::{Client, ClientRecord, ClientUpdate, Phone, SearchCriteria};

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Persistence operations for clients and their phone numbers
///
/// The repository does not own the connection lifecycle; the pool is handed
/// in by the caller. Every writing method commits at most once, at its end.
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `clients` and `phones` tables if they do not exist yet
    pub async fn initialize_schema(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS clients (
                client_id SERIAL PRIMARY KEY,
                name VARCHAR(40) NOT NULL,
                surname VARCHAR(40) NOT NULL,
                email VARCHAR(80)
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS phones (
                client_id INTEGER NOT NULL REFERENCES clients(client_id),
                phone VARCHAR(15) NOT NULL UNIQUE
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("client schema ready");
        Ok(())
    }

    /// Insert a client with its phones and return the generated id
    pub async fn add_client(
        &self,
        name: &str,
        surname: &str,
        email: Option<&str>,
        phones: &[&str],
    ) -> Result<i32> {
        let mut tx = self.pool.begin().await?;

        let client_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO clients (name, surname, email)
            VALUES ($1, $2, $3)
            RETURNING client_id
            "#,
        )
        .bind(name)
        .bind(surname)
        .bind(email)
        .fetch_one(&mut *tx)
        .await?;

        for phone in phones {
            sqlx::query("INSERT INTO phones (phone, client_id) VALUES ($1, $2)")
                .bind(*phone)
                .bind(client_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        debug!(client_id, phones = phones.len(), "client added");
        Ok(client_id)
    }

    /// Attach one more phone number to an existing client
    pub async fn add_phone(&self, client_id: i32, phone: &str) -> Result<()> {
        sqlx::query("INSERT INTO phones (phone, client_id) VALUES ($1, $2)")
            .bind(phone)
            .bind(client_id)
            .execute(&self.pool)
            .await?;

        debug!(client_id, phone, "phone added");
        Ok(())
    }

    /// Apply the fields present in `update`; absent fields are left untouched
    pub async fn update_client(&self, client_id: i32, update: &ClientUpdate) -> Result<()> {
        if update.is_empty() {
            debug!(client_id, "empty update, nothing to do");
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;

        if let Some(name) = &update.name {
            sqlx::query("UPDATE clients SET name = $1 WHERE client_id = $2")
                .bind(name)
                .bind(client_id)
                .execute(&mut *tx)
                .await?;
        }

        if let Some(surname) = &update.surname {
            sqlx::query("UPDATE clients SET surname = $1 WHERE client_id = $2")
                .bind(surname)
                .bind(client_id)
                .execute(&mut *tx)
                .await?;
        }

        if let Some(email) = &update.email {
            sqlx::query("UPDATE clients SET email = $1 WHERE client_id = $2")
                .bind(email.as_deref())
                .bind(client_id)
                .execute(&mut *tx)
                .await?;
        }

        // Only the named phone changes, never every phone of the client
        if let Some(change) = &update.phone {
            sqlx::query("UPDATE phones SET phone = $1 WHERE client_id = $2 AND phone = $3")
                .bind(&change.new)
                .bind(client_id)
                .bind(&change.old)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        debug!(client_id, "client updated");
        Ok(())
    }

    /// Remove one phone of a client. Returns whether a row was deleted.
    pub async fn delete_phone(&self, client_id: i32, phone: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM phones WHERE client_id = $1 AND phone = $2")
            .bind(client_id)
            .bind(phone)
            .execute(&self.pool)
            .await?;

        debug!(client_id, phone, removed = result.rows_affected(), "phone delete");
        Ok(result.rows_affected() > 0)
    }

    /// Remove a client and all of its phones. Returns whether the client existed.
    pub async fn delete_client(&self, client_id: i32) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        // Phones first, the foreign key has no cascade
        let phones = sqlx::query("DELETE FROM phones WHERE client_id = $1")
            .bind(client_id)
            .execute(&mut *tx)
            .await?;

        let clients = sqlx::query("DELETE FROM clients WHERE client_id = $1")
            .bind(client_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(
            client_id,
            phones = phones.rows_affected(),
            existed = clients.rows_affected() > 0,
            "client deleted"
        );
        Ok(clients.rows_affected() > 0)
    }

    /// Find the clients matching every given criterion.
    ///
    /// Each criterion yields a set of client ids, and the result is their
    /// intersection. With no criteria at all every client is returned.
    /// Records come back ordered by `client_id`.
    pub async fn find_clients(&self, criteria: &SearchCriteria) -> Result<Vec<ClientRecord>> {
        let mut matches = Vec::new();
        for criterion in criteria_of(criteria) {
            let ids: HashSet<i32> = sqlx::query_scalar::<_, i32>(criterion.query())
                .bind(criterion.value())
                .fetch_all(&self.pool)
                .await?
                .into_iter()
                .collect();

            debug!(?criterion, matched = ids.len(), "criterion evaluated");
            matches.push(ids);
        }

        let ids: Vec<i32> = match intersect_all(matches) {
            Some(ids) => ids.into_iter().collect(),
            None => {
                sqlx::query_scalar::<_, i32>("SELECT client_id FROM clients")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        self.hydrate(&ids).await
    }

    /// Fetch a single client with its phones
    pub async fn get_client(&self, client_id: i32) -> Result<Option<ClientRecord>> {
        let mut records = self.hydrate(&[client_id]).await?;
        Ok(records.pop())
    }

    async fn hydrate(&self, ids: &[i32]) -> Result<Vec<ClientRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let clients = sqlx::query_as::<_, Client>(
            r#"
            SELECT client_id, name, surname, email
            FROM clients
            WHERE client_id = ANY($1)
            ORDER BY client_id ASC
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        let phones = sqlx::query_as::<_, Phone>(
            r#"
            SELECT client_id, phone
            FROM phones
            WHERE client_id = ANY($1)
            ORDER BY phone ASC
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        let mut phones_by_client: HashMap<i32, Vec<String>> = HashMap::new();
        for phone in phones {
            phones_by_client
                .entry(phone.client_id)
                .or_default()
                .push(phone.phone);
        }

        let records = clients
            .into_iter()
            .map(|client| {
                let phones = phones_by_client
                    .remove(&client.client_id)
                    .unwrap_or_default();
                ClientRecord::new(client, phones)
            })
            .collect();

        Ok(records)
    }
}
