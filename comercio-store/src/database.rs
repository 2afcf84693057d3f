use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct DbClient {
    pub pool: Pool<Postgres>,
}

impl DbClient {
    pub async fn new(connection_string: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(connection_string)
            .await?;

        Ok(Self { pool })
    }

    /// Creates the two tables if they do not exist yet. The service has
    /// no migration history; the schema is fixed.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        info!("Ensuring database schema...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS companies (
                id SERIAL PRIMARY KEY,
                nit TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                address TEXT,
                phone TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                characteristics TEXT,
                price_usd NUMERIC(10, 2) NOT NULL,
                price_eur NUMERIC(10, 2) NOT NULL,
                price_cop NUMERIC(10, 2) NOT NULL,
                id_company INTEGER NOT NULL REFERENCES companies (id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Schema ready.");
        Ok(())
    }
}
