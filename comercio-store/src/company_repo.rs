use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use comercio_core::company::{Company, CompanyFields};
use comercio_core::repository::CompanyRepository;

pub struct PgCompanyRepository {
    pool: PgPool,
}

impl PgCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct CompanyRow {
    id: i32,
    nit: String,
    name: String,
    address: Option<String>,
    phone: Option<String>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            nit: row.nit,
            name: row.name,
            address: row.address,
            phone: row.phone,
        }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn list_companies(
        &self,
    ) -> Result<Vec<Company>, Box<dyn std::error::Error + Send + Sync>> {
        let rows: Vec<CompanyRow> =
            sqlx::query_as("SELECT id, nit, name, address, phone FROM companies")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn create_company(
        &self,
        fields: &CompanyFields,
    ) -> Result<Company, Box<dyn std::error::Error + Send + Sync>> {
        // A duplicate nit trips the unique constraint and propagates as a
        // storage error.
        let row: CompanyRow = sqlx::query_as(
            r#"
            INSERT INTO companies (nit, name, address, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nit, name, address, phone
            "#,
        )
        .bind(&fields.nit)
        .bind(&fields.name)
        .bind(&fields.address)
        .bind(&fields.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update_company(
        &self,
        id: i32,
        fields: &CompanyFields,
    ) -> Result<Option<Company>, Box<dyn std::error::Error + Send + Sync>> {
        let row: Option<CompanyRow> = sqlx::query_as(
            r#"
            UPDATE companies
            SET nit = $1, name = $2, address = $3, phone = $4
            WHERE id = $5
            RETURNING id, nit, name, address, phone
            "#,
        )
        .bind(&fields.nit)
        .bind(&fields.name)
        .bind(&fields.address)
        .bind(&fields.phone)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Company::from))
    }

    async fn delete_company(
        &self,
        id: i32,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        // Products go first, inside the same transaction, so a company is
        // never gone while rows still reference it.
        let mut tx = self.pool.begin().await?;

        let products = sqlx::query("DELETE FROM products WHERE id_company = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let company = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(
            id,
            products = products.rows_affected(),
            "Cascade delete committed"
        );

        Ok(company.rows_affected() > 0)
    }
}
