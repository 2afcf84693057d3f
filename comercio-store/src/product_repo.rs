use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use comercio_core::product::{Price, Product, ProductFields, ProductView};
use comercio_core::repository::ProductRepository;

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal structs for type-safe querying
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    characteristics: Option<String>,
    price_usd: Decimal,
    price_eur: Decimal,
    price_cop: Decimal,
    id_company: i32,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            characteristics: row.characteristics,
            price: Price {
                usd: row.price_usd,
                eur: row.price_eur,
                cop: row.price_cop,
            },
            id_company: row.id_company,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProductViewRow {
    id: i32,
    name: String,
    characteristics: Option<String>,
    price_usd: Decimal,
    price_eur: Decimal,
    price_cop: Decimal,
    company_name: Option<String>,
    id_company: i32,
}

impl From<ProductViewRow> for ProductView {
    fn from(row: ProductViewRow) -> Self {
        ProductView {
            id: row.id,
            name: row.name,
            characteristics: row.characteristics,
            price: Price {
                usd: row.price_usd,
                eur: row.price_eur,
                cop: row.price_cop,
            },
            company_name: row.company_name,
            id_company: row.id_company,
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list_products(
        &self,
    ) -> Result<Vec<ProductView>, Box<dyn std::error::Error + Send + Sync>> {
        // LEFT JOIN keeps a product visible even if its company reference
        // is somehow absent; company_name is null in that case.
        let rows: Vec<ProductViewRow> = sqlx::query_as(
            r#"
            SELECT p.id, p.name, p.characteristics,
                   p.price_usd, p.price_eur, p.price_cop,
                   c.name AS company_name, p.id_company
            FROM products p
            LEFT JOIN companies c ON c.id = p.id_company
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductView::from).collect())
    }

    async fn create_product(
        &self,
        fields: &ProductFields,
    ) -> Result<Product, Box<dyn std::error::Error + Send + Sync>> {
        // No existence check on id_company; the foreign-key constraint is
        // the only referential enforcement.
        let row: ProductRow = sqlx::query_as(
            r#"
            INSERT INTO products (name, characteristics, price_usd, price_eur, price_cop, id_company)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, characteristics, price_usd, price_eur, price_cop, id_company
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.characteristics)
        .bind(fields.price.usd)
        .bind(fields.price.eur)
        .bind(fields.price.cop)
        .bind(fields.id_company)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update_product(
        &self,
        id: i32,
        fields: &ProductFields,
    ) -> Result<Option<Product>, Box<dyn std::error::Error + Send + Sync>> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            UPDATE products
            SET name = $1, characteristics = $2,
                price_usd = $3, price_eur = $4, price_cop = $5,
                id_company = $6
            WHERE id = $7
            RETURNING id, name, characteristics, price_usd, price_eur, price_cop, id_company
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.characteristics)
        .bind(fields.price.usd)
        .bind(fields.price.eur)
        .bind(fields.price.cop)
        .bind(fields.id_company)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn delete_product(
        &self,
        id: i32,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
