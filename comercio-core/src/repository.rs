use async_trait::async_trait;

use crate::company::{Company, CompanyFields};
use crate::product::{Product, ProductFields, ProductView};

/// Repository trait for company data access.
///
/// A missing entity is a sentinel (`None`/`false`), never an error; the
/// error channel is reserved for genuine storage failures.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// All companies, in storage order.
    async fn list_companies(
        &self,
    ) -> Result<Vec<Company>, Box<dyn std::error::Error + Send + Sync>>;

    /// Inserts a new company and returns it with the generated id.
    /// `nit` uniqueness is left to the storage constraint.
    async fn create_company(
        &self,
        fields: &CompanyFields,
    ) -> Result<Company, Box<dyn std::error::Error + Send + Sync>>;

    /// Full-field replacement. `None` when no company has this id, in
    /// which case nothing is mutated.
    async fn update_company(
        &self,
        id: i32,
        fields: &CompanyFields,
    ) -> Result<Option<Company>, Box<dyn std::error::Error + Send + Sync>>;

    /// Deletes the company and all of its products in one atomic unit,
    /// products first. `false` when no company has this id.
    async fn delete_company(
        &self,
        id: i32,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for product data access.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, denormalized with their owning company's name.
    async fn list_products(
        &self,
    ) -> Result<Vec<ProductView>, Box<dyn std::error::Error + Send + Sync>>;

    /// Inserts a new product and returns it with the generated id. Price
    /// components are stored exactly as given. `id_company` is not
    /// checked against the companies table here; the storage foreign-key
    /// constraint is the only referential enforcement.
    async fn create_product(
        &self,
        fields: &ProductFields,
    ) -> Result<Product, Box<dyn std::error::Error + Send + Sync>>;

    /// Full-field replacement, including the price triple. `None` when
    /// no product has this id.
    async fn update_product(
        &self,
        id: i32,
        fields: &ProductFields,
    ) -> Result<Option<Product>, Box<dyn std::error::Error + Send + Sync>>;

    /// Single-row delete, no cascade. `false` when no product has this id.
    async fn delete_product(
        &self,
        id: i32,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}
