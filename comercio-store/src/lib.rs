pub mod app_config;
pub mod company_repo;
pub mod database;
pub mod mailer;
pub mod product_repo;

pub use company_repo::PgCompanyRepository;
pub use database::DbClient;
pub use mailer::SmtpMailer;
pub use product_repo::PgProductRepository;
