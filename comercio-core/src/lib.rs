pub mod company;
pub mod mailer;
pub mod product;
pub mod repository;

pub use company::{Company, CompanyFields};
pub use mailer::{MailError, Mailer};
pub use product::{Price, Product, ProductFields, ProductView};
