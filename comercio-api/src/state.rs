use std::sync::Arc;

use comercio_core::mailer::Mailer;
use comercio_core::repository::{CompanyRepository, ProductRepository};

#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<dyn CompanyRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub mailer: Arc<dyn Mailer>,
}
