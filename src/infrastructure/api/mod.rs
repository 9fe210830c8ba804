pub mod http;

use std::sync::Arc;

use crate::domain::models::ServiceBox;

pub struct ServiceManager {}

impl ServiceManager {
    pub fn get() -> ServiceBox {
        return Arc::new(http::HttpService::default());
    }
}
