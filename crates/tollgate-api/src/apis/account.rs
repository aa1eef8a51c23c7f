use std::sync::Arc;

use crate::configuration::Configuration;
use crate::error::Error;
use crate::models::{Account, UpdateAccountRequest};
use crate::transport::Executor;

/// Operations on the account that owns the API token.
#[derive(Debug, Clone)]
pub struct AccountApi {
    exec: Executor,
}

impl AccountApi {
    pub fn new(http: reqwest::Client, configuration: Arc<Configuration>) -> Self {
        Self {
            exec: Executor::new(http, configuration),
        }
    }

    /// The configuration this handle was built with.
    pub fn configuration(&self) -> &Arc<Configuration> {
        self.exec.configuration()
    }

    pub async fn get_account(&self) -> Result<Account, Error> {
        self.exec.get(&["account"]).await
    }

    pub async fn update_account(&self, body: &UpdateAccountRequest) -> Result<Account, Error> {
        self.exec.patch(&["account"], body).await
    }
}
