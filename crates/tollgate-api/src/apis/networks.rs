use std::sync::Arc;

use crate::configuration::Configuration;
use crate::error::Error;
use crate::models::{Network, NetworkAsset};
use crate::transport::Executor;

/// Read-only catalogue of payment networks and their assets.
#[derive(Debug, Clone)]
pub struct NetworksApi {
    exec: Executor,
}

impl NetworksApi {
    pub fn new(http: reqwest::Client, configuration: Arc<Configuration>) -> Self {
        Self {
            exec: Executor::new(http, configuration),
        }
    }

    /// The configuration this handle was built with.
    pub fn configuration(&self) -> &Arc<Configuration> {
        self.exec.configuration()
    }

    pub async fn list_networks(&self) -> Result<Vec<Network>, Error> {
        self.exec.get(&["networks"]).await
    }

    pub async fn get_network(&self, network_id: &str) -> Result<Network, Error> {
        self.exec.get(&["networks", network_id]).await
    }

    pub async fn list_network_assets(&self, network_id: &str) -> Result<Vec<NetworkAsset>, Error> {
        self.exec.get(&["networks", network_id, "assets"]).await
    }
}
