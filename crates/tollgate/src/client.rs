// ── Tollgate facade ──
//
// Owns the current configuration binding and vends sub-clients built
// against it. Updates swap in a whole new binding; handles taken earlier
// keep the configuration they were built with.

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use secrecy::SecretString;
use tracing::debug;

use tollgate_api::models::Link;
use tollgate_api::{
    AccountApi, Configuration, DEFAULT_BASE_PATH, LinksApi, NetworksApi, TransportConfig,
};

use crate::create::{self, CreateLinkOptions};
use crate::error::Error;

// ── ClientOptions ────────────────────────────────────────────────

/// Options for constructing a [`Tollgate`] client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub api_token: SecretString,
    /// Defaults to [`DEFAULT_BASE_PATH`] when `None`.
    pub base_path: Option<String>,
    pub transport: TransportConfig,
}

impl ClientOptions {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: SecretString::from(api_token.into()),
            base_path: None,
            transport: TransportConfig::default(),
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.transport.timeout = timeout;
        self
    }
}

// ── Bindings ─────────────────────────────────────────────────────

/// One configuration and the sub-clients built against it.
struct Bindings {
    configuration: Arc<Configuration>,
    account: AccountApi,
    links: LinksApi,
    networks: NetworksApi,
}

impl Bindings {
    fn new(http: &reqwest::Client, configuration: Configuration) -> Self {
        let configuration = Arc::new(configuration);
        Self {
            account: AccountApi::new(http.clone(), Arc::clone(&configuration)),
            links: LinksApi::new(http.clone(), Arc::clone(&configuration)),
            networks: NetworksApi::new(http.clone(), Arc::clone(&configuration)),
            configuration,
        }
    }
}

// ── Tollgate ─────────────────────────────────────────────────────

/// Entry point for the Tollgate API.
///
/// Cheaply cloneable via `Arc<TollgateInner>`; clones share the same
/// binding, so an update through one clone is seen by all of them.
#[derive(Clone)]
pub struct Tollgate {
    inner: Arc<TollgateInner>,
}

struct TollgateInner {
    http: reqwest::Client,
    bindings: ArcSwap<Bindings>,
}

impl Tollgate {
    /// Build a client with its own HTTP client from `options.transport`.
    pub fn new(options: ClientOptions) -> Result<Self, Error> {
        let http = options.transport.build_client()?;
        Self::with_http_client(options, http)
    }

    /// Build a client around an existing `reqwest::Client`.
    ///
    /// `options.transport` is ignored; the caller's client decides timeouts,
    /// proxies and TLS.
    pub fn with_http_client(options: ClientOptions, http: reqwest::Client) -> Result<Self, Error> {
        let base_path = options
            .base_path
            .unwrap_or_else(|| DEFAULT_BASE_PATH.to_owned());
        let configuration = Configuration::new(base_path, options.api_token)?;
        debug!(base_path = %configuration.base_path(), "tollgate client created");

        let bindings = Bindings::new(&http, configuration);
        Ok(Self {
            inner: Arc::new(TollgateInner {
                http,
                bindings: ArcSwap::from_pointee(bindings),
            }),
        })
    }

    // ── Sub-clients ──────────────────────────────────────────────

    /// Account operations bound to the current configuration.
    pub fn account(&self) -> AccountApi {
        self.inner.bindings.load().account.clone()
    }

    /// Link operations bound to the current configuration.
    pub fn links(&self) -> LinksApi {
        self.inner.bindings.load().links.clone()
    }

    /// Network catalogue bound to the current configuration.
    pub fn networks(&self) -> NetworksApi {
        self.inner.bindings.load().networks.clone()
    }

    /// The current configuration snapshot.
    pub fn configuration(&self) -> Arc<Configuration> {
        Arc::clone(&self.inner.bindings.load().configuration)
    }

    // ── Composite operations ─────────────────────────────────────

    /// Create a link and attach its toll, resource and actions, then return
    /// the link as read back from the server.
    ///
    /// Runs against the binding current at the time of the call. A failure
    /// after the first step leaves the link (and anything attached so far)
    /// on the server; see [`Error::created_link_uuid`].
    pub async fn create_link(&self, options: CreateLinkOptions) -> Result<Link, Error> {
        let links = self.links();
        create::create_link(&links, options).await
    }

    // ── Configuration mutation ───────────────────────────────────

    /// Replace the API token for every sub-client handed out from now on.
    pub fn update_api_token(&self, api_token: impl Into<String>) -> Result<(), Error> {
        let api_token = SecretString::from(api_token.into());
        self.rebind(|current| current.with_api_token(api_token.clone()))
    }

    /// Replace the base path for every sub-client handed out from now on.
    pub fn update_base_path(&self, base_path: impl Into<String>) -> Result<(), Error> {
        let base_path = base_path.into();
        self.rebind(|current| current.with_base_path(base_path.clone()))
    }

    fn rebind<F>(&self, update: F) -> Result<(), Error>
    where
        F: Fn(&Configuration) -> Result<Configuration, tollgate_api::Error>,
    {
        let inner = &self.inner;

        // Validation only looks at the new value, so one up-front check
        // covers every retry inside `rcu`.
        update(inner.bindings.load().configuration.as_ref())?;

        inner.bindings.rcu(|current| match update(current.configuration.as_ref()) {
            Ok(next) => Arc::new(Bindings::new(&inner.http, next)),
            Err(_) => Arc::clone(current),
        });

        debug!(
            base_path = %inner.bindings.load().configuration.base_path(),
            "sub-clients rebound to new configuration"
        );
        Ok(())
    }
}

impl std::fmt::Debug for Tollgate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tollgate")
            .field("configuration", &self.configuration())
            .finish_non_exhaustive()
    }
}
