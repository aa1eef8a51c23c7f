// tollgate-api: Async Rust client for the Tollgate payment-gated link API.
//
// Thin, typed pass-through over the REST endpoints. Composite operations
// (creating a link together with its toll, resource and actions) live in
// the `tollgate` facade crate.

pub mod apis;
pub mod configuration;
pub mod error;
pub mod models;
pub mod transport;

pub use apis::{AccountApi, LinksApi, NetworksApi};
pub use configuration::{Configuration, DEFAULT_BASE_PATH};
pub use error::Error;
pub use transport::TransportConfig;
