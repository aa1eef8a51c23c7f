// Resource-scoped sub-clients.
//
// Each sub-client is bound to the configuration it was built with for its
// whole life. Callers that need fresh credentials get a new handle from the
// facade rather than mutating an existing one.

mod account;
mod links;
mod networks;

pub use account::AccountApi;
pub use links::LinksApi;
pub use networks::NetworksApi;
