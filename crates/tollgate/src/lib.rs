//! Client facade for the Tollgate payment-gated link API.
//!
//! - **[`Tollgate`]**: owns the current [`Configuration`] and hands out the
//!   resource sub-clients ([`AccountApi`], [`LinksApi`], [`NetworksApi`])
//!   built against it. [`update_api_token`](Tollgate::update_api_token) and
//!   [`update_base_path`](Tollgate::update_base_path) swap in a fresh
//!   configuration; handles obtained before the swap keep the old one.
//!
//! - **[`Tollgate::create_link`]**: composite creation: the link, then its
//!   toll, resource and actions in order, then a read-back of the finished
//!   link. Fail-fast and not transactional: a failed step leaves everything
//!   created before it on the server.
//!
//! ```no_run
//! use tollgate::{ClientOptions, CreateLinkOptions, Tollgate};
//! use tollgate::models::{ActionRequest, ActionTrigger, ResourceContent, TollRequest, TollRequirement};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Tollgate::new(ClientOptions::new("tg_live_xxx"))?;
//!
//! let link = client
//!     .create_link(
//!         CreateLinkOptions::new("Premium guide")
//!             .alias("guide")
//!             .toll(TollRequest::single(TollRequirement {
//!                 asset_network: "base".into(),
//!                 asset_address: "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913".into(),
//!                 amount: "1000000".into(),
//!                 destination_address: "0xYourWallet".into(),
//!             }))
//!             .resource(ResourceContent::redirect("https://example.com/guide".parse()?))
//!             .action(ActionRequest::callback(
//!                 ActionTrigger::PaymentSuccess,
//!                 "https://example.com/hooks/paid".parse()?,
//!             )),
//!     )
//!     .await?;
//!
//! println!("{:?}", link.url);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod create;
pub mod error;

pub use client::{ClientOptions, Tollgate};
pub use create::CreateLinkOptions;
pub use error::{CreateLinkStep, Error};

// Re-export the API crate surface so most callers need one dependency.
pub use tollgate_api::Error as ApiError;
pub use tollgate_api::{
    AccountApi, Configuration, DEFAULT_BASE_PATH, LinksApi, NetworksApi, TransportConfig, models,
};
