//! Request and response types for the Tollgate API.
//!
//! Field names use camelCase on the wire. Response fields the server may
//! omit are `Option` or defaulted so older and newer servers both decode.

mod account;
mod action;
mod link;
mod network;
mod resource;
mod toll;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

pub use account::{Account, UpdateAccountRequest};
pub use action::{Action, ActionRequest, ActionTrigger, CallbackData, CallbackMethod};
pub use link::{CreateLinkRequest, Link, LinkStatus, LinkType, ListLinksParams, UpdateLinkRequest};
pub use network::{Network, NetworkAsset};
pub use resource::{HtmlData, Resource, ResourceContent, ResourceType, UrlData};
pub use toll::{Toll, TollRequest, TollRequirement};

// ── Pagination ───────────────────────────────────────────────────────

/// Pagination wrapper returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
}

// ── Serde helpers ────────────────────────────────────────────────────

/// Decode an optional uuid, treating `""` the same as a missing field.
///
/// Identifiers must be RFC 4122 formatted; opaque ids such as `lnk_9f2a`
/// are rejected rather than silently dropped.
pub(crate) fn non_empty_uuid<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Uuid::parse_str(s)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
