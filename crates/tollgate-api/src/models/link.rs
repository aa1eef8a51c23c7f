use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};
use url::Url;
use uuid::Uuid;

use super::{Action, Resource, Toll, non_empty_uuid};

/// Lifecycle state of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LinkStatus {
    Active,
    Inactive,
    Draft,
    Archived,
}

/// Billing model of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LinkType {
    Payment,
    Subscription,
    Donation,
}

/// A payment-gated link -- from `GET /links/{uuidOrAlias}` and `POST /links`.
///
/// `uuid` and `url` are assigned by the server. The nested toll, resource
/// and actions are only present on reads that include them.
///
/// `status` and `type` are kept as the server sent them; use
/// [`Link::parsed_status`] / [`Link::parsed_type`] for the known values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// RFC 4122 identifier. An empty string decodes as `None`; any other
    /// non-uuid value is a decode error.
    #[serde(
        default,
        deserialize_with = "non_empty_uuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// e.g. `active`, `draft`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub link_type: Option<String>,
    #[serde(default)]
    pub url: Option<Url>,
    #[serde(default)]
    pub toll: Option<Toll>,
    #[serde(default)]
    pub resource: Option<Resource>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Catch-all for additional fields not modeled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Link {
    /// `status` as a [`LinkStatus`], or `None` if absent or not a known value.
    pub fn parsed_status(&self) -> Option<LinkStatus> {
        self.status.as_deref()?.parse().ok()
    }

    /// `type` as a [`LinkType`], or `None` if absent or not a known value.
    pub fn parsed_type(&self) -> Option<LinkType> {
        self.link_type.as_deref()?.parse().ok()
    }
}

/// Body for `POST /links`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LinkStatus>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<LinkType>,
}

impl CreateLinkRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            description: None,
            status: None,
            link_type: None,
        }
    }
}

/// Body for `PATCH /links/{uuid}`. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LinkStatus>,
}

/// Query parameters for `GET /links`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListLinksParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LinkStatus>,
}
