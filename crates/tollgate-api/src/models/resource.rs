use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum::{Display, EnumString};
use url::Url;
use uuid::Uuid;

use super::non_empty_uuid;

/// Payload for the url-based resource types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlData {
    pub url: Url,
}

/// Payload for inline HTML resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlData {
    pub content: String,
}

/// What a payer receives once the toll is satisfied.
///
/// Encoded as `{"type": "...", "data": {...}}`; the tag selects the shape
/// of `data`. Also the body for `POST /links/{linkUuid}/resources`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ResourceContent {
    /// HTTP redirect to `url`.
    Redirect(UrlData),
    /// Inline HTML page.
    Html(HtmlData),
    /// File download served from `url`.
    File(UrlData),
    /// Plain link revealed to the payer.
    Link(UrlData),
    /// Reverse-proxied upstream.
    Proxy(UrlData),
    /// Tunnelled upstream.
    Tunnel(UrlData),
}

/// Tag of a [`ResourceContent`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ResourceType {
    Redirect,
    Html,
    File,
    Link,
    Proxy,
    Tunnel,
}

impl ResourceContent {
    pub fn redirect(url: Url) -> Self {
        Self::Redirect(UrlData { url })
    }

    pub fn html(content: impl Into<String>) -> Self {
        Self::Html(HtmlData {
            content: content.into(),
        })
    }

    pub fn file(url: Url) -> Self {
        Self::File(UrlData { url })
    }

    pub fn link(url: Url) -> Self {
        Self::Link(UrlData { url })
    }

    pub fn proxy(url: Url) -> Self {
        Self::Proxy(UrlData { url })
    }

    pub fn tunnel(url: Url) -> Self {
        Self::Tunnel(UrlData { url })
    }

    pub fn resource_type(&self) -> ResourceType {
        match self {
            Self::Redirect(_) => ResourceType::Redirect,
            Self::Html(_) => ResourceType::Html,
            Self::File(_) => ResourceType::File,
            Self::Link(_) => ResourceType::Link,
            Self::Proxy(_) => ResourceType::Proxy,
            Self::Tunnel(_) => ResourceType::Tunnel,
        }
    }

    /// Target URL, for every type except `html`.
    pub fn url(&self) -> Option<&Url> {
        match self {
            Self::Redirect(d) | Self::File(d) | Self::Link(d) | Self::Proxy(d) | Self::Tunnel(d) => {
                Some(&d.url)
            }
            Self::Html(_) => None,
        }
    }
}

/// A resource attached to a link.
///
/// `type` and `data` are kept raw so an acknowledgement without them, or a
/// resource type this client does not know, still decodes. Use
/// [`Resource::content`] for the typed view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(
        default,
        deserialize_with = "non_empty_uuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub uuid: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_uuid: Option<Uuid>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource {
    /// Typed content, or `None` if `type`/`data` are missing or not a
    /// shape this client knows.
    pub fn content(&self) -> Option<ResourceContent> {
        let resource_type = self.resource_type.as_deref()?;
        let data = self.data.as_ref()?;
        serde_json::from_value(json!({ "type": resource_type, "data": data })).ok()
    }
}
