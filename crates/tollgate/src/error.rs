// ── Facade error types ──
//
// Direct sub-client failures pass through as `Api`. Failures inside
// `create_link` are wrapped with the step that failed; the original
// `tollgate_api::Error` stays reachable via `source()`.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Step of the composite link creation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateLinkStep {
    /// Creating the link itself.
    Link,
    /// Attaching the toll.
    Toll,
    /// Attaching the resource.
    Resource,
    /// Attaching the action at `index` in the requested list.
    Action { index: usize },
    /// Reading the finished link back.
    Fetch,
}

impl fmt::Display for CreateLinkStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link => f.write_str("link"),
            Self::Toll => f.write_str("toll"),
            Self::Resource => f.write_str("resource"),
            Self::Action { index } => write!(f, "action #{index}"),
            Self::Fetch => f.write_str("fetch"),
        }
    }
}

/// Unified error type for the facade.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration or sub-client call failed outside `create_link`.
    #[error(transparent)]
    Api(#[from] tollgate_api::Error),

    /// Link creation reported success but returned no uuid. Nothing after
    /// the first call was attempted.
    #[error("Link creation incomplete: the server did not return a link uuid")]
    CreationIncomplete,

    /// A step of `create_link` failed. Steps completed before it are not
    /// undone; `link_uuid` names the link left on the server, if any.
    #[error("Failed to create link: {step} step failed: {source}")]
    CreateLink {
        step: CreateLinkStep,
        link_uuid: Option<Uuid>,
        #[source]
        source: tollgate_api::Error,
    },
}

impl Error {
    /// The underlying API error, whether wrapped or not.
    pub fn api_error(&self) -> Option<&tollgate_api::Error> {
        match self {
            Self::Api(e) | Self::CreateLink { source: e, .. } => Some(e),
            Self::CreationIncomplete => None,
        }
    }

    /// Which `create_link` step failed, if this came from `create_link`.
    pub fn step(&self) -> Option<CreateLinkStep> {
        match self {
            Self::CreateLink { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// Uuid of a link that was created before a later step failed.
    pub fn created_link_uuid(&self) -> Option<Uuid> {
        match self {
            Self::CreateLink { link_uuid, .. } => *link_uuid,
            _ => None,
        }
    }
}
