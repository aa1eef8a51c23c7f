// ── Composite link creation ──
//
// Link first, then toll, resource and each action in order, then a
// read-back. Strictly sequential and fail-fast. Nothing already created is
// rolled back when a later step fails.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use tollgate_api::LinksApi;
use tollgate_api::models::{
    ActionRequest, CreateLinkRequest, Link, LinkStatus, LinkType, ResourceContent, TollRequest,
};

use crate::error::{CreateLinkStep, Error};

/// Everything needed to create a fully configured link in one call.
///
/// The link fields are sent as the plain creation request; `toll`,
/// `resource` and `actions` are attached afterwards, scoped to the new uuid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLinkOptions {
    #[serde(flatten)]
    pub link: CreateLinkRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toll: Option<TollRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<ResourceContent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionRequest>,
}

impl CreateLinkOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            link: CreateLinkRequest::new(name),
            toll: None,
            resource: None,
            actions: Vec::new(),
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.link.alias = Some(alias.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.link.description = Some(description.into());
        self
    }

    pub fn status(mut self, status: LinkStatus) -> Self {
        self.link.status = Some(status);
        self
    }

    pub fn link_type(mut self, link_type: LinkType) -> Self {
        self.link.link_type = Some(link_type);
        self
    }

    pub fn toll(mut self, toll: TollRequest) -> Self {
        self.toll = Some(toll);
        self
    }

    pub fn resource(mut self, resource: ResourceContent) -> Self {
        self.resource = Some(resource);
        self
    }

    /// Append an action. Actions are created in the order they are added.
    pub fn action(mut self, action: ActionRequest) -> Self {
        self.actions.push(action);
        self
    }
}

/// Run the composite creation against one `LinksApi` handle.
pub(crate) async fn create_link(
    links: &LinksApi,
    options: CreateLinkOptions,
) -> Result<Link, Error> {
    let CreateLinkOptions {
        link,
        toll,
        resource,
        actions,
    } = options;

    let created = links
        .create_link(&link)
        .await
        .map_err(|e| failed(CreateLinkStep::Link, None, e))?;

    let Some(uuid) = created.uuid else {
        warn!(name = %link.name, "link creation returned no uuid");
        return Err(Error::CreationIncomplete);
    };
    debug!(%uuid, name = %link.name, "link created");

    if let Some(toll) = &toll {
        links
            .create_toll(&uuid, toll)
            .await
            .map_err(|e| failed(CreateLinkStep::Toll, Some(uuid), e))?;
        debug!(%uuid, requirements = toll.requirements.len(), "toll attached");
    }

    if let Some(resource) = &resource {
        links
            .create_resource(&uuid, resource)
            .await
            .map_err(|e| failed(CreateLinkStep::Resource, Some(uuid), e))?;
        debug!(%uuid, resource_type = %resource.resource_type(), "resource attached");
    }

    for (index, action) in actions.iter().enumerate() {
        links
            .create_action(&uuid, action)
            .await
            .map_err(|e| failed(CreateLinkStep::Action { index }, Some(uuid), e))?;
        debug!(%uuid, index, trigger = %action.trigger(), "action attached");
    }

    let link = links
        .get_link(&uuid.to_string())
        .await
        .map_err(|e| failed(CreateLinkStep::Fetch, Some(uuid), e))?;

    info!(
        %uuid,
        toll = toll.is_some(),
        resource = resource.is_some(),
        actions = actions.len(),
        "link created"
    );
    Ok(link)
}

fn failed(step: CreateLinkStep, link_uuid: Option<Uuid>, source: tollgate_api::Error) -> Error {
    match link_uuid {
        Some(uuid) => warn!(
            %uuid,
            %step,
            error = %source,
            "link creation failed; the link and earlier steps remain on the server"
        ),
        None => warn!(%step, error = %source, "link creation failed"),
    }
    Error::CreateLink {
        step,
        link_uuid,
        source,
    }
}
