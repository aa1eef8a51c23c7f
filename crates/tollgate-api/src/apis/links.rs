use std::sync::Arc;

use uuid::Uuid;

use crate::configuration::Configuration;
use crate::error::Error;
use crate::models::{
    Action, ActionRequest, CreateLinkRequest, Link, LinkStatus, ListLinksParams, Page, Resource,
    ResourceContent, Toll, TollRequest, UpdateLinkRequest,
};
use crate::transport::Executor;

/// Operations on links and the tolls, resources and actions attached to them.
#[derive(Debug, Clone)]
pub struct LinksApi {
    exec: Executor,
}

impl LinksApi {
    pub fn new(http: reqwest::Client, configuration: Arc<Configuration>) -> Self {
        Self {
            exec: Executor::new(http, configuration),
        }
    }

    /// The configuration this handle was built with.
    pub fn configuration(&self) -> &Arc<Configuration> {
        self.exec.configuration()
    }

    // ── Links ────────────────────────────────────────────────────────

    pub async fn list_links(&self, params: &ListLinksParams) -> Result<Page<Link>, Error> {
        self.exec.get_with_params(&["links"], params).await
    }

    /// Collect every page of `GET /links` into a single `Vec`.
    ///
    /// A `limit` of 0 is treated as 1.
    pub async fn list_all_links(
        &self,
        limit: u32,
        status: Option<LinkStatus>,
    ) -> Result<Vec<Link>, Error> {
        let limit = limit.max(1);
        let mut all = Vec::new();
        let mut page: u32 = 1;

        loop {
            let params = ListLinksParams {
                page: Some(page),
                limit: Some(limit),
                status,
            };
            let batch = self.list_links(&params).await?;
            let received = batch.data.len();
            all.extend(batch.data);

            let limit_usize = usize::try_from(limit).unwrap_or(usize::MAX);
            let fetched = u64::try_from(all.len()).unwrap_or(u64::MAX);
            if received == 0 || received < limit_usize || (batch.total > 0 && fetched >= batch.total)
            {
                break;
            }

            page += 1;
        }

        Ok(all)
    }

    pub async fn create_link(&self, body: &CreateLinkRequest) -> Result<Link, Error> {
        self.exec.post(&["links"], body).await
    }

    /// Fetch a link by its uuid or its vanity alias.
    pub async fn get_link(&self, uuid_or_alias: &str) -> Result<Link, Error> {
        self.exec.get(&["links", uuid_or_alias]).await
    }

    pub async fn update_link(&self, link_uuid: &Uuid, body: &UpdateLinkRequest) -> Result<Link, Error> {
        let id = link_uuid.to_string();
        self.exec.patch(&["links", id.as_str()], body).await
    }

    pub async fn delete_link(&self, link_uuid: &Uuid) -> Result<(), Error> {
        let id = link_uuid.to_string();
        self.exec.delete(&["links", id.as_str()]).await
    }

    // ── Tolls ────────────────────────────────────────────────────────

    pub async fn create_toll(&self, link_uuid: &Uuid, body: &TollRequest) -> Result<Toll, Error> {
        let id = link_uuid.to_string();
        self.exec.post(&["links", id.as_str(), "tolls"], body).await
    }

    // ── Resources ────────────────────────────────────────────────────

    pub async fn create_resource(
        &self,
        link_uuid: &Uuid,
        body: &ResourceContent,
    ) -> Result<Resource, Error> {
        let id = link_uuid.to_string();
        self.exec.post(&["links", id.as_str(), "resources"], body).await
    }

    // ── Actions ──────────────────────────────────────────────────────

    pub async fn create_action(
        &self,
        link_uuid: &Uuid,
        body: &ActionRequest,
    ) -> Result<Action, Error> {
        let id = link_uuid.to_string();
        self.exec.post(&["links", id.as_str(), "actions"], body).await
    }

    pub async fn list_actions(&self, link_uuid: &Uuid) -> Result<Vec<Action>, Error> {
        let id = link_uuid.to_string();
        self.exec.get(&["links", id.as_str(), "actions"]).await
    }

    pub async fn delete_action(&self, link_uuid: &Uuid, action_uuid: &Uuid) -> Result<(), Error> {
        let id = link_uuid.to_string();
        let action_id = action_uuid.to_string();
        self.exec.delete(&["links", id.as_str(), "actions", action_id.as_str()]).await
    }
}
