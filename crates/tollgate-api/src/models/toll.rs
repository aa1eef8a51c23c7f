use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::non_empty_uuid;

/// One accepted way of paying a toll.
///
/// `amount` is an integer string in the asset's smallest unit; scaling by
/// the token's decimals is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TollRequirement {
    pub asset_network: String,
    pub asset_address: String,
    pub amount: String,
    pub destination_address: String,
}

/// Body for `POST /links/{linkUuid}/tolls`.
///
/// Several requirements represent alternative accepted assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TollRequest {
    pub requirements: Vec<TollRequirement>,
}

impl TollRequest {
    /// A toll with a single accepted asset.
    pub fn single(requirement: TollRequirement) -> Self {
        Self {
            requirements: vec![requirement],
        }
    }
}

/// The active toll of a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toll {
    #[serde(
        default,
        deserialize_with = "non_empty_uuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub uuid: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_uuid: Option<Uuid>,
    #[serde(default)]
    pub requirements: Vec<TollRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
