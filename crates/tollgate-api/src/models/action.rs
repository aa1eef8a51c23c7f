use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum::{Display, EnumString};
use url::Url;
use uuid::Uuid;

use super::non_empty_uuid;

/// Link lifecycle event that fires an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActionTrigger {
    PaymentSuccess,
    PaymentFailed,
    LinkAccessed,
}

/// HTTP method used for a callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum CallbackMethod {
    Get,
    #[default]
    Post,
    Put,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackData {
    pub url: Url,
    #[serde(default)]
    pub method: CallbackMethod,
}

/// A side effect fired on a link event.
///
/// Encoded as `{"type": "callback", "trigger": "...", "data": {...}}`.
/// Also the body for `POST /links/{linkUuid}/actions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionRequest {
    /// Webhook call to `data.url`.
    Callback {
        trigger: ActionTrigger,
        data: CallbackData,
    },
}

impl ActionRequest {
    /// A `POST` webhook fired on `trigger`.
    pub fn callback(trigger: ActionTrigger, url: Url) -> Self {
        Self::Callback {
            trigger,
            data: CallbackData {
                url,
                method: CallbackMethod::Post,
            },
        }
    }

    pub fn trigger(&self) -> ActionTrigger {
        match self {
            Self::Callback { trigger, .. } => *trigger,
        }
    }
}

/// An action attached to a link.
///
/// `type`, `trigger` and `data` are kept raw so triggers added server-side,
/// or an acknowledgement carrying only ids, still decode. Use
/// [`Action::request`] for the typed view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    #[serde(
        default,
        deserialize_with = "non_empty_uuid",
        skip_serializing_if = "Option::is_none"
    )]
    pub uuid: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_uuid: Option<Uuid>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    /// e.g. `payment_success`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Action {
    /// Typed action, or `None` if any part is missing or unrecognised.
    pub fn request(&self) -> Option<ActionRequest> {
        let action_type = self.action_type.as_deref()?;
        let trigger = self.trigger.as_deref()?;
        let data = self.data.as_ref()?;
        serde_json::from_value(json!({ "type": action_type, "trigger": trigger, "data": data }))
            .ok()
    }
}
