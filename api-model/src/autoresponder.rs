use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{AutoresponderId, CampaignId, QueryPairs};

/// An autoresponder (cycle message) as returned by the API.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "camelCase")]
pub struct Autoresponder {
    pub autoresponder_id: AutoresponderId,
    pub name: String,
    pub subject: Option<String>,
    pub status: Option<String>,
    pub campaign_id: Option<CampaignId>,
    pub trigger_settings: Option<AutoresponderTriggerSettings>,
    pub href: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
}

/// When within the cycle the message goes out.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AutoresponderTriggerSettings {
    pub day_of_cycle: Option<String>,
    pub selected_hour: Option<String>,
}

/// Server-side filter for autoresponder list queries.
#[derive(Debug, Default, Clone)]
pub struct AutorespondersQuery {
    pub name: Option<String>,
    pub status: Option<String>,
    pub campaign_id: Option<String>,
}

impl AutorespondersQuery {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(ref name) = self.name {
            pairs.push(("query[name]", name.clone()));
        }
        if let Some(ref status) = self.status {
            pairs.push(("query[status]", status.clone()));
        }
        if let Some(ref campaign_id) = self.campaign_id {
            pairs.push(("query[campaignId]", campaign_id.clone()));
        }
        pairs
    }
}
