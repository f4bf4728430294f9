use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
#[cfg(feature = "validation")]
use validator::Validate;

use crate::{CampaignId, QueryPairs, SortOrder};

/// A campaign (contact list) as returned by the API.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub campaign_id: CampaignId,
    pub name: String,
    pub href: Option<String>,
    pub language_code: Option<String>,
    pub is_default: Option<bool>,
    pub description: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
}

/// Reference to an existing campaign, used wherever a request body links a
/// resource to a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignReference {
    pub campaign_id: CampaignId,
}

impl CampaignReference {
    pub fn new<T: Into<CampaignId>>(campaign_id: T) -> Self {
        Self {
            campaign_id: campaign_id.into(),
        }
    }
}

/// Opt-in confirmation mode for one subscription channel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OptinType {
    #[default]
    Single,
    Double,
}

/// Opt-in modes per subscription channel. The server default is `double`
/// everywhere, which breaks unattended imports, so campaign creation falls
/// back to all-`single` when none are given.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CampaignOptinTypes {
    pub api: OptinType,
    pub email: OptinType,
    pub import: OptinType,
    pub webform: OptinType,
}

/// Public campaign profile settings.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct CampaignProfile {
    #[cfg_attr(
        feature = "validation",
        validate(length(max = 255, message = "title must be under 255 characters"))
    )]
    pub title: Option<String>,
    pub description: Option<String>,
    pub industry_tag_id: Option<u32>,
    pub logo: Option<String>,
    pub logo_link_url: Option<String>,
}

/// Request body for creating a campaign.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    #[cfg_attr(
        feature = "validation",
        validate(length(
            min = 3,
            max = 64,
            message = "name must be between 3 and 64 characters"
        ))
    )]
    pub name: String,
    pub language_code: Option<String>,
    pub profile: Option<CampaignProfile>,
    pub optin_types: Option<CampaignOptinTypes>,
}

impl NewCampaign {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            language_code: None,
            profile: None,
            optin_types: None,
        }
    }
}

/// Server-side filter for campaign list queries.
#[derive(Debug, Default, Clone)]
pub struct CampaignsQuery {
    pub name: Option<String>,
}

impl CampaignsQuery {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(ref name) = self.name {
            pairs.push(("query[name]", name.clone()));
        }
        pairs
    }
}

/// Sort order for campaign list queries.
#[derive(Debug, Default, Clone)]
pub struct CampaignsSort {
    pub name: Option<SortOrder>,
    pub created_on: Option<SortOrder>,
}

impl CampaignsSort {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(order) = self.name {
            pairs.push(("sort[name]", order.to_string()));
        }
        if let Some(order) = self.created_on {
            pairs.push(("sort[createdOn]", order.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_campaign_serializes_without_unset_fields() {
        let body = serde_json::to_value(NewCampaign::new("unit_test")).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "unit_test" }));
    }

    #[test]
    fn optin_types_serialize_snake_case() {
        let body = serde_json::to_value(CampaignOptinTypes::default()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "api": "single",
                "email": "single",
                "import": "single",
                "webform": "single",
            })
        );
    }

    #[test]
    fn sort_pairs_keep_field_order() {
        let sort = CampaignsSort {
            name: Some(SortOrder::Asc),
            created_on: Some(SortOrder::Desc),
        };
        assert_eq!(
            sort.pairs(),
            vec![
                ("sort[name]", "ASC".to_owned()),
                ("sort[createdOn]", "DESC".to_owned()),
            ]
        );
    }
}
