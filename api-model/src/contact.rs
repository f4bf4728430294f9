use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
#[cfg(feature = "validation")]
use validator::Validate;

use crate::{
    CampaignReference,
    ContactId,
    CustomFieldId,
    QueryPairs,
    SortOrder,
    TagId,
};

/// A contact (subscriber) as returned by the API.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub contact_id: ContactId,
    pub email: String,
    pub name: Option<String>,
    pub origin: Option<String>,
    pub day_of_cycle: Option<String>,
    pub scoring: Option<f64>,
    pub campaign: Option<CampaignReference>,
    pub ip_address: Option<String>,
    pub note: Option<String>,
    pub time_zone: Option<String>,
    pub href: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
    pub changed_on: Option<DateTime<Utc>>,
}

/// Tag assignment inside a contact create/update body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewContactTag {
    pub tag_id: TagId,
}

impl NewContactTag {
    pub fn new<T: Into<TagId>>(tag_id: T) -> Self {
        Self {
            tag_id: tag_id.into(),
        }
    }
}

/// One custom field value inside a contact create/update body. `value` is a
/// list because multi-select fields carry several entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewContactCustomFieldValue {
    pub custom_field_id: CustomFieldId,
    pub value: Vec<String>,
}

impl NewContactCustomFieldValue {
    pub fn new<T: Into<CustomFieldId>>(custom_field_id: T, value: Vec<String>) -> Self {
        Self {
            custom_field_id: custom_field_id.into(),
            value,
        }
    }
}

/// Request body for creating a contact.
///
/// `scoring` is only honored by advanced accounts; the server answers 400
/// for the rest.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub campaign: CampaignReference,
    #[cfg_attr(feature = "validation", validate(email))]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(max = 128, message = "name must be under 128 characters"))
    )]
    pub name: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(range(max = 9999, message = "dayOfCycle out of range"))
    )]
    pub day_of_cycle: Option<u32>,
    pub scoring: Option<f64>,
    pub ip_address: Option<String>,
    pub tags: Option<Vec<NewContactTag>>,
    pub custom_field_values: Option<Vec<NewContactCustomFieldValue>>,
}

impl NewContact {
    pub fn new<T: Into<String>>(campaign: CampaignReference, email: T) -> Self {
        Self {
            campaign,
            email: email.into(),
            name: None,
            day_of_cycle: None,
            scoring: None,
            ip_address: None,
            tags: None,
            custom_field_values: None,
        }
    }
}

/// Request body for updating a contact. Every field is optional; unset
/// fields are left untouched server-side.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct UpdateContact {
    pub campaign: Option<CampaignReference>,
    #[cfg_attr(feature = "validation", validate(email))]
    pub email: Option<String>,
    pub name: Option<String>,
    pub day_of_cycle: Option<u32>,
    pub scoring: Option<f64>,
    pub tags: Option<Vec<NewContactTag>>,
    pub custom_field_values: Option<Vec<NewContactCustomFieldValue>>,
}

/// Additional flags accepted by the contact list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFlag {
    /// Match `query[...]` values exactly instead of as substrings.
    ExactMatch,
}

impl ContactFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactFlag::ExactMatch => "exactMatch",
        }
    }
}

impl std::fmt::Display for ContactFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Server-side filter for contact list queries. Date bounds use the
/// `YYYY-MM-DD` form the API expects.
#[derive(Debug, Default, Clone)]
pub struct ContactsQuery {
    pub email: Option<String>,
    pub name: Option<String>,
    pub campaign_id: Option<String>,
    pub origin: Option<String>,
    pub created_on_from: Option<String>,
    pub created_on_to: Option<String>,
}

impl ContactsQuery {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(ref email) = self.email {
            pairs.push(("query[email]", email.clone()));
        }
        if let Some(ref name) = self.name {
            pairs.push(("query[name]", name.clone()));
        }
        if let Some(ref campaign_id) = self.campaign_id {
            pairs.push(("query[campaignId]", campaign_id.clone()));
        }
        if let Some(ref origin) = self.origin {
            pairs.push(("query[origin]", origin.clone()));
        }
        if let Some(ref from) = self.created_on_from {
            pairs.push(("query[createdOn][from]", from.clone()));
        }
        if let Some(ref to) = self.created_on_to {
            pairs.push(("query[createdOn][to]", to.clone()));
        }
        pairs
    }
}

/// Sort order for contact list queries.
#[derive(Debug, Default, Clone)]
pub struct ContactsSort {
    pub email: Option<SortOrder>,
    pub name: Option<SortOrder>,
    pub created_on: Option<SortOrder>,
    pub changed_on: Option<SortOrder>,
}

impl ContactsSort {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(order) = self.email {
            pairs.push(("sort[email]", order.to_string()));
        }
        if let Some(order) = self.name {
            pairs.push(("sort[name]", order.to_string()));
        }
        if let Some(order) = self.created_on {
            pairs.push(("sort[createdOn]", order.to_string()));
        }
        if let Some(order) = self.changed_on {
            pairs.push(("sort[changedOn]", order.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_contact_carries_nested_tags_and_custom_fields() {
        let mut contact =
            NewContact::new(CampaignReference::new("MDct2"), "unit@example.com");
        contact.name = Some("DF Test".to_owned());
        contact.tags = Some(vec![NewContactTag::new("Vumth")]);
        contact.custom_field_values = Some(vec![NewContactCustomFieldValue::new(
            "VZSuSU",
            vec!["1990-01-01".to_owned()],
        )]);

        let body = serde_json::to_value(&contact).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "campaign": { "campaignId": "MDct2" },
                "email": "unit@example.com",
                "name": "DF Test",
                "tags": [{ "tagId": "Vumth" }],
                "customFieldValues": [{
                    "customFieldId": "VZSuSU",
                    "value": ["1990-01-01"],
                }],
            })
        );
    }

    #[test]
    fn query_pairs_use_bracket_syntax() {
        let query = ContactsQuery {
            email: Some("unit@example.com".to_owned()),
            created_on_from: Some("2023-01-01".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            query.pairs(),
            vec![
                ("query[email]", "unit@example.com".to_owned()),
                ("query[createdOn][from]", "2023-01-01".to_owned()),
            ]
        );
    }

    #[test]
    fn empty_update_serializes_to_empty_object() {
        let body = serde_json::to_value(UpdateContact::default()).unwrap();
        assert_eq!(body, serde_json::json!({}));
    }
}
