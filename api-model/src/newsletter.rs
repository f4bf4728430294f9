use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
#[cfg(feature = "validation")]
use validator::Validate;

use crate::{
    CampaignReference,
    ContactId,
    FromFieldReference,
    NewsletterId,
    QueryPairs,
};

/// A newsletter (broadcast message) as returned by the API.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub newsletter_id: NewsletterId,
    pub subject: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<NewsletterKind>,
    pub status: Option<String>,
    pub editor: Option<String>,
    pub campaign: Option<CampaignReference>,
    pub href: Option<String>,
    pub send_on: Option<DateTime<Utc>>,
    pub created_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NewsletterKind {
    #[default]
    Broadcast,
    Draft,
}

/// Message body variants. At least one of `html`/`plain` must be set for
/// the server to accept the message.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterContent {
    pub html: Option<String>,
    pub plain: Option<String>,
}

/// Recipient selection for a newsletter. Lists of campaign/segment ids are
/// combined with the explicitly selected contacts.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSendSettings {
    pub selected_campaigns: Option<Vec<String>>,
    pub selected_segments: Option<Vec<String>>,
    pub selected_contacts: Option<Vec<ContactId>>,
    pub excluded_campaigns: Option<Vec<String>>,
    pub time_travel: Option<bool>,
    pub perfect_timing: Option<bool>,
}

/// An attachment on an outgoing newsletter; `content` is base64 encoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterAttachment {
    pub file_name: String,
    pub content: String,
    pub mime_type: String,
}

/// Request body for creating (and sending or scheduling) a newsletter.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct NewNewsletter {
    #[cfg_attr(
        feature = "validation",
        validate(length(
            min = 1,
            max = 128,
            message = "subject must be between 1 and 128 characters"
        ))
    )]
    pub subject: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<NewsletterKind>,
    pub editor: Option<String>,
    pub campaign: CampaignReference,
    pub from_field: FromFieldReference,
    pub reply_to: Option<FromFieldReference>,
    pub content: NewsletterContent,
    pub send_settings: NewsletterSendSettings,
    pub attachments: Option<Vec<NewsletterAttachment>>,
    pub send_on: Option<DateTime<Utc>>,
}

/// Aggregate delivery statistics for one newsletter.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterStatistics {
    pub sent: Option<u64>,
    pub total_opened: Option<u64>,
    pub unique_opened: Option<u64>,
    pub total_clicked: Option<u64>,
    pub unique_clicked: Option<u64>,
    pub goals: Option<u64>,
    pub unsubscribed: Option<u64>,
    pub bounced: Option<u64>,
    pub complaints: Option<u64>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Server-side filter for newsletter list queries.
#[derive(Debug, Default, Clone)]
pub struct NewslettersQuery {
    pub subject: Option<String>,
    pub status: Option<String>,
    pub campaign_id: Option<String>,
}

impl NewslettersQuery {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(ref subject) = self.subject {
            pairs.push(("query[subject]", subject.clone()));
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_uses_the_reserved_word_on_the_wire() {
        let newsletter: Newsletter = serde_json::from_value(serde_json::json!({
            "newsletterId": "N1",
            "subject": "Weekly digest",
            "type": "broadcast",
        }))
        .unwrap();
        assert_eq!(newsletter.kind, Some(NewsletterKind::Broadcast));
    }
}
