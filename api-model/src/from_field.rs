use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{FromFieldId, QueryPairs};

/// A verified sender address ("from field") as returned by the API.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "camelCase")]
pub struct FromField {
    pub from_field_id: FromFieldId,
    pub email: String,
    pub name: Option<String>,
    pub is_active: Option<bool>,
    pub is_default: Option<bool>,
    pub href: Option<String>,
    pub created_on: Option<DateTime<Utc>>,
}

/// Reference to a from field inside newsletter send settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FromFieldReference {
    pub from_field_id: FromFieldId,
}

impl FromFieldReference {
    pub fn new<T: Into<FromFieldId>>(from_field_id: T) -> Self {
        Self {
            from_field_id: from_field_id.into(),
        }
    }
}

/// Server-side filter for from-field list queries.
#[derive(Debug, Default, Clone)]
pub struct FromFieldsQuery {
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

impl FromFieldsQuery {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(ref email) = self.email {
            pairs.push(("query[email]", email.clone()));
        }
        if let Some(is_active) = self.is_active {
            pairs.push(("query[isActive]", is_active.to_string()));
        }
        pairs
    }
}
