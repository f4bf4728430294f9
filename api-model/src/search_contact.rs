use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::SearchContactId;

/// A saved search (segment) as returned by the API.
///
/// The condition tree under `section` is deeply polymorphic (one shape per
/// condition kind), so it is kept as raw JSON rather than modeled field by
/// field.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "camelCase")]
pub struct SearchContact {
    pub search_contact_id: SearchContactId,
    pub name: String,
    pub href: Option<String>,
    pub subscribers_type: Option<Vec<String>>,
    pub section_logic_operator: Option<LogicOperator>,
    pub section: Option<serde_json::Value>,
    pub created_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogicOperator {
    And,
    Or,
}

/// Request body for creating a saved search.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewSearchContact {
    pub name: String,
    pub subscribers_type: Vec<String>,
    pub section_logic_operator: LogicOperator,
    pub section: serde_json::Value,
}

impl NewSearchContact {
    pub fn new<T: Into<String>>(
        name: T,
        subscribers_type: Vec<String>,
        section_logic_operator: LogicOperator,
        section: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            subscribers_type,
            section_logic_operator,
            section,
        }
    }
}
