use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{CustomFieldId, QueryPairs, SortOrder};

/// A custom contact field definition as returned by the API.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    pub custom_field_id: CustomFieldId,
    pub name: String,
    pub field_type: Option<String>,
    pub value_type: Option<String>,
    pub format: Option<String>,
    pub hidden: Option<bool>,
    pub values: Option<Vec<String>>,
    pub href: Option<String>,
}

/// Server-side filter for custom field list queries.
#[derive(Debug, Default, Clone)]
pub struct CustomFieldsQuery {
    pub name: Option<String>,
}

impl CustomFieldsQuery {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(ref name) = self.name {
            pairs.push(("query[name]", name.clone()));
        }
        pairs
    }
}

/// Sort order for custom field list queries.
#[derive(Debug, Default, Clone)]
pub struct CustomFieldsSort {
    pub name: Option<SortOrder>,
}

impl CustomFieldsSort {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(order) = self.name {
            pairs.push(("sort[name]", order.to_string()));
        }
        pairs
    }
}
