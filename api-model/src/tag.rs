use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
#[cfg(feature = "validation")]
use validator::Validate;

use crate::{QueryPairs, SortOrder, TagId};

/// A tag as returned by the API.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub tag_id: TagId,
    pub name: String,
    pub color: Option<String>,
    pub href: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating a tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
#[serde(rename_all = "camelCase")]
pub struct NewTag {
    #[cfg_attr(
        feature = "validation",
        validate(length(
            min = 1,
            max = 255,
            message = "name must be between 1 and 255 characters"
        ))
    )]
    pub name: String,
}

impl NewTag {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self { name: name.into() }
    }
}

/// Server-side filter for tag list queries.
#[derive(Debug, Default, Clone)]
pub struct TagsQuery {
    pub name: Option<String>,
}

impl TagsQuery {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(ref name) = self.name {
            pairs.push(("query[name]", name.clone()));
        }
        pairs
    }
}

/// Sort order for tag list queries.
#[derive(Debug, Default, Clone)]
pub struct TagsSort {
    pub name: Option<SortOrder>,
    pub created_at: Option<SortOrder>,
}

impl TagsSort {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(order) = self.name {
            pairs.push(("sort[name]", order.to_string()));
        }
        if let Some(order) = self.created_at {
            pairs.push(("sort[createdAt]", order.to_string()));
        }
        pairs
    }
}
