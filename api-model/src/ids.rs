use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    From,
    Into,
    Display,
    Clone,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Deref,
)]
pub struct AccountId(String);

#[derive(
    Debug,
    From,
    Into,
    Display,
    Clone,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Deref,
)]
pub struct CampaignId(String);

#[derive(
    Debug,
    From,
    Into,
    Display,
    Clone,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Deref,
)]
pub struct ContactId(String);

#[derive(
    Debug,
    From,
    Into,
    Display,
    Clone,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Deref,
)]
pub struct CustomFieldId(String);

#[derive(
    Debug,
    From,
    Into,
    Display,
    Clone,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Deref,
)]
pub struct TagId(String);

#[derive(
    Debug,
    From,
    Into,
    Display,
    Clone,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Deref,
)]
pub struct FromFieldId(String);

#[derive(
    Debug,
    From,
    Into,
    Display,
    Clone,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Deref,
)]
pub struct NewsletterId(String);

#[derive(
    Debug,
    From,
    Into,
    Display,
    Clone,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Deref,
)]
pub struct AutoresponderId(String);

#[derive(
    Debug,
    From,
    Into,
    Display,
    Clone,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Deref,
)]
pub struct SearchContactId(String);

impl From<&str> for CampaignId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<&str> for TagId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<&str> for CustomFieldId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<&str> for FromFieldId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
