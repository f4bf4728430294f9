use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::AccountId;

/// Details of the account the credentials belong to.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "client", non_exhaustive)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: AccountId,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub country_code: Option<AccountCountryCode>,
    pub time_zone: Option<AccountTimeZone>,
    pub href: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountCountryCode {
    pub country_code: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountTimeZone {
    pub name: Option<String>,
    pub offset: Option<String>,
}
