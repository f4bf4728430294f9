mod api;
pub mod client;
mod constants;
mod error;
pub mod paginate;

pub mod accounts;
pub mod autoresponders;
pub mod campaigns;
pub mod contacts;
pub mod custom_fields;
pub mod from_fields;
pub mod newsletters;
pub mod search_contacts;
pub mod tags;

pub use getresponse_api_model::*;

pub use self::api::{ApiError, RateLimit, Response};
pub use self::client::{
    Client,
    ClientBuilder,
    Credentials,
    Environment,
    RequestRunner,
};
pub use self::constants::{BASE_URL_ENV, DEFAULT_BASE_URL};
pub use self::error::{Error, Result};
pub use self::paginate::QueryOperation;
