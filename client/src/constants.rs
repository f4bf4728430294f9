use once_cell::sync::Lazy;
use url::Url;

pub static BASE_URL_ENV: &str = "GETRESPONSE_BASE_URL";
pub static API_KEY_ENV: &str = "GETRESPONSE_API_KEY";
pub static ACCESS_TOKEN_ENV: &str = "GETRESPONSE_ACCESS_TOKEN";
pub static USE_ACCESS_TOKEN_ENV: &str =
    "GETRESPONSE_USE_ACCESS_TOKEN_AUTHENTICATION";
pub static IS_ENTERPRISE_ENV: &str = "GETRESPONSE_IS_ENTERPRISE";
pub static DOMAIN_ENV: &str = "GETRESPONSE_DOMAIN";
pub static MAX_SERVER_ENV: &str = "GETRESPONSE_MAX_SERVER";

pub static DEFAULT_BASE_URL: Lazy<Url> = Lazy::new(|| {
    Url::parse("https://api.getresponse.com").expect("DEFAULT_BASE_URL")
});

pub(crate) static ENTERPRISE_US_BASE_URL: Lazy<Url> = Lazy::new(|| {
    Url::parse("https://api3.getresponse360.com").expect("ENTERPRISE_US_BASE_URL")
});

pub(crate) static ENTERPRISE_PL_BASE_URL: Lazy<Url> = Lazy::new(|| {
    Url::parse("https://api3.getresponse360.pl").expect("ENTERPRISE_PL_BASE_URL")
});

/// API key authentication header; the value format is `api-key <key>`.
pub(crate) const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// MAX (enterprise) deployments identify the account domain per request.
pub(crate) const DOMAIN_HEADER: &str = "x-domain";
