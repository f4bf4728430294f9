use async_trait::async_trait;
use http::Method;
use reqwest::{IntoUrl, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::log::info;
use url::Url;

use crate::constants::{
    ACCESS_TOKEN_ENV,
    API_KEY_ENV,
    AUTH_TOKEN_HEADER,
    BASE_URL_ENV,
    DEFAULT_BASE_URL,
    DOMAIN_ENV,
    DOMAIN_HEADER,
    ENTERPRISE_PL_BASE_URL,
    ENTERPRISE_US_BASE_URL,
    IS_ENTERPRISE_ENV,
    MAX_SERVER_ENV,
    USE_ACCESS_TOKEN_ENV,
};
use crate::{Error, Response, Result};

/// Authentication material attached to every request.
#[derive(Clone)]
pub enum Credentials {
    /// Account API key, sent as `X-Auth-Token: api-key <key>`.
    ApiKey(String),
    /// OAuth2 access token, sent as `Authorization: Bearer <token>`.
    AccessToken(String),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Don't leak secrets through debug logs.
        match self {
            Credentials::ApiKey(_) => write!(f, "Credentials::ApiKey(..)"),
            Credentials::AccessToken(_) => write!(f, "Credentials::AccessToken(..)"),
        }
    }
}

/// Which GetResponse deployment the client talks to.
///
/// MAX (enterprise) accounts live on dedicated servers and must identify
/// their account domain on every request; both facts are resolved once at
/// [`ClientBuilder::build`] time rather than branched on per call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Standard,
    EnterpriseUs {
        domain: String,
    },
    EnterprisePl {
        domain: String,
    },
}

impl Environment {
    fn base_url(&self) -> Url {
        match self {
            Environment::Standard => DEFAULT_BASE_URL.clone(),
            Environment::EnterpriseUs { .. } => ENTERPRISE_US_BASE_URL.clone(),
            Environment::EnterprisePl { .. } => ENTERPRISE_PL_BASE_URL.clone(),
        }
    }

    fn domain(&self) -> Option<&str> {
        match self {
            Environment::Standard => None,
            Environment::EnterpriseUs { domain } => Some(domain),
            Environment::EnterprisePl { domain } => Some(domain),
        }
    }
}

/// An asynchronous client for the GetResponse API service.
///
/// The client has various configuration options, but has reasonable
/// defaults that should suit most use-cases. To configure a client, use
/// [`Client::builder()`] or [`ClientBuilder::new()`].
///
/// a `Client` manages an internal connection pool, it's designed to be
/// created once and reused (via `Client::clone()`). You do **not** need to
/// wrap `Client` in [`Rc`] or [`Arc`] to reuse it.
///
/// [`Rc`]: std::rc::Rc
#[derive(Clone)]
pub struct Client {
    http_client: reqwest::Client,
    config: ClientConfig,
}

/// A `ClientBuilder` is what should be used to construct a `Client` with
/// custom configuration.
///
/// We default to the retail service `https://api.getresponse.com` unless the
/// `GETRESPONSE_BASE_URL` environment variable is defined or an
/// [`Environment`] routes the client to a MAX deployment. Alternatively,
/// `base_url` can be used to override the server url for this particular
/// client instance.
#[must_use]
#[derive(Default, Clone)]
pub struct ClientBuilder {
    config: Config,
}

impl ClientBuilder {
    /// Construct a new client builder with reasonable defaults. Use
    /// [`ClientBuilder::build`] to construct a client.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Construct a builder from the `GETRESPONSE_*` environment variables:
    /// credentials from `GETRESPONSE_API_KEY` or
    /// `GETRESPONSE_ACCESS_TOKEN` (the latter wins when
    /// `GETRESPONSE_USE_ACCESS_TOKEN_AUTHENTICATION` is set), deployment
    /// routing from `GETRESPONSE_IS_ENTERPRISE`, `GETRESPONSE_DOMAIN` and
    /// `GETRESPONSE_MAX_SERVER`.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::new();

        let use_access_token = env_flag(USE_ACCESS_TOKEN_ENV);
        let credentials = if use_access_token {
            std::env::var(ACCESS_TOKEN_ENV).ok().map(Credentials::AccessToken)
        } else {
            std::env::var(API_KEY_ENV).ok().map(Credentials::ApiKey)
        };
        if let Some(credentials) = credentials {
            builder = builder.credentials(credentials);
        }

        if env_flag(IS_ENTERPRISE_ENV) {
            let domain = std::env::var(DOMAIN_ENV).unwrap_or_default();
            let max_server =
                std::env::var(MAX_SERVER_ENV).unwrap_or_else(|_| "US".to_owned());
            let environment = match max_server.as_str() {
                | "US" => Environment::EnterpriseUs { domain },
                | "PL" => Environment::EnterprisePl { domain },
                | other => return Err(Error::UnknownMaxServer(other.to_owned())),
            };
            builder = builder.environment(environment);
        }

        Ok(builder)
    }

    pub fn base_url<T: IntoUrl>(mut self, base_url: T) -> Result<Self> {
        let mut base_url = base_url.into_url()?;
        // We want to make sure that the query string is empty.
        base_url.set_query(None);
        self.config.base_url = Some(base_url);
        Ok(self)
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.config.environment = Some(environment);
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.config.credentials = Some(credentials);
        self
    }

    /// Use a pre-configured [`reqwest::Client`] instance instead of creating
    /// our own. This allows customising TLS, timeout, and other low-level
    /// http client configuration options.
    pub fn reqwest_client(mut self, c: reqwest::Client) -> Self {
        self.config.reqwest_client = Some(c);
        self
    }

    /// Construct the GetResponse client.
    pub fn build(self) -> Result<Client> {
        let http_client = match self.config.reqwest_client {
            | Some(c) => c,
            | None => {
                reqwest::ClientBuilder::new()
                    .redirect(reqwest::redirect::Policy::none())
                    .build()?
            }
        };

        let environment = self.config.environment.unwrap_or_default();

        let base_url = match self.config.base_url {
            | Some(c) => c,
            | None => {
                // Attempt to read from environment variable before falling
                // back to the deployment's well-known url.
                std::env::var(BASE_URL_ENV)
                    .ok()
                    .map(|base_url| Url::parse(&base_url))
                    .transpose()?
                    .unwrap_or_else(|| environment.base_url())
            }
        };

        Ok(Client {
            http_client,
            config: ClientConfig {
                base_url,
                domain: environment.domain().map(str::to_owned),
                credentials: self
                    .config
                    .credentials
                    .ok_or(Error::CredentialsRequired)?,
            },
        })
    }
}

/// The seam between resource operations and the transport.
///
/// Every operation takes its runner explicitly; wrappers can decorate
/// `prepare_request`/`process_response` to inject headers or inspect
/// responses without reimplementing the dispatch plumbing.
#[async_trait]
pub trait RequestRunner: Send + Sync {
    /// Resolve a resource path against the configured base url.
    fn make_url(&self, path: &str) -> Result<Url>;

    fn prepare_request(&self, method: Method, url: Url)
        -> Result<RequestBuilder>;

    async fn process_response<T>(
        &self,
        response: reqwest::Response,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send;

    /// Issue exactly one request with no body.
    async fn run<T>(&self, method: Method, url: Url) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send,
    {
        let request = self.prepare_request(method, url)?;
        let response = request.send().await?;
        self.process_response(response).await
    }

    /// Issue exactly one request carrying a JSON body.
    async fn run_with_body<T, B>(
        &self,
        method: Method,
        url: Url,
        body: B,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + std::fmt::Debug + Send,
    {
        let request = self.prepare_request(method, url)?.json(&body);
        let response = request.send().await?;
        self.process_response(response).await
    }
}

impl Client {
    /// Constructs a new client from the `GETRESPONSE_*` environment
    /// variables. This is **not** the recommended way to construct a
    /// client. We recommend using `Client::builder().build()` instead.
    ///
    /// # Panics
    ///
    /// This method panics if the environment holds no credentials, or if
    /// the TLS backend cannot be initialised. Use [`Client::builder()`] if
    /// you wish to handle the failure as an [`crate::Error`] instead of
    /// panicking.
    pub fn from_env() -> Self {
        ClientBuilder::from_env()
            .and_then(ClientBuilder::build)
            .expect("Client::from_env()")
    }

    /// Creates a `ClientBuilder` to configure a `Client`.
    ///
    /// This is the same as `ClientBuilder::new()`.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

#[async_trait]
impl RequestRunner for Client {
    fn make_url(&self, path: &str) -> Result<Url> {
        Ok(self.config.base_url.join(path)?)
    }

    fn prepare_request(
        &self,
        method: Method,
        url: Url,
    ) -> Result<RequestBuilder> {
        info!("Sending a request '{} {}'", method, url);
        let request = self.http_client.request(method, url);
        let request = match &self.config.credentials {
            | Credentials::ApiKey(key) => {
                request.header(AUTH_TOKEN_HEADER, format!("api-key {}", key))
            }
            | Credentials::AccessToken(token) => request.bearer_auth(token),
        };
        let request = match &self.config.domain {
            | Some(domain) => request.header(DOMAIN_HEADER, domain),
            | None => request,
        };
        Ok(request)
    }

    async fn process_response<T>(
        &self,
        response: reqwest::Response,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send,
    {
        Response::from_raw_response(response).await
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| {
            let value = value.trim().to_ascii_lowercase();
            value == "1" || value == "true" || value == "yes"
        })
        .unwrap_or(false)
}

#[derive(Default, Clone)]
struct Config {
    base_url: Option<Url>,
    environment: Option<Environment>,
    credentials: Option<Credentials>,
    reqwest_client: Option<reqwest::Client>,
}

#[derive(Clone)]
struct ClientConfig {
    base_url: Url,
    domain: Option<String>,
    credentials: Credentials,
}

// Ensure that Client is Send + Sync. Compiler will fail if it's not.
const _: () = {
    fn assert_send<T: Send + Sync>() {}
    let _ = assert_send::<Client>;
};

#[cfg(test)]
mod tests {
    use super::*;

    fn api_key_client() -> Client {
        Client::builder()
            .credentials(Credentials::ApiKey("unit-test-key".to_owned()))
            .build()
            .unwrap()
    }

    #[test]
    fn build_without_credentials_is_rejected() {
        let result = Client::builder().build();
        assert!(matches!(result, Err(Error::CredentialsRequired)));
    }

    #[test]
    fn standard_environment_targets_the_retail_api() {
        let client = api_key_client();
        let url = client.make_url("/v3/campaigns").unwrap();
        assert_eq!(url.as_str(), "https://api.getresponse.com/v3/campaigns");
    }

    #[test]
    fn enterprise_environments_target_dedicated_servers() {
        let client = Client::builder()
            .environment(Environment::EnterprisePl {
                domain: "example.com".to_owned(),
            })
            .credentials(Credentials::ApiKey("unit-test-key".to_owned()))
            .build()
            .unwrap();
        let url = client.make_url("/v3/accounts").unwrap();
        assert_eq!(url.as_str(), "https://api3.getresponse360.pl/v3/accounts");
    }

    #[test]
    fn base_url_override_drops_query_strings() {
        let client = Client::builder()
            .base_url("http://localhost:8080/?debug=1")
            .unwrap()
            .credentials(Credentials::AccessToken("token".to_owned()))
            .build()
            .unwrap();
        let url = client.make_url("/v3/tags").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v3/tags");
    }

    #[test]
    fn credentials_debug_does_not_leak_secrets() {
        let debug = format!("{:?}", Credentials::ApiKey("s3cr3t".to_owned()));
        assert!(!debug.contains("s3cr3t"));
    }
}
