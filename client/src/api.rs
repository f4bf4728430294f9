use getresponse_api_model::PageMeta;
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::log::warn;
use url::Url;

pub const TOTAL_PAGES_HEADER: &str = "TotalPages";
pub const TOTAL_COUNT_HEADER: &str = "TotalCount";
pub const CURRENT_PAGE_HEADER: &str = "CurrentPage";
pub const RATE_LIMIT_HEADER: &str = "X-RateLimit-Limit";
pub const RATE_LIMIT_REMAINING_HEADER: &str = "X-RateLimit-Remaining";
pub const RATE_LIMIT_RESET_HEADER: &str = "X-RateLimit-Reset";

#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    message: String,
    code: Option<u32>,
    uuid: Option<String>,
    context: Option<serde_json::Value>,
}

/// An error reported by the service itself: the call reached the API but
/// was rejected. `message` is the server's wording, verbatim.
#[derive(Debug, Clone)]
pub struct ApiError {
    status_code: StatusCode,
    message: String,
    code: Option<u32>,
    uuid: Option<String>,
    context: Option<serde_json::Value>,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> Option<u32> {
        self.code
    }

    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    pub fn context(&self) -> Option<&serde_json::Value> {
        self.context.as_ref()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) {}", self.status_code, self.message)?;
        if let Some(code) = self.code {
            write!(f, " [code {}]", code)?;
        }
        if let Some(ref uuid) = self.uuid {
            write!(f, " [uuid {}]", uuid)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Rate limiting headers the service attaches to every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u32,
    pub remaining: u32,
    /// Seconds until the current window resets.
    pub reset: u32,
}

#[derive(Debug, Clone)]
pub struct Response<T> {
    inner: Result<T, ApiError>,
    url: Url,
    status_code: StatusCode,
    headers: http::HeaderMap,
    page_meta: Option<PageMeta>,
    rate_limit: Option<RateLimit>,
}

impl<T> Response<T> {
    pub fn into_inner(self) -> Result<T, ApiError> {
        self.inner
    }

    pub fn inner(&self) -> &Result<T, ApiError> {
        &self.inner
    }

    pub fn headers(&self) -> &http::HeaderMap {
        &self.headers
    }

    pub fn status_code(&self) -> http::StatusCode {
        self.status_code
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn is_err(&self) -> bool {
        self.inner.is_err()
    }

    pub fn is_ok(&self) -> bool {
        self.inner.is_ok()
    }

    /// Pagination metadata, when the server declared the response paginated.
    pub fn page_meta(&self) -> Option<PageMeta> {
        self.page_meta
    }

    pub fn is_paginated(&self) -> bool {
        self.page_meta.is_some()
    }

    pub fn rate_limit(&self) -> Option<RateLimit> {
        self.rate_limit
    }
}

fn header_u32(headers: &http::HeaderMap, name: &str) -> Option<u32> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}

fn header_u64(headers: &http::HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}

fn page_meta_from_headers(headers: &http::HeaderMap) -> Option<PageMeta> {
    // A response without a TotalPages header is not paginated.
    let total_pages = header_u32(headers, TOTAL_PAGES_HEADER)?;
    Some(PageMeta {
        total_pages,
        total_count: header_u64(headers, TOTAL_COUNT_HEADER),
        current_page: header_u32(headers, CURRENT_PAGE_HEADER),
    })
}

fn rate_limit_from_headers(headers: &http::HeaderMap) -> Option<RateLimit> {
    Some(RateLimit {
        limit: header_u32(headers, RATE_LIMIT_HEADER)?,
        remaining: header_u32(headers, RATE_LIMIT_REMAINING_HEADER)?,
        reset: header_u32(headers, RATE_LIMIT_RESET_HEADER)?,
    })
}

impl<T> Response<T>
where
    T: DeserializeOwned,
{
    pub(crate) async fn from_raw_response(
        raw: reqwest::Response,
    ) -> Result<Self, crate::Error> {
        let url = raw.url().clone();
        let status_code = raw.status();
        let headers = raw.headers().clone();
        let page_meta = page_meta_from_headers(&headers);
        let rate_limit = rate_limit_from_headers(&headers);

        let body = raw.text().await?;

        let inner = if status_code.is_success() {
            // 202/204 responses come with no body at all; unit and optional
            // payloads deserialize from `null`.
            let body = if body.is_empty() { "null" } else { body.as_str() };
            Ok(serde_json::from_str(body)?)
        } else {
            // Attempt to parse the error as json
            let error_body: Result<ApiErrorBody, serde_json::Error> =
                serde_json::from_str(&body);
            match error_body {
                | Ok(error_body) => {
                    Err(ApiError {
                        status_code,
                        message: error_body.message,
                        code: error_body.code,
                        uuid: error_body.uuid,
                        context: error_body.context,
                    })
                }
                | Err(e) => {
                    warn!(
                        "Response error body is not json. Error: {}. Body: {}",
                        e, body
                    );
                    Err(ApiError {
                        status_code,
                        message: body,
                        code: None,
                        uuid: None,
                        context: None,
                    })
                }
            }
        };

        Ok(Self {
            inner,
            url,
            status_code,
            headers,
            page_meta,
            rate_limit,
        })
    }
}
