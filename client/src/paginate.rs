//! Flattens paginated list endpoints into single collections.
//!
//! Every list endpoint slices its result set into 1-based pages and
//! reports the total page count on each response. The data set can grow or
//! shrink while a collection is running, so the reported count is re-read
//! after every request; under heavy concurrent mutation rows may repeat or
//! go missing, which callers accept in exchange for never locking the
//! remote set.

use getresponse_api_model::{FetchedPage, Pagination, QueryPairs};
use http::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::client::RequestRunner;
use crate::{Response, Result};

/// A described list request: resource path plus filter/sort/field
/// parameters, set once before collection starts. The pagination cursor is
/// attached at dispatch time, never by resource code.
#[derive(Debug, Clone)]
pub struct QueryOperation {
    path: String,
    params: QueryPairs,
}

impl QueryOperation {
    pub fn new<T: Into<String>>(path: T) -> Self {
        Self {
            path: path.into(),
            params: QueryPairs::new(),
        }
    }

    pub fn param<V: Into<String>>(mut self, name: &'static str, value: V) -> Self {
        self.params.push((name, value.into()));
        self
    }

    pub fn params(mut self, pairs: QueryPairs) -> Self {
        self.params.extend(pairs);
        self
    }

    /// Comma-joined `fields` selector. Empty means the server default set.
    pub fn fields(self, fields: &[&str]) -> Self {
        if fields.is_empty() {
            self
        } else {
            self.param("fields", fields.join(","))
        }
    }

    fn url(
        &self,
        client: &impl RequestRunner,
        pagination: Pagination,
    ) -> Result<Url> {
        let mut url = client.make_url(&self.path)?;
        for (name, value) in &self.params {
            url.query_pairs_mut().append_pair(name, value);
        }
        url.query_pairs_mut()
            .append_pair("page", &pagination.page.to_string())
            .append_pair("perPage", &pagination.per_page.to_string());
        Ok(url)
    }
}

/// Fetch a single page of a list endpoint.
///
/// Issues exactly one request. On success the rows come back in server
/// order together with the latest final-page number: the server's reported
/// total page count when the response is paginated, the caller's
/// `final_page` otherwise. A rejected call surfaces as [`crate::Error::Api`]
/// carrying the server's message; there is no retry.
pub async fn fetch_page<C, T>(
    client: &C,
    operation: &QueryOperation,
    pagination: Pagination,
    final_page: u32,
) -> Result<FetchedPage<T>>
where
    C: RequestRunner,
    T: DeserializeOwned + Send,
{
    let url = operation.url(client, pagination)?;
    let response: Response<Vec<T>> = client.run(Method::GET, url).await?;

    // Pagination data can change while a collection runs, so the final
    // page is taken from every response rather than trusted once.
    let final_page = response
        .page_meta()
        .map(|meta| meta.total_pages)
        .unwrap_or(final_page);
    let rows = response.into_inner()?;

    Ok(FetchedPage { rows, final_page })
}

/// Flatten every page of a list endpoint into one vector.
///
/// Pages are fetched strictly in order starting at page 1, one request in
/// flight at a time, until the page number passes the most recently
/// reported final page. Rows keep page order, then server order within
/// each page. The first rejected page aborts the whole collection: the
/// error propagates as-is and the rows gathered so far are discarded.
pub async fn fetch_all<C, T>(
    client: &C,
    operation: &QueryOperation,
    per_page: u32,
) -> Result<Vec<T>>
where
    C: RequestRunner,
    T: DeserializeOwned + Send,
{
    let mut page = 1;
    let mut final_page = 1;
    let mut rows = Vec::new();

    while page <= final_page {
        let fetched: FetchedPage<T> = fetch_page(
            client,
            operation,
            Pagination::new(page, per_page),
            final_page,
        )
        .await?;

        rows.extend(fetched.rows);
        final_page = fetched.final_page;
        page += 1;
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Credentials;
    use crate::Client;

    fn client() -> Client {
        Client::builder()
            .base_url("http://localhost:1080")
            .unwrap()
            .credentials(Credentials::ApiKey("unit-test-key".to_owned()))
            .build()
            .unwrap()
    }

    #[test]
    fn pagination_cursor_is_appended_after_operation_params() {
        let operation = QueryOperation::new("/v3/contacts")
            .param("query[email]", "unit@example.com")
            .fields(&["contactId", "email"]);
        let url = operation
            .url(&client(), Pagination::new(3, 25))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:1080/v3/contacts?\
             query%5Bemail%5D=unit%40example.com\
             &fields=contactId%2Cemail&page=3&perPage=25"
        );
    }

    #[test]
    fn empty_fields_selector_is_omitted() {
        let operation = QueryOperation::new("/v3/tags").fields(&[]);
        let url = operation.url(&client(), Pagination::default()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:1080/v3/tags?page=1&perPage=10"
        );
    }
}
