use getresponse_api_model::{
    NewNewsletter,
    Newsletter,
    NewsletterId,
    NewsletterStatistics,
    NewslettersQuery,
};
use http::Method;

use crate::client::RequestRunner;
use crate::paginate::{self, QueryOperation};
use crate::{Response, Result};

/// Retrieve every newsletter matching the query, flattening the paginated
/// response.
pub async fn list(
    client: &impl RequestRunner,
    query: Option<NewslettersQuery>,
    fields: &[&str],
    per_page: u32,
) -> Result<Vec<Newsletter>> {
    let mut operation = QueryOperation::new("/v3/newsletters").fields(fields);
    if let Some(query) = query {
        operation = operation.params(query.pairs());
    }

    paginate::fetch_all(client, &operation, per_page).await
}

/// Retrieve a newsletter by id.
pub async fn get(
    client: &impl RequestRunner,
    newsletter_id: &NewsletterId,
) -> Result<Response<Newsletter>> {
    let path = format!("/v3/newsletters/{}", newsletter_id);
    let path = client.make_url(&path)?;

    client.run(Method::GET, path).await
}

/// Create a newsletter; depending on `send_on` it is sent right away or
/// scheduled.
pub async fn create(
    client: &impl RequestRunner,
    new_newsletter: NewNewsletter,
) -> Result<Response<Newsletter>> {
    let path = client.make_url("/v3/newsletters")?;

    client
        .run_with_body(Method::POST, path, new_newsletter)
        .await
}

/// Permanently delete a newsletter.
pub async fn delete(
    client: &impl RequestRunner,
    newsletter_id: &NewsletterId,
) -> Result<Response<()>> {
    let path = format!("/v3/newsletters/{}", newsletter_id);
    let path = client.make_url(&path)?;

    client.run(Method::DELETE, path).await
}

/// Retrieve delivery statistics for a newsletter, one bucket per reporting
/// interval.
pub async fn statistics(
    client: &impl RequestRunner,
    newsletter_id: &NewsletterId,
    fields: &[&str],
) -> Result<Response<Vec<NewsletterStatistics>>> {
    let path = format!("/v3/newsletters/{}/statistics", newsletter_id);
    let mut path = client.make_url(&path)?;
    if !fields.is_empty() {
        path.query_pairs_mut().append_pair("fields", &fields.join(","));
    }

    client.run(Method::GET, path).await
}
