use getresponse_api_model::{NewTag, Tag, TagId, TagsQuery, TagsSort};
use http::Method;

use crate::client::RequestRunner;
use crate::paginate::{self, QueryOperation};
use crate::{Response, Result};

/// Retrieve every tag matching the query, flattening the paginated
/// response.
pub async fn list(
    client: &impl RequestRunner,
    query: Option<TagsQuery>,
    sort: Option<TagsSort>,
    fields: &[&str],
    per_page: u32,
) -> Result<Vec<Tag>> {
    let mut operation = QueryOperation::new("/v3/tags").fields(fields);
    if let Some(query) = query {
        operation = operation.params(query.pairs());
    }
    if let Some(sort) = sort {
        operation = operation.params(sort.pairs());
    }

    paginate::fetch_all(client, &operation, per_page).await
}

/// Retrieve a tag by id.
pub async fn get(
    client: &impl RequestRunner,
    tag_id: &TagId,
    fields: &[&str],
) -> Result<Response<Tag>> {
    let path = format!("/v3/tags/{}", tag_id);
    let mut path = client.make_url(&path)?;
    if !fields.is_empty() {
        path.query_pairs_mut().append_pair("fields", &fields.join(","));
    }

    client.run(Method::GET, path).await
}

/// Create a new tag.
pub async fn create(
    client: &impl RequestRunner,
    new_tag: NewTag,
) -> Result<Response<Tag>> {
    let path = client.make_url("/v3/tags")?;

    client.run_with_body(Method::POST, path, new_tag).await
}

/// Permanently delete a tag.
pub async fn delete(
    client: &impl RequestRunner,
    tag_id: &TagId,
) -> Result<Response<()>> {
    let path = format!("/v3/tags/{}", tag_id);
    let path = client.make_url(&path)?;

    client.run(Method::DELETE, path).await
}
