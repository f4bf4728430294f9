use getresponse_api_model::{
    CustomField,
    CustomFieldId,
    CustomFieldsQuery,
    CustomFieldsSort,
};
use http::Method;

use crate::client::RequestRunner;
use crate::paginate::{self, QueryOperation};
use crate::{Response, Result};

/// Retrieve every custom field matching the query, flattening the
/// paginated response.
pub async fn list(
    client: &impl RequestRunner,
    query: Option<CustomFieldsQuery>,
    sort: Option<CustomFieldsSort>,
    fields: &[&str],
    per_page: u32,
) -> Result<Vec<CustomField>> {
    let mut operation = QueryOperation::new("/v3/custom-fields").fields(fields);
    if let Some(query) = query {
        operation = operation.params(query.pairs());
    }
    if let Some(sort) = sort {
        operation = operation.params(sort.pairs());
    }

    paginate::fetch_all(client, &operation, per_page).await
}

/// Retrieve a custom field by id.
pub async fn get(
    client: &impl RequestRunner,
    custom_field_id: &CustomFieldId,
    fields: &[&str],
) -> Result<Response<CustomField>> {
    let path = format!("/v3/custom-fields/{}", custom_field_id);
    let mut path = client.make_url(&path)?;
    if !fields.is_empty() {
        path.query_pairs_mut().append_pair("fields", &fields.join(","));
    }

    client.run(Method::GET, path).await
}
