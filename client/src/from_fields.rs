use getresponse_api_model::{FromField, FromFieldId, FromFieldsQuery};
use http::Method;

use crate::client::RequestRunner;
use crate::paginate::{self, QueryOperation};
use crate::{Response, Result};

/// Retrieve every verified sender address matching the query, flattening
/// the paginated response.
pub async fn list(
    client: &impl RequestRunner,
    query: Option<FromFieldsQuery>,
    fields: &[&str],
    per_page: u32,
) -> Result<Vec<FromField>> {
    let mut operation = QueryOperation::new("/v3/from-fields").fields(fields);
    if let Some(query) = query {
        operation = operation.params(query.pairs());
    }

    paginate::fetch_all(client, &operation, per_page).await
}

/// Retrieve a from field by id.
pub async fn get(
    client: &impl RequestRunner,
    from_field_id: &FromFieldId,
) -> Result<Response<FromField>> {
    let path = format!("/v3/from-fields/{}", from_field_id);
    let path = client.make_url(&path)?;

    client.run(Method::GET, path).await
}
