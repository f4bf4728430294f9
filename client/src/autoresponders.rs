use getresponse_api_model::{
    Autoresponder,
    AutoresponderId,
    AutorespondersQuery,
};
use http::Method;

use crate::client::RequestRunner;
use crate::paginate::{self, QueryOperation};
use crate::{Response, Result};

/// Retrieve every autoresponder matching the query, flattening the
/// paginated response.
pub async fn list(
    client: &impl RequestRunner,
    query: Option<AutorespondersQuery>,
    fields: &[&str],
    per_page: u32,
) -> Result<Vec<Autoresponder>> {
    let mut operation =
        QueryOperation::new("/v3/autoresponders").fields(fields);
    if let Some(query) = query {
        operation = operation.params(query.pairs());
    }

    paginate::fetch_all(client, &operation, per_page).await
}

/// Retrieve an autoresponder by id.
pub async fn get(
    client: &impl RequestRunner,
    autoresponder_id: &AutoresponderId,
) -> Result<Response<Autoresponder>> {
    let path = format!("/v3/autoresponders/{}", autoresponder_id);
    let path = client.make_url(&path)?;

    client.run(Method::GET, path).await
}
