use getresponse_api_model::Account;
use http::Method;

use crate::client::RequestRunner;
use crate::{Response, Result};

/// Retrieve details of the account behind the active credentials.
pub async fn get(
    client: &impl RequestRunner,
    fields: &[&str],
) -> Result<Response<Account>> {
    let mut path = client.make_url("/v3/accounts")?;
    if !fields.is_empty() {
        path.query_pairs_mut().append_pair("fields", &fields.join(","));
    }

    client.run(Method::GET, path).await
}

/// Return true if the service can be contacted and queried with the
/// configured credentials.
pub async fn ping(client: &impl RequestRunner) -> Result<bool> {
    let path = client.make_url("/v3/accounts")?;
    let response: Response<serde_json::Value> =
        client.run(Method::GET, path).await?;

    Ok(response.is_ok())
}
