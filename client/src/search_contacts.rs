use getresponse_api_model::{
    FetchedPage,
    NewSearchContact,
    Pagination,
    SearchContact,
    SearchContactId,
};
use http::Method;

use crate::client::RequestRunner;
use crate::paginate::{self, QueryOperation};
use crate::{Response, Result};

/// Retrieve every saved search (segment), flattening the paginated
/// response.
pub async fn list(
    client: &impl RequestRunner,
    fields: &[&str],
    per_page: u32,
) -> Result<Vec<SearchContact>> {
    let operation = QueryOperation::new("/v3/search-contacts").fields(fields);

    paginate::fetch_all(client, &operation, per_page).await
}

/// Retrieve one page of saved searches.
///
/// `final_page` is the last page number a previous call reported (1 when
/// starting out); the returned page carries the freshest value to thread
/// into the next call.
pub async fn list_page(
    client: &impl RequestRunner,
    fields: &[&str],
    pagination: Pagination,
    final_page: u32,
) -> Result<FetchedPage<SearchContact>> {
    let operation = QueryOperation::new("/v3/search-contacts").fields(fields);

    paginate::fetch_page(client, &operation, pagination, final_page).await
}

/// Retrieve a saved search by id.
pub async fn get(
    client: &impl RequestRunner,
    search_contact_id: &SearchContactId,
) -> Result<Response<SearchContact>> {
    let path = format!("/v3/search-contacts/{}", search_contact_id);
    let path = client.make_url(&path)?;

    client.run(Method::GET, path).await
}

/// Create a new saved search from a condition tree.
pub async fn create(
    client: &impl RequestRunner,
    new_search_contact: NewSearchContact,
) -> Result<Response<SearchContact>> {
    let path = client.make_url("/v3/search-contacts")?;

    client
        .run_with_body(Method::POST, path, new_search_contact)
        .await
}

/// Permanently delete a saved search.
pub async fn delete(
    client: &impl RequestRunner,
    search_contact_id: &SearchContactId,
) -> Result<Response<()>> {
    let path = format!("/v3/search-contacts/{}", search_contact_id);
    let path = client.make_url(&path)?;

    client.run(Method::DELETE, path).await
}
