use getresponse_api_model::{
    Contact,
    ContactFlag,
    ContactId,
    ContactsQuery,
    ContactsSort,
    FetchedPage,
    NewContact,
    Pagination,
    UpdateContact,
};
use http::Method;

use crate::client::RequestRunner;
use crate::paginate::{self, QueryOperation};
use crate::{Response, Result};

fn list_operation(
    query: Option<ContactsQuery>,
    sort: Option<ContactsSort>,
    fields: &[&str],
    flags: &[ContactFlag],
) -> QueryOperation {
    let mut operation = QueryOperation::new("/v3/contacts").fields(fields);
    if let Some(query) = query {
        operation = operation.params(query.pairs());
    }
    if let Some(sort) = sort {
        operation = operation.params(sort.pairs());
    }
    if !flags.is_empty() {
        let flags: Vec<&str> =
            flags.iter().map(ContactFlag::as_str).collect();
        operation = operation.param("additionalFlags", flags.join(","));
    }
    operation
}

/// Retrieve every contact matching the query, flattening the paginated
/// response.
pub async fn list(
    client: &impl RequestRunner,
    query: Option<ContactsQuery>,
    sort: Option<ContactsSort>,
    fields: &[&str],
    flags: &[ContactFlag],
    per_page: u32,
) -> Result<Vec<Contact>> {
    let operation = list_operation(query, sort, fields, flags);

    paginate::fetch_all(client, &operation, per_page).await
}

/// Retrieve one page of contacts matching the query.
///
/// `final_page` is the last page number a previous call reported (1 when
/// starting out); the returned page carries the freshest value to thread
/// into the next call.
pub async fn list_page(
    client: &impl RequestRunner,
    query: Option<ContactsQuery>,
    sort: Option<ContactsSort>,
    fields: &[&str],
    flags: &[ContactFlag],
    pagination: Pagination,
    final_page: u32,
) -> Result<FetchedPage<Contact>> {
    let operation = list_operation(query, sort, fields, flags);

    paginate::fetch_page(client, &operation, pagination, final_page).await
}

/// Retrieve a contact by id.
pub async fn get(
    client: &impl RequestRunner,
    contact_id: &ContactId,
    fields: &[&str],
) -> Result<Response<Contact>> {
    let path = format!("/v3/contacts/{}", contact_id);
    let mut path = client.make_url(&path)?;
    if !fields.is_empty() {
        path.query_pairs_mut().append_pair("fields", &fields.join(","));
    }

    client.run(Method::GET, path).await
}

/// Create a new contact, with optional tags and custom field values.
///
/// The server accepts the contact for asynchronous processing, so a
/// successful response carries no body.
pub async fn create(
    client: &impl RequestRunner,
    new_contact: NewContact,
) -> Result<Response<()>> {
    let path = client.make_url("/v3/contacts")?;

    client.run_with_body(Method::POST, path, new_contact).await
}

/// Update a contact by id; unset fields are left untouched.
pub async fn update(
    client: &impl RequestRunner,
    contact_id: &ContactId,
    update: UpdateContact,
) -> Result<Response<Contact>> {
    let path = format!("/v3/contacts/{}", contact_id);
    let path = client.make_url(&path)?;

    client.run_with_body(Method::POST, path, update).await
}
