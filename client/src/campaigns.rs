use getresponse_api_model::{
    Campaign,
    CampaignId,
    CampaignOptinTypes,
    CampaignsQuery,
    CampaignsSort,
    NewCampaign,
};
use http::Method;

use crate::client::RequestRunner;
use crate::paginate::{self, QueryOperation};
use crate::{Response, Result};

/// Retrieve every campaign, flattening the paginated response.
pub async fn list(
    client: &impl RequestRunner,
    query: Option<CampaignsQuery>,
    sort: Option<CampaignsSort>,
    fields: &[&str],
    per_page: u32,
) -> Result<Vec<Campaign>> {
    let mut operation = QueryOperation::new("/v3/campaigns").fields(fields);
    if let Some(query) = query {
        operation = operation.params(query.pairs());
    }
    if let Some(sort) = sort {
        operation = operation.params(sort.pairs());
    }

    paginate::fetch_all(client, &operation, per_page).await
}

/// Retrieve a campaign by id.
pub async fn get(
    client: &impl RequestRunner,
    campaign_id: &CampaignId,
) -> Result<Response<Campaign>> {
    let path = format!("/v3/campaigns/{}", campaign_id);
    let path = client.make_url(&path)?;

    client.run(Method::GET, path).await
}

/// Create a new campaign.
///
/// When the request doesn't pick opt-in types, every channel falls back to
/// `single`; the server default of `double` everywhere breaks unattended
/// imports.
pub async fn create(
    client: &impl RequestRunner,
    mut new_campaign: NewCampaign,
) -> Result<Response<Campaign>> {
    if new_campaign.optin_types.is_none() {
        new_campaign.optin_types = Some(CampaignOptinTypes::default());
    }

    let path = client.make_url("/v3/campaigns")?;
    client.run_with_body(Method::POST, path, new_campaign).await
}
