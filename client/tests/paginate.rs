//! Collection behavior of the paginated list endpoints, driven against a
//! mock server.

use getresponse_client::{
    campaigns,
    contacts,
    tags,
    Client,
    Credentials,
    Error,
    Pagination,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .base_url(server.uri())
        .unwrap()
        .credentials(Credentials::ApiKey("unit-test-key".to_owned()))
        .build()
        .unwrap()
}

fn tag_rows(names: &[&str]) -> serde_json::Value {
    json!(names
        .iter()
        .map(|name| json!({ "tagId": format!("id-{}", name), "name": name }))
        .collect::<Vec<_>>())
}

fn campaign_rows(range: std::ops::Range<u32>) -> serde_json::Value {
    json!(range
        .map(|n| json!({
            "campaignId": format!("C{}", n),
            "name": format!("campaign_{:02}", n),
        }))
        .collect::<Vec<_>>())
}

#[tokio::test]
async fn single_page_without_pagination_headers_is_collected_whole() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/tags"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(tag_rows(&["alpha", "beta"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let tags = tags::list(&client, None, None, &[], 10).await.unwrap();

    let names: Vec<&str> = tags.iter().map(|tag| tag.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "beta"]);
}

#[tokio::test]
async fn multi_page_collection_keeps_page_then_row_order() {
    let server = MockServer::start().await;

    for page in 1..=3u32 {
        let first = (page - 1) * 5 + 1;
        Mock::given(method("GET"))
            .and(path("/v3/campaigns"))
            .and(query_param("page", page.to_string()))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("TotalPages", "3")
                    .insert_header("TotalCount", "15")
                    .insert_header("CurrentPage", page.to_string().as_str())
                    .set_body_json(campaign_rows(first..first + 5)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server).await;
    let campaigns = campaigns::list(&client, None, None, &[], 5)
        .await
        .unwrap();

    assert_eq!(campaigns.len(), 15);
    let names: Vec<String> =
        campaigns.iter().map(|c| c.name.clone()).collect();
    let expected: Vec<String> =
        (1..=15).map(|n| format!("campaign_{:02}", n)).collect();
    assert_eq!(names, expected);

    // Exactly pages 1..=3 were requested, in order.
    let pages: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| {
            request
                .url
                .query_pairs()
                .find(|(name, _)| name == "page")
                .map(|(_, value)| value.into_owned())
                .unwrap()
        })
        .collect();
    assert_eq!(pages, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn final_page_is_reread_from_every_response() {
    let server = MockServer::start().await;

    // Page 1 knows of 2 pages; the data set grows while we collect and
    // pages 2 and 3 report 3. The loop must pick up the revision.
    let reported = [(1u32, "2"), (2, "3"), (3, "3")];
    for (page, total_pages) in reported {
        let first = (page - 1) * 5 + 1;
        Mock::given(method("GET"))
            .and(path("/v3/campaigns"))
            .and(query_param("page", page.to_string()))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("TotalPages", total_pages)
                    .set_body_json(campaign_rows(first..first + 5)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server).await;
    let campaigns = campaigns::list(&client, None, None, &[], 5)
        .await
        .unwrap();

    assert_eq!(campaigns.len(), 15);
    assert_eq!(campaigns[14].name, "campaign_15");
}

#[tokio::test]
async fn failing_page_aborts_the_collection_without_partial_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/campaigns"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("TotalPages", "3")
                .set_body_json(campaign_rows(1..6)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/campaigns"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "httpStatus": 429,
            "code": 1008,
            "message": "quota exceeded",
            "uuid": "3b4e8d9c-3c47-4d65-9a2f-0d6a1f2b7c1e",
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Page 3 must never be requested once page 2 fails.
    Mock::given(method("GET"))
        .and(path("/v3/campaigns"))
        .and(query_param("page", "3"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("TotalPages", "3")
                .set_body_json(campaign_rows(11..16)),
        )
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = campaigns::list(&client, None, None, &[], 5).await;

    match result {
        | Err(Error::Api(error)) => {
            assert_eq!(error.message(), "quota exceeded");
            assert_eq!(error.code(), Some(1008));
        }
        | other => panic!("expected an api error, got {:?}", other),
    }
}

#[tokio::test]
async fn single_page_fetch_is_idempotent_against_a_stable_data_set() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/contacts"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("TotalPages", "4")
                .set_body_json(json!([
                    { "contactId": "aUeUu", "email": "one@example.com" },
                    { "contactId": "aUeUv", "email": "two@example.com" },
                ])),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let pagination = Pagination::new(2, 10);

    let first =
        contacts::list_page(&client, None, None, &[], &[], pagination, 1)
            .await
            .unwrap();
    let second =
        contacts::list_page(&client, None, None, &[], &[], pagination, 1)
            .await
            .unwrap();

    assert_eq!(first.rows, second.rows);
    assert_eq!(first.final_page, 4);
    assert_eq!(second.final_page, 4);
}

#[tokio::test]
async fn page_size_is_forwarded_on_every_dispatch() {
    let server = MockServer::start().await;

    for page in 1..=2u32 {
        let first = (page - 1) * 5 + 1;
        Mock::given(method("GET"))
            .and(path("/v3/campaigns"))
            .and(query_param("page", page.to_string()))
            .and(query_param("perPage", "5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("TotalPages", "2")
                    .set_body_json(campaign_rows(first..first + 5)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server).await;
    let campaigns = campaigns::list(&client, None, None, &[], 5)
        .await
        .unwrap();
    assert_eq!(campaigns.len(), 10);

    for request in server.received_requests().await.unwrap() {
        let per_page = request
            .url
            .query_pairs()
            .find(|(name, _)| name == "perPage")
            .map(|(_, value)| value.into_owned());
        assert_eq!(per_page.as_deref(), Some("5"));
    }
}

#[tokio::test]
async fn operation_filters_reach_the_wire_once_per_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/contacts"))
        .and(query_param("query[email]", "unit@example.com"))
        .and(query_param("additionalFlags", "exactMatch"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([
                { "contactId": "aUeUu", "email": "unit@example.com" },
            ])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let query = getresponse_client::ContactsQuery {
        email: Some("unit@example.com".to_owned()),
        ..Default::default()
    };
    let contacts = contacts::list(
        &client,
        Some(query),
        None,
        &[],
        &[getresponse_client::ContactFlag::ExactMatch],
        10,
    )
    .await
    .unwrap();

    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].email, "unit@example.com");
}
