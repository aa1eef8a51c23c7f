#![allow(clippy::unwrap_used)]
// Integration tests for the sub-clients using wiremock.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tollgate_api::models::{
    ActionRequest, ActionTrigger, CreateLinkRequest, LinkStatus, ListLinksParams, ResourceContent,
    TollRequest, TollRequirement,
};
use tollgate_api::{AccountApi, Configuration, Error, LinksApi, NetworksApi};

// ── Helpers ─────────────────────────────────────────────────────────

fn configuration(server: &MockServer, token: &str) -> Arc<Configuration> {
    Arc::new(
        Configuration::new(
            format!("{}/v1", server.uri()),
            SecretString::from(token.to_owned()),
        )
        .unwrap(),
    )
}

async fn setup() -> (MockServer, LinksApi) {
    let server = MockServer::start().await;
    let links = LinksApi::new(reqwest::Client::new(), configuration(&server, "t1"));
    (server, links)
}

// ── Link tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_link_sends_bearer_token_and_body() {
    let (server, links) = setup().await;
    let link_id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path("/v1/links"))
        .and(header("authorization", "Bearer t1"))
        .and(body_json(json!({ "name": "Guide", "alias": "guide" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "uuid": link_id,
            "name": "Guide",
            "alias": "guide",
            "status": "draft"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut req = CreateLinkRequest::new("Guide");
    req.alias = Some("guide".into());
    let link = links.create_link(&req).await.unwrap();

    assert_eq!(link.uuid, Some(link_id));
    assert_eq!(link.status.as_deref(), Some("draft"));
    assert_eq!(link.parsed_status(), Some(LinkStatus::Draft));
}

#[tokio::test]
async fn test_get_link_by_alias() {
    let (server, links) = setup().await;
    let link_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/v1/links/guide"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": link_id,
            "name": "Guide",
            "url": "https://tollgate.link/guide"
        })))
        .mount(&server)
        .await;

    let link = links.get_link("guide").await.unwrap();

    assert_eq!(link.uuid, Some(link_id));
    assert_eq!(
        link.url.as_ref().map(url::Url::as_str),
        Some("https://tollgate.link/guide")
    );
}

#[tokio::test]
async fn test_list_all_links_walks_pages() {
    let (server, links) = setup().await;

    let page = |ids: &[Uuid], n: u32| {
        json!({
            "data": ids.iter().map(|id| json!({ "uuid": id, "name": "x" })).collect::<Vec<_>>(),
            "page": n,
            "limit": 2,
            "total": 3
        })
    };
    let first = [Uuid::new_v4(), Uuid::new_v4()];
    let second = [Uuid::new_v4()];

    Mock::given(method("GET"))
        .and(path("/v1/links"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "2"))
        .and(query_param("status", "active"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&first, 1)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/links"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&second, 2)))
        .expect(1)
        .mount(&server)
        .await;

    let all = links
        .list_all_links(2, Some(LinkStatus::Active))
        .await
        .unwrap();

    assert_eq!(all.len(), 3);
    assert_eq!(all[2].uuid, Some(second[0]));
}

#[tokio::test]
async fn test_list_all_links_with_zero_limit_requests_at_least_one() {
    let (server, links) = setup().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/v1/links"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [{ "uuid": id, "name": "x" }] })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/links"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let all = links.list_all_links(0, None).await.unwrap();

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].uuid, Some(id));
}

#[tokio::test]
async fn test_list_links_without_params() {
    let (server, links) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/links"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let page = links.list_links(&ListLinksParams::default()).await.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.total, 0);
}

// ── Sub-resource tests ──────────────────────────────────────────────

#[tokio::test]
async fn test_create_toll_resource_and_action_paths() {
    let (server, links) = setup().await;
    let link_id = Uuid::new_v4();

    let toll = TollRequest::single(TollRequirement {
        asset_network: "base".into(),
        asset_address: "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913".into(),
        amount: "1000000".into(),
        destination_address: "0xabc".into(),
    });

    Mock::given(method("POST"))
        .and(path(format!("/v1/links/{link_id}/tolls")))
        .and(body_json(json!({
            "requirements": [{
                "assetNetwork": "base",
                "assetAddress": "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913",
                "amount": "1000000",
                "destinationAddress": "0xabc"
            }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "uuid": Uuid::new_v4(),
            "linkUuid": link_id,
            "requirements": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/v1/links/{link_id}/resources")))
        .and(body_json(json!({
            "type": "file",
            "data": { "url": "https://cdn.example.test/book.pdf" }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "type": "file",
            "data": { "url": "https://cdn.example.test/book.pdf" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/v1/links/{link_id}/actions")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "type": "callback",
            "trigger": "payment_success",
            "data": { "url": "https://hooks.example.test/", "method": "POST" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = links.create_toll(&link_id, &toll).await.unwrap();
    assert_eq!(created.link_uuid, Some(link_id));

    let resource = links
        .create_resource(
            &link_id,
            &ResourceContent::file("https://cdn.example.test/book.pdf".parse().unwrap()),
        )
        .await
        .unwrap();
    assert_eq!(
        resource.content(),
        Some(ResourceContent::file("https://cdn.example.test/book.pdf".parse().unwrap()))
    );

    let action = links
        .create_action(
            &link_id,
            &ActionRequest::callback(
                ActionTrigger::PaymentSuccess,
                "https://hooks.example.test/".parse().unwrap(),
            ),
        )
        .await
        .unwrap();
    assert_eq!(
        action.request().map(|a| a.trigger()),
        Some(ActionTrigger::PaymentSuccess)
    );
}

#[tokio::test]
async fn test_delete_action() {
    let (server, links) = setup().await;
    let link_id = Uuid::new_v4();
    let action_id = Uuid::new_v4();

    Mock::given(method("DELETE"))
        .and(path(format!("/v1/links/{link_id}/actions/{action_id}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    links.delete_action(&link_id, &action_id).await.unwrap();
}

// ── Account / network tests ─────────────────────────────────────────

#[tokio::test]
async fn test_account_and_networks() {
    let server = MockServer::start().await;
    let config = configuration(&server, "t1");
    let account = AccountApi::new(reqwest::Client::new(), Arc::clone(&config));
    let networks = NetworksApi::new(reqwest::Client::new(), config);

    Mock::given(method("GET"))
        .and(path("/v1/account"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "email": "ops@example.test" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/networks/base/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "address": "0x8335", "symbol": "USDC", "decimals": 6 }
        ])))
        .mount(&server)
        .await;

    let me = account.get_account().await.unwrap();
    assert_eq!(me.email.as_deref(), Some("ops@example.test"));

    let assets = networks.list_network_assets("base").await.unwrap();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].symbol, "USDC");
    assert_eq!(assets[0].decimals, 6);
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_unauthorized() {
    let (server, links) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = links.get_link("guide").await;
    assert!(
        matches!(result, Err(Error::Unauthorized)),
        "expected Unauthorized, got: {result:?}"
    );
}

#[tokio::test]
async fn test_api_error_carries_status_and_message() {
    let (server, links) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/links/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Link not found",
            "code": "link_not_found"
        })))
        .mount(&server)
        .await;

    let err = links.get_link("missing").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.api_error_code(), Some("link_not_found"));
    match err {
        Error::Api { status, message, .. } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Link not found");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_plain_text_error_body() {
    let (server, links) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = links
        .create_link(&CreateLinkRequest::new("x"))
        .await
        .unwrap_err();

    match err {
        Error::Api { status, message, code } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
            assert_eq!(code, None);
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, links) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = links.get_link("guide").await;
    match result {
        Err(Error::Deserialization { body, .. }) => assert_eq!(body, "<html>oops</html>"),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
