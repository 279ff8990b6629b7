#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test: panics are the assertion mechanism")]

mod common;

use campaign_client::CampaignService;
use campaign_types::{CampaignDraft, CampaignId, CampaignPatch, CampaignStatus, LinkedInProfile};
use common::{campaign_json, service_for};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_campaigns_empty_is_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/campaigns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let (service, notifier) = service_for(&server);
    let campaigns = service.list_campaigns().await.expect("empty list is valid");
    assert!(campaigns.is_empty());
    assert!(notifier.all().is_empty());
}

#[tokio::test]
async fn test_list_campaigns_unwraps_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/campaigns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [campaign_json("c1", "Alpha", "active"), campaign_json("c2", "Beta", "inactive")],
            "message": "Campaigns fetched"
        })))
        .mount(&server)
        .await;

    let (service, _) = service_for(&server);
    let campaigns = service.list_campaigns().await.expect("list succeeds");
    let names: Vec<_> = campaigns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "Beta"]);
    assert_eq!(campaigns[1].status, CampaignStatus::Inactive);
}

#[tokio::test]
async fn test_get_campaign_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/campaigns/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "error": "Campaign not found" })),
        )
        .mount(&server)
        .await;

    let (service, notifier) = service_for(&server);
    let err = service.get_campaign(&CampaignId::from("missing")).await.expect_err("404");
    assert!(err.is_not_found());
    assert_eq!(notifier.errors(), vec!["Campaign not found".to_string()]);
}

#[tokio::test]
async fn test_create_campaign_posts_all_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/campaigns"))
        .and(body_json(serde_json::json!({
            "name": "Alpha",
            "description": "Alpha description",
            "status": "active"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({ "data": campaign_json("c9", "Alpha", "active") })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (service, _) = service_for(&server);
    let draft = CampaignDraft::new("Alpha", "Alpha description", CampaignStatus::Active);
    let created = service.create_campaign(&draft).await.expect("create succeeds");
    assert_eq!(created.id, CampaignId::from("c9"));
}

#[tokio::test]
async fn test_update_campaign_sends_only_given_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/campaigns/c1"))
        .and(body_json(serde_json::json!({ "status": "inactive" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": campaign_json("c1", "Alpha", "inactive") })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (service, _) = service_for(&server);
    let updated = service
        .update_campaign(&CampaignId::from("c1"), &CampaignPatch::status(CampaignStatus::Inactive))
        .await
        .expect("update succeeds");
    assert_eq!(updated.status, CampaignStatus::Inactive);
    assert_eq!(updated.name, "Alpha");
}

#[tokio::test]
async fn test_delete_campaign_accepts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/campaigns/c1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (service, notifier) = service_for(&server);
    service.delete_campaign(&CampaignId::from("c1")).await.expect("delete succeeds");
    assert!(notifier.all().is_empty());
}

#[tokio::test]
async fn test_campaign_id_is_a_single_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/campaigns/a%2Fb"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (service, notifier) = service_for(&server);
    service.delete_campaign(&CampaignId::from("a/b")).await.expect("slash stays inside the id");
    assert!(notifier.all().is_empty());
}

#[tokio::test]
async fn test_generate_message_extracts_nested_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/personalized-message"))
        .and(body_json(serde_json::json!({
            "name": "Jane Doe",
            "job_title": "Engineer",
            "company": "Acme",
            "location": "Remote",
            "summary": ""
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": { "message": "Hi Jane..." } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (service, _) = service_for(&server);
    let profile = LinkedInProfile {
        name: "Jane Doe".to_string(),
        job_title: "Engineer".to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        summary: String::new(),
    };
    let message = service.generate_message(&profile).await.expect("generation succeeds");
    assert_eq!(message, "Hi Jane...");
}

#[tokio::test]
async fn test_generate_message_server_refusal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/personalized-message"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "message": "Not enough profile data"
        })))
        .mount(&server)
        .await;

    let (service, notifier) = service_for(&server);
    let profile = LinkedInProfile {
        name: "Jane Doe".to_string(),
        job_title: "Engineer".to_string(),
        ..Default::default()
    };
    let err = service.generate_message(&profile).await.expect_err("422");
    assert_eq!(err.status(), Some(422));
    assert_eq!(notifier.errors(), vec!["Not enough profile data".to_string()]);
}
