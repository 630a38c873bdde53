mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_link_generated_name() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/links")
        .json(&json!({ "original_url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    let short_name = json["short_name"].as_str().unwrap();
    assert_eq!(short_name.len(), 8);
    assert_eq!(json["short_url"], format!("{}/{}", common::BASE_PATH, short_name));
    assert_eq!(json["original_url"], "https://example.com");
    assert_eq!(json["id"], 1);
}

#[tokio::test]
async fn test_create_link_empty_short_name_is_generated() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/links")
        .json(&json!({ "original_url": "https://example.com", "short_name": "" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["short_name"].as_str().unwrap().len(), 8);
}

#[tokio::test]
async fn test_create_link_explicit_name_conflict() {
    let server = common::create_test_server(common::create_test_state());
    let body = json!({ "original_url": "https://example.com", "short_name": "docs" });

    server
        .post("/links")
        .json(&body)
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.post("/links").json(&body).await;

    response.assert_status(StatusCode::CONFLICT);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_create_link_missing_url() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/links")
        .json(&json!({ "short_name": "docs" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_link_invalid_short_name() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/links")
        .json(&json!({ "original_url": "https://example.com", "short_name": "links" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_link_rejects_unredirectable_url() {
    let server = common::create_test_server(common::create_test_state());

    for url in ["not a url", "https://example.com/a\nb"] {
        let response = server
            .post("/links")
            .json(&json!({ "original_url": url, "short_name": "ctrl" }))
            .await;

        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }

    server.get("/ctrl").await.assert_status_not_found();
}

#[tokio::test]
async fn test_create_link_malformed_json() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.post("/links").text("{not json").await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_list_links_default_range() {
    let state = common::create_test_state();
    common::seed_links(&state.link_service, 3).await;
    let server = common::create_test_server(state);

    let response = server.get("/links").await;

    response.assert_status_ok();
    assert_eq!(response.header("content-range"), "links 1-10/3");
    let json = response.json::<Value>();
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_links_second_page() {
    let state = common::create_test_state();
    common::seed_links(&state.link_service, 25).await;
    let server = common::create_test_server(state);

    let response = server
        .get("/links")
        .add_query_param("range", "[11,20]")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("content-range"), "links 11-20/25");

    let json = response.json::<Value>();
    let links = json.as_array().unwrap();
    assert_eq!(links.len(), 10);
    assert_eq!(links[0]["short_name"], "link11");
    assert_eq!(links[9]["short_name"], "link20");
}

#[tokio::test]
async fn test_list_links_invalid_ranges() {
    let server = common::create_test_server(common::create_test_state());

    for range in ["[0,10]", "[-1,5]", "[10,5]", "[1]", "abc"] {
        let response = server.get("/links").add_query_param("range", range).await;
        response.assert_status_bad_request();
    }
}

#[tokio::test]
async fn test_get_link() {
    let state = common::create_test_state();
    let link = common::seed_links(&state.link_service, 1).await.remove(0);
    let server = common::create_test_server(state);

    let response = server.get(&format!("/links/{}", link.id)).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["short_name"], "link1");
    assert_eq!(json["short_url"], format!("{}/link1", common::BASE_PATH));
}

#[tokio::test]
async fn test_get_link_not_found() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/links/999").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_non_integer_id_is_json_error() {
    let server = common::create_test_server(common::create_test_state());

    let responses = [
        server.get("/links/abc").await,
        server
            .put("/links/abc")
            .json(&json!({ "original_url": "https://new.com", "short_name": "fresh" }))
            .await,
        server.delete("/links/abc").await,
    ];

    for response in responses {
        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "validation_error");
        assert!(json["error"]["details"]["reason"].is_string());
    }
}

#[tokio::test]
async fn test_update_link() {
    let state = common::create_test_state();
    let link = common::seed_links(&state.link_service, 1).await.remove(0);
    let server = common::create_test_server(state);

    let response = server
        .put(&format!("/links/{}", link.id))
        .json(&json!({ "original_url": "https://new.com", "short_name": "fresh" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["original_url"], "https://new.com");
    assert_eq!(json["short_url"], format!("{}/fresh", common::BASE_PATH));
}

#[tokio::test]
async fn test_update_link_not_found() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .put("/links/999")
        .json(&json!({ "original_url": "x", "short_name": "y" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_update_link_requires_short_name() {
    let state = common::create_test_state();
    let link = common::seed_links(&state.link_service, 1).await.remove(0);
    let server = common::create_test_server(state);

    let response = server
        .put(&format!("/links/{}", link.id))
        .json(&json!({ "original_url": "https://new.com" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_delete_link() {
    let state = common::create_test_state();
    let link = common::seed_links(&state.link_service, 1).await.remove(0);
    let server = common::create_test_server(state);

    server
        .delete(&format!("/links/{}", link.id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // Second delete reports the missing row.
    server
        .delete(&format!("/links/{}", link.id))
        .await
        .assert_status_not_found();
}
