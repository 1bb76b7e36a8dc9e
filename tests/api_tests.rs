/// Integration tests for the members fetch, served from a local socket.
use axum::http::StatusCode;
use axum::{routing::get, Router};

use roster::api::{fetch_members, FetchError};

const SAMPLE_PAYLOAD: &str = r#"[
  {
    "id": "1",
    "name": "Aaron Miles",
    "email": "aaron@mailinator.com",
    "role": "member"
  },
  {
    "id": "2",
    "name": "Aishwarya Naik",
    "email": "aishwarya@mailinator.com",
    "role": "member"
  },
  {
    "id": "3",
    "name": "Arvind Kumar",
    "email": "arvind@mailinator.com",
    "role": "admin"
  }
]"#;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });
    format!("http://{}/members.json", addr)
}

#[tokio::test]
async fn test_fetch_members_decodes_the_payload() {
    let app = Router::new().route("/members.json", get(|| async { SAMPLE_PAYLOAD }));
    let url = serve(app).await;

    let client = reqwest::Client::new();
    let members = fetch_members(&client, &url).await.expect("fetch members");

    assert_eq!(members.len(), 3);
    assert_eq!(members[0].id, "1");
    assert_eq!(members[0].name, "Aaron Miles");
    assert_eq!(members[2].role, "admin");
}

#[tokio::test]
async fn test_fetch_members_reports_non_2xx_status() {
    let app = Router::new().route(
        "/members.json",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let url = serve(app).await;

    let client = reqwest::Client::new();
    match fetch_members(&client, &url).await {
        Err(FetchError::Status { status }) => assert_eq!(status, 500),
        other => panic!("expected status error, got {:?}", other.map(|m| m.len())),
    }
}

#[tokio::test]
async fn test_fetch_members_reports_malformed_payload() {
    let app = Router::new().route("/members.json", get(|| async { "not json at all" }));
    let url = serve(app).await;

    let client = reqwest::Client::new();
    match fetch_members(&client, &url).await {
        Err(FetchError::Decode(_)) => {}
        other => panic!("expected decode error, got {:?}", other.map(|m| m.len())),
    }
}

#[tokio::test]
async fn test_fetch_members_accepts_an_empty_directory() {
    let app = Router::new().route("/members.json", get(|| async { "[]" }));
    let url = serve(app).await;

    let client = reqwest::Client::new();
    let members = fetch_members(&client, &url).await.expect("fetch members");
    assert!(members.is_empty());
}
