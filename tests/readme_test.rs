//! README lookup integration tests using wiremock.

use devfolio::github::GitHubClient;
use devfolio::readme::{fetch_readme, ReadmeError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn contents_json(encoded: &str) -> serde_json::Value {
    json!({
        "name": "README.md",
        "encoding": "base64",
        "content": encoded
    })
}

fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::with_base_url(server.uri())
}

#[tokio::test]
async fn test_first_candidate_wins() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/contents/README.md"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contents_json("IyBIZWxsbw==")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let text = fetch_readme(&client, "octocat/hello-world").await.unwrap();
    assert_eq!(text, "# Hello");
}

#[tokio::test]
async fn test_falls_back_to_lowercase_candidate() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/contents/README.md"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/contents/readme.md"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contents_json("IyBIZWxsbw==")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let text = fetch_readme(&client, "octocat/hello-world").await.unwrap();
    assert_eq!(text, "# Hello");

    // Exactly the two candidates before the hit were tried.
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_content_with_line_breaks_decodes() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/contents/README.md"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contents_json("IyBIZ\nWxsbw\n==\n")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let text = fetch_readme(&client, "octocat/hello-world").await.unwrap();
    assert_eq!(text, "# Hello");
}

#[tokio::test]
async fn test_payload_without_content_moves_to_next_candidate() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/contents/README.md"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"encoding": "none"})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/contents/readme.md"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contents_json("IyBIZWxsbw==")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let text = fetch_readme(&client, "octocat/hello-world").await.unwrap();
    assert_eq!(text, "# Hello");
}

#[tokio::test]
async fn test_exhausted_candidates_report_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = fetch_readme(&client, "octocat/empty").await.unwrap_err();
    assert!(matches!(err, ReadmeError::NotFound));

    // All four case variants were consulted, in order.
    let requests = mock_server.received_requests().await.unwrap();
    let paths: Vec<String> = requests.iter().map(|r| r.url.path().to_string()).collect();
    assert_eq!(
        paths,
        vec![
            "/repos/octocat/empty/contents/README.md",
            "/repos/octocat/empty/contents/readme.md",
            "/repos/octocat/empty/contents/Readme.md",
            "/repos/octocat/empty/contents/README.MD",
        ]
    );
}

#[tokio::test]
async fn test_undecodable_candidate_falls_through_to_next() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/contents/README.md"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contents_json("not base64!!!")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/contents/readme.md"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contents_json("IyBIZWxsbw==")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let text = fetch_readme(&client, "octocat/hello-world").await.unwrap();
    assert_eq!(text, "# Hello");
}

#[tokio::test]
async fn test_decode_failure_reported_when_no_candidate_decodes() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/contents/README.md"))
        .respond_with(ResponseTemplate::new(200).set_body_json(contents_json("not base64!!!")))
        .mount(&mock_server)
        .await;
    // Remaining candidates are unmatched and answer 404.

    let client = client_for(&mock_server);
    let err = fetch_readme(&client, "octocat/hello-world").await.unwrap_err();
    assert!(matches!(err, ReadmeError::Decode(_)));

    // Every candidate was still consulted before giving up.
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 4);
}
