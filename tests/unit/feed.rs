use serde_json::json;
use story_relay::config::FeedConfig;
use story_relay::error::RelayError;
use story_relay::feed::FeedClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn feed_client(server: &MockServer) -> FeedClient {
    FeedClient::new(
        reqwest::Client::new(),
        &FeedConfig {
            base_url: server.uri(),
            story_count: 5,
        },
    )
}

#[tokio::test]
async fn test_top_story_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([9001, 9002, 9003])))
        .mount(&server)
        .await;

    let ids = feed_client(&server).top_story_ids().await.unwrap();
    assert_eq!(ids, vec![9001, 9002, 9003]);
}

#[tokio::test]
async fn test_top_story_ids_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = feed_client(&server).top_story_ids().await.unwrap_err();
    assert!(matches!(err, RelayError::ContentSource(_)));
}

#[tokio::test]
async fn test_top_story_ids_undecodable_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = feed_client(&server).top_story_ids().await.unwrap_err();
    assert!(matches!(err, RelayError::ContentSource(_)));
}

#[tokio::test]
async fn test_story_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/item/9001.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "by": "dhouston",
            "id": 9001,
            "score": 111,
            "time": 1175714200,
            "title": "My YC app: Dropbox",
            "type": "story",
            "url": "http://www.getdropbox.com/u/2/screencast.html"
        })))
        .mount(&server)
        .await;

    let story = feed_client(&server).story_detail(9001).await.unwrap();
    assert_eq!(story.title, "My YC app: Dropbox");
    assert_eq!(story.by, "dhouston");
    assert_eq!(story.score, 111);
    assert_eq!(story.url, "http://www.getdropbox.com/u/2/screencast.html");
}

#[tokio::test]
async fn test_story_detail_without_url_defaults_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/item/121003.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "by": "tel",
            "id": 121003,
            "score": 25,
            "time": 1210981217,
            "title": "Ask HN: The Arc Effect",
            "type": "story"
        })))
        .mount(&server)
        .await;

    let story = feed_client(&server).story_detail(121003).await.unwrap();
    assert_eq!(story.url, "");
}

#[tokio::test]
async fn test_story_detail_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/item/404404.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = feed_client(&server).story_detail(404404).await.unwrap_err();
    match err {
        RelayError::ContentSource(message) => assert!(message.contains("404404")),
        other => panic!("expected content source failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_base_url_trailing_slash_trimmed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topstories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1])))
        .mount(&server)
        .await;

    let client = FeedClient::new(
        reqwest::Client::new(),
        &FeedConfig {
            base_url: format!("{}/", server.uri()),
            story_count: 5,
        },
    );
    assert_eq!(client.top_story_ids().await.unwrap(), vec![1]);
}
