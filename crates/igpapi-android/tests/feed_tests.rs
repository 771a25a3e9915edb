/*
[INPUT]:  Mock paginated HTTP responses
[OUTPUT]: Test results for feed pagination over HTTP
[POS]:    Integration tests - feeds
[UPDATE]: When feed endpoints or pagination change
*/

mod common;

use common::{setup_mock_server, test_client};
use futures_util::TryStreamExt;
use igpapi_android::{BlockedUser, Feed, IgpapiError, collect_all, into_stream};
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn blocked_page(user_ids: &[u64], next_max_id: Option<&str>) -> serde_json::Value {
    let blocked_list: Vec<serde_json::Value> = user_ids
        .iter()
        .map(|user_id| {
            serde_json::json!({
                "user_id": user_id,
                "username": format!("user{user_id}"),
                "full_name": "",
                "profile_pic_url": "",
                "block_at": 1_600_000_000,
            })
        })
        .collect();
    serde_json::json!({
        "blocked_list": blocked_list,
        "next_max_id": next_max_id,
        "page_size": 2,
        "status": "ok",
    })
}

async fn mount_blocked_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/users/blocked_list/"))
        .and(query_param_is_missing("max_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(blocked_page(&[1, 2], Some("QVFD1"))))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/blocked_list/"))
        .and(query_param("max_id", "QVFD1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(blocked_page(&[3], None)))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_blocked_users_collect_all() {
    let server = setup_mock_server().await;
    mount_blocked_pages(&server).await;

    let client = test_client(&server);
    let mut feed = client.blocked_users_feed();
    let users = assert_ok!(collect_all(&mut feed).await);

    let ids: Vec<u64> = users.iter().map(|user| user.user_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(!feed.is_more_available());

    let err = feed.fetch_page().await.unwrap_err();
    assert!(matches!(err, IgpapiError::FeedExhausted));
}

#[tokio::test]
async fn test_blocked_users_stream() {
    let server = setup_mock_server().await;
    mount_blocked_pages(&server).await;

    let client = test_client(&server);
    let pages: Vec<Vec<BlockedUser>> = assert_ok!(into_stream(client.blocked_users_feed()).try_collect().await);
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].len(), 2);
    assert_eq!(pages[1][0].username, "user3");
}

#[tokio::test]
async fn test_failed_page_surfaces_and_keeps_cursor() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/blocked_list/"))
        .and(query_param_is_missing("max_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(blocked_page(&[1], Some("NEXT"))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/blocked_list/"))
        .and(query_param("max_id", "NEXT"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "message": "Please wait a few minutes before you try again.",
            "status": "fail",
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut feed = client.blocked_users_feed();
    assert_ok!(feed.items_page().await);

    let err = feed.items_page().await.unwrap_err();
    assert!(err.is_rate_limited());
    assert_eq!(feed.cursor().max_id(), Some("NEXT"));
}

#[tokio::test]
async fn test_user_story_feed_over_http() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/feed/user/25025320/story/"))
        .and(query_param_is_missing("max_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "reel": {
                "id": 25025320,
                "items": [
                    { "id": "a", "media_type": 1 },
                    { "id": "b", "media_type": 2, "video_duration": 4.5 }
                ]
            },
            "status": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut feed = client.user_story_feed("25025320");
    let items = assert_ok!(collect_all(&mut feed).await);

    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(items[1].video_duration, Some(4.5));
}
