//! End-to-end checks of the reqwest transport against a local wiremock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tgb_api::{BotClient, HttpTransport, Identity, UpdatesQuery};
use tgb_core::{
    domain::MessageRef,
    errors::Error,
    messaging::types::{InlineButton, InlineKeyboard},
};

const TOKEN: &str = "123:TEST";

fn client_for(server: &MockServer) -> BotClient<HttpTransport> {
    BotClient::with_timeout(
        Identity::with_base(&server.uri(), TOKEN),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn post_sends_json_body_with_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:TEST/sendMessage"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "chat_id": 77,
            "text": "hello",
            "reply_markup": {"inline_keyboard": [[{"text": "ok", "callback_data": "y"}]]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"ok":true,"result":{"message_id":1,"chat":{"id":77,"type":"private"},"date":0}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let kb = InlineKeyboard::new(vec![vec![InlineButton::callback("ok", "y")]]);
    let raw = client_for(&server)
        .send_message(77, "hello", Some(&kb))
        .await
        .unwrap();
    assert!(raw.text().contains("\"message_id\":1"));
}

#[tokio::test]
async fn rejection_with_http_400_is_remote_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:TEST/deleteMessage"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"ok":false,"error_code":400,"description":"Bad Request: message to delete not found"}"#,
        ))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .delete_message(&MessageRef::new(1, 2))
        .await
        .unwrap_err();
    match err {
        Error::RemoteRejected {
            error_code,
            description,
        } => {
            assert_eq!(error_code, Some(400));
            assert_eq!(
                description.as_deref(),
                Some("Bad Request: message to delete not found")
            );
        }
        other => panic!("expected RemoteRejected, got {other:?}"),
    }
}

#[tokio::test]
async fn get_file_uses_query_string_then_fetches_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bot123:TEST/getFile"))
        .and(query_param("file_id", "AgAC+/x y"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"ok":true,"result":{"file_id":"AgAC+/x y","file_path":"photos/file_1.jpg"}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/file/bot123:TEST/photos/file_1.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xd8, 0xff]))
        .expect(1)
        .mount(&server)
        .await;

    let bytes = client_for(&server)
        .download_bytes("AgAC+/x y")
        .await
        .unwrap();
    assert_eq!(bytes, vec![0xff, 0xd8, 0xff]);
}

#[tokio::test]
async fn missing_file_content_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/file/bot123:TEST/gone.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .download_file_path("gone.jpg")
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn empty_body_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:TEST/getMe"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = client_for(&server).get_me().await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn get_updates_decodes_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:TEST/getUpdates"))
        .and(body_json(json!({"offset": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"ok":true,"result":[{"update_id":5,"message":{"message_id":1,"chat":{"id":2,"type":"private"},"text":"/start"}}]}"#,
        ))
        .mount(&server)
        .await;

    let updates = client_for(&server)
        .get_updates(&UpdatesQuery {
            offset: Some(5),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(
        updates[0].message.as_ref().and_then(|m| m.text.as_deref()),
        Some("/start")
    );
}

#[tokio::test]
async fn unreachable_host_is_transport_error_without_token() {
    // Nothing listens on the discard port.
    let client = BotClient::with_timeout(
        Identity::with_base("http://127.0.0.1:9", TOKEN),
        Duration::from_secs(2),
    )
    .unwrap();
    let err = client.get_me().await.unwrap_err();
    assert!(err.is_transport());
    assert!(!err.to_string().contains(TOKEN));
}

#[tokio::test]
async fn slow_server_times_out_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:TEST/getMe"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"ok":true,"result":{"id":1,"is_bot":true,"first_name":"B"}}"#)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = BotClient::with_timeout(
        Identity::with_base(&server.uri(), TOKEN),
        Duration::from_millis(300),
    )
    .unwrap();
    let err = client.get_me().await.unwrap_err();
    assert!(err.is_transport());
    assert!(!err.to_string().contains(TOKEN));
}

#[tokio::test]
async fn long_poll_waits_past_the_base_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:TEST/getUpdates"))
        .and(body_json(json!({"timeout": 2})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"ok":true,"result":[]}"#)
                .set_delay(Duration::from_millis(800)),
        )
        .mount(&server)
        .await;

    let client = BotClient::with_timeout(
        Identity::with_base(&server.uri(), TOKEN),
        Duration::from_millis(300),
    )
    .unwrap();
    let updates = client
        .get_updates(&UpdatesQuery {
            timeout: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(updates.is_empty());
}
