//! Integration tests for the bridges controller
//!
//! These run each controller method against a mocked ARI server and verify
//! the request path, forwarded query parameters, and error mapping.

use ari_api::{ApiError, AriClient, AriConfig, CreateBridgeParams, PlayParams, RecordParams};
use mockito::Matcher;
use rstest::rstest;

fn client_for(server: &mockito::Server) -> AriClient {
    AriClient::new(AriConfig::new(server.url(), "user", "pass"))
}

const BRIDGE_JSON: &str = r#"{
    "id": "b1",
    "name": "conference",
    "technology": "simple_bridge",
    "bridge_type": "mixing",
    "bridge_class": "stasis",
    "creator": "Stasis",
    "channels": ["c1", "c2"]
}"#;

#[test]
fn get_decodes_bridge_fields() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/bridges/b1")
        .match_query(Matcher::UrlEncoded("api_key".into(), "user:pass".into()))
        .with_status(200)
        .with_body(BRIDGE_JSON)
        .create();

    let client = client_for(&server);
    let bridge = client.bridges().get("b1").unwrap();

    assert_eq!(bridge.id, "b1");
    assert_eq!(bridge.name, "conference");
    assert_eq!(bridge.technology, "simple_bridge");
    assert_eq!(bridge.bridge_type, "mixing");
    assert_eq!(bridge.bridge_class, "stasis");
    assert_eq!(bridge.creator, "Stasis");
    assert_eq!(bridge.channels, vec!["c1", "c2"]);
    mock.assert();
}

#[test]
fn list_decodes_all_bridges() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/bridges")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(format!("[{}]", BRIDGE_JSON))
        .create();

    let client = client_for(&server);
    let bridges = client.bridges().list().unwrap();

    assert_eq!(bridges.len(), 1);
    assert_eq!(bridges[0].id, "b1");
}

#[test]
fn create_forwards_params() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/bridges")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".into(), "mixing".into()),
            Matcher::UrlEncoded("name".into(), "conference".into()),
        ]))
        .with_status(200)
        .with_body(BRIDGE_JSON)
        .create();

    let client = client_for(&server);
    let params = CreateBridgeParams {
        bridge_type: Some("mixing".to_string()),
        name: Some("conference".to_string()),
        ..Default::default()
    };
    let bridge = client.bridges().create(&params).unwrap();

    assert_eq!(bridge.id, "b1");
    mock.assert();
}

#[test]
fn destroy_issues_exactly_one_delete() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/bridges/b1")
        .match_query(Matcher::Any)
        .with_status(204)
        .expect(1)
        .create();

    let client = client_for(&server);
    client.bridges().destroy("b1").unwrap();
    mock.assert();
}

#[test]
fn destroy_missing_bridge_is_not_found() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/bridges/gone")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"message":"Bridge not found"}"#)
        .expect(1)
        .create();

    let client = client_for(&server);
    let err = client.bridges().destroy("gone").unwrap_err();

    match err {
        ApiError::NotFound(msg) => assert_eq!(msg, "Bridge not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    // Exactly one request: no retry on failure
    mock.assert();
}

#[test]
fn add_channel_forwards_channel_and_role() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/bridges/b1/addChannel")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("channel".into(), "c1,c2".into()),
            Matcher::UrlEncoded("role".into(), "announcer".into()),
        ]))
        .with_status(204)
        .create();

    let client = client_for(&server);
    client
        .bridges()
        .add_channel("b1", "c1,c2", Some("announcer"))
        .unwrap();
    mock.assert();
}

#[rstest]
#[case::bad_request(400, "Invalid bridge type")]
#[case::not_found(404, "Bridge not found")]
#[case::conflict(409, "Bridge not in Stasis application")]
#[case::unprocessable(422, "Bridge not in a Stasis application")]
fn error_statuses_map_to_typed_variants(#[case] status: usize, #[case] message: &str) {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("DELETE", "/bridges/b1")
        .match_query(Matcher::Any)
        .with_status(status)
        .with_body(format!(r#"{{"message":"{}"}}"#, message))
        .create();

    let client = client_for(&server);
    let err = client.bridges().destroy("b1").unwrap_err();

    match (status, err) {
        (400, ApiError::InvalidParameter(msg)) => assert_eq!(msg, message),
        (404, ApiError::NotFound(msg)) => assert_eq!(msg, message),
        (409, ApiError::Conflict(msg)) => assert_eq!(msg, message),
        (422, ApiError::UnprocessableEntity(msg)) => assert_eq!(msg, message),
        (status, other) => panic!("unexpected mapping for {}: {:?}", status, other),
    }
}

#[test]
fn add_channel_conflict_propagates() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/bridges/b1/addChannel")
        .match_query(Matcher::Any)
        .with_status(409)
        .with_body(r#"{"message":"Bridge not in Stasis application"}"#)
        .create();

    let client = client_for(&server);
    let err = client.bridges().add_channel("b1", "c1", None).unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));
}

#[test]
fn remove_channel_forwards_channel() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/bridges/b1/removeChannel")
        .match_query(Matcher::UrlEncoded("channel".into(), "c1".into()))
        .with_status(204)
        .create();

    let client = client_for(&server);
    client.bridges().remove_channel("b1", "c1").unwrap();
    mock.assert();
}

#[test]
fn music_on_hold_round_trip() {
    let mut server = mockito::Server::new();
    let start = server
        .mock("POST", "/bridges/b1/moh")
        .match_query(Matcher::UrlEncoded("mohClass".into(), "jazz".into()))
        .with_status(204)
        .create();
    let stop = server
        .mock("DELETE", "/bridges/b1/moh")
        .match_query(Matcher::Any)
        .with_status(204)
        .create();

    let client = client_for(&server);
    client
        .bridges()
        .start_music_on_hold("b1", Some("jazz"))
        .unwrap();
    client.bridges().stop_music_on_hold("b1").unwrap();

    start.assert();
    stop.assert();
}

#[test]
fn play_media_returns_playback() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/bridges/b1/play")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("media".into(), "sound:hello".into()),
            Matcher::UrlEncoded("api_key".into(), "user:pass".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"id": "p1", "media_uri": "sound:hello", "target_uri": "bridge:b1", "state": "queued"}"#,
        )
        .expect(1)
        .create();

    let client = client_for(&server);
    let playback = client
        .bridges()
        .play_media("b1", "sound:hello", &PlayParams::default())
        .unwrap();

    assert_eq!(playback.id, "p1");
    assert_eq!(playback.media_uri, "sound:hello");
    mock.assert();
}

#[test]
fn play_media_with_id_puts_id_in_path() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/bridges/b1/play/p1")
        .match_query(Matcher::UrlEncoded("media".into(), "sound:hello".into()))
        .with_status(200)
        .with_body(
            r#"{"id": "p1", "media_uri": "sound:hello", "target_uri": "bridge:b1", "state": "queued"}"#,
        )
        .create();

    let client = client_for(&server);
    let playback = client
        .bridges()
        .play_media_with_id("b1", "p1", "sound:hello", &PlayParams::default())
        .unwrap();

    assert_eq!(playback.id, "p1");
    mock.assert();
}

#[test]
fn record_forwards_options_and_returns_recording() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/bridges/b1/record")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("name".into(), "meeting".into()),
            Matcher::UrlEncoded("format".into(), "wav".into()),
            Matcher::UrlEncoded("maxDurationSeconds".into(), "600".into()),
            Matcher::UrlEncoded("beep".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"name": "meeting", "format": "wav", "state": "recording", "target_uri": "bridge:b1"}"#,
        )
        .create();

    let client = client_for(&server);
    let params = RecordParams {
        max_duration_seconds: Some(600),
        beep: Some(true),
        ..Default::default()
    };
    let recording = client.bridges().record("b1", "meeting", "wav", &params).unwrap();

    assert_eq!(recording.name, "meeting");
    assert_eq!(recording.state, "recording");
    mock.assert();
}

#[test]
fn record_invalid_parameter_propagates() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/bridges/b1/record")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"message":"Invalid format specified"}"#)
        .create();

    let client = client_for(&server);
    let err = client
        .bridges()
        .record("b1", "meeting", "bogus", &RecordParams::default())
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidParameter(_)));
}

#[test]
fn malformed_body_is_parse_error() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/bridges/b1")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("{truncated")
        .create();

    let client = client_for(&server);
    let err = client.bridges().get("b1").unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}
