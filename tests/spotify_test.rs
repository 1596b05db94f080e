use chartspot::Error;
use chartspot::config::Endpoints;
use chartspot::spotify::{self, Session};
use mockito::{Matcher, Server, ServerGuard};

fn endpoints(server: &ServerGuard) -> Endpoints {
    Endpoints {
        api_url: server.url(),
        token_url: format!("{}/spotify_token.txt", server.url()),
    }
}

async fn logged_in(server: &ServerGuard) -> Session {
    let mut session = Session::new();
    session
        .login(&endpoints(server), Some("test-token".to_string()))
        .await
        .unwrap();
    session
}

#[tokio::test]
async fn test_operations_require_login() {
    let mut server = Server::new_async().await;
    let any = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let session = Session::new();
    assert!(!session.is_logged_in());

    assert!(matches!(
        spotify::search_album(&session, "Graduation").await,
        Err(Error::NotLoggedIn)
    ));
    assert!(matches!(
        spotify::fetch_features(&session, "album").await,
        Err(Error::NotLoggedIn)
    ));

    any.assert_async().await;
}

#[tokio::test]
async fn test_login_fetches_workshop_token() {
    let mut server = Server::new_async().await;
    let token = server
        .mock("GET", "/spotify_token.txt")
        .with_status(200)
        .with_body("  workshop-token\n")
        .create_async()
        .await;
    let search = server
        .mock("GET", "/search")
        .match_header("authorization", "Bearer workshop-token")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"albums": {"items": []}}"#)
        .create_async()
        .await;

    let mut session = Session::new();
    session.login(&endpoints(&server), None).await.unwrap();
    assert!(session.is_logged_in());

    let matches = spotify::search_album(&session, "nothing").await.unwrap();
    assert!(matches.is_empty());

    token.assert_async().await;
    search.assert_async().await;
}

#[tokio::test]
async fn test_login_with_token_skips_token_endpoint() {
    let mut server = Server::new_async().await;
    let token = server
        .mock("GET", "/spotify_token.txt")
        .expect(0)
        .create_async()
        .await;

    let client = spotify::login(&endpoints(&server), Some("mine".to_string()))
        .await
        .unwrap();
    assert_eq!(client.api_url(), server.url());

    token.assert_async().await;
}

#[tokio::test]
async fn test_login_refused_needs_special_access() {
    for status in [403, 404] {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/spotify_token.txt")
            .with_status(status)
            .with_body("<Error><Code>AccessDenied</Code></Error>")
            .create_async()
            .await;

        let mut session = Session::new();
        let result = session.login(&endpoints(&server), None).await;

        assert!(matches!(result, Err(Error::SpecialAccess)));
        assert!(!session.is_logged_in());
    }
}

#[tokio::test]
async fn test_login_connection_failure_stays_transport_error() {
    let endpoints = Endpoints {
        api_url: "http://127.0.0.1:1".to_string(),
        token_url: "http://127.0.0.1:1/spotify_token.txt".to_string(),
    };

    let result = spotify::login(&endpoints, None).await;
    assert!(matches!(result, Err(Error::Http(_))));
}

#[tokio::test]
async fn test_relogin_replaces_client() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/search")
        .match_header("authorization", "Bearer second")
        .match_query(Matcher::Any)
        .with_body(r#"{"albums": {"items": []}}"#)
        .create_async()
        .await;

    let mut session = Session::new();
    session
        .login(&endpoints(&server), Some("first".to_string()))
        .await
        .unwrap();
    session
        .login(&endpoints(&server), Some("second".to_string()))
        .await
        .unwrap();

    spotify::search_album(&session, "Graduation").await.unwrap();
    search.assert_async().await;
}

#[tokio::test]
async fn test_search_album_lists_matches_in_order() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "Faster Than the Speed of Night".into()),
            Matcher::UrlEncoded("type".into(), "album".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_body(
            r#"{"albums": {"items": [
                {"id": "a1", "name": "Faster Than the Speed of Night", "artists": [{"name": "Bonnie Tyler"}, {"name": "Someone Else"}]},
                {"id": "a2", "name": "Faster Than the Speed of Night (Deluxe)", "artists": [{"name": "Bonnie Tyler"}]}
            ]}}"#,
        )
        .create_async()
        .await;

    let session = logged_in(&server).await;
    let matches = spotify::search_album(&session, "Faster Than the Speed of Night")
        .await
        .unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].position, 1);
    assert_eq!(matches[0].id, "a1");
    assert_eq!(matches[0].artist_name, "Bonnie Tyler");
    assert_eq!(matches[1].position, 2);
    assert_eq!(matches[1].name, "Faster Than the Speed of Night (Deluxe)");

    search.assert_async().await;
}

#[tokio::test]
async fn test_search_album_error_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"error": {"status": 401, "message": "The access token expired"}}"#)
        .create_async()
        .await;

    let session = logged_in(&server).await;
    assert!(matches!(
        spotify::search_album(&session, "Graduation").await,
        Err(Error::Http(_))
    ));
}

#[tokio::test]
async fn test_fetch_features_joins_names() {
    let mut server = Server::new_async().await;
    let tracks = server
        .mock("GET", "/albums/alb1/tracks")
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer test-token")
        .with_body(
            r#"{"items": [
                {"id": "t1", "name": "Song A"},
                {"id": "t2", "name": "Song B"}
            ]}"#,
        )
        .create_async()
        .await;
    let features = server
        .mock("GET", "/audio-features")
        .match_query(Matcher::UrlEncoded("ids".into(), "t1,t2".into()))
        .with_body(
            r#"{"audio_features": [
                {"id": "t1", "danceability": 0.5, "energy": 0.9},
                {"id": "t2", "danceability": 0.7, "energy": 0.1}
            ]}"#,
        )
        .create_async()
        .await;

    let session = logged_in(&server).await;
    let feats = spotify::fetch_features(&session, "alb1").await.unwrap();

    assert_eq!(feats.len(), 2);
    assert_eq!(feats[0].name.as_deref(), Some("Song A"));
    assert_eq!(feats[1].name.as_deref(), Some("Song B"));
    assert_eq!(feats[0].value("danceability"), Some(0.5));
    assert_eq!(feats[1].value("danceability"), Some(0.7));

    tracks.assert_async().await;
    features.assert_async().await;
}

#[tokio::test]
async fn test_fetch_features_keeps_features_api_order() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/albums/alb1/tracks")
        .match_query(Matcher::Any)
        .with_body(r#"{"items": [{"id": "t1", "name": "Song A"}, {"id": "t2", "name": "Song B"}]}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/audio-features")
        .match_query(Matcher::Any)
        .with_body(r#"{"audio_features": [{"id": "t2", "energy": 0.1}, {"id": "t1", "energy": 0.9}]}"#)
        .create_async()
        .await;

    let session = logged_in(&server).await;
    let feats = spotify::fetch_features(&session, "alb1").await.unwrap();

    let names: Vec<&str> = feats.iter().filter_map(|f| f.name.as_deref()).collect();
    assert_eq!(names, vec!["Song B", "Song A"]);
}

#[tokio::test]
async fn test_fetch_features_unknown_track_fails() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/albums/alb1/tracks")
        .match_query(Matcher::Any)
        .with_body(r#"{"items": [{"id": "t1", "name": "Song A"}]}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/audio-features")
        .match_query(Matcher::Any)
        .with_body(r#"{"audio_features": [{"id": "t1", "energy": 0.9}, {"id": "t9", "energy": 0.1}]}"#)
        .create_async()
        .await;

    let session = logged_in(&server).await;
    match spotify::fetch_features(&session, "alb1").await {
        Err(Error::UnknownTrack(id)) => assert_eq!(id, "t9"),
        other => panic!("expected unknown track, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_features_empty_album() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/albums/empty/tracks")
        .match_query(Matcher::Any)
        .with_body(r#"{"items": []}"#)
        .create_async()
        .await;
    let features = server
        .mock("GET", "/audio-features")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let session = logged_in(&server).await;
    assert!(spotify::fetch_features(&session, "empty").await.unwrap().is_empty());

    features.assert_async().await;
}

#[tokio::test]
async fn test_fetch_features_asks_for_full_track_page() {
    let mut server = Server::new_async().await;
    let tracks = server
        .mock("GET", "/albums/long/tracks")
        .match_query(Matcher::UrlEncoded("limit".into(), "50".into()))
        .with_body(r#"{"items": [{"id": "t1", "name": "Song A"}]}"#)
        .expect(1)
        .create_async()
        .await;
    server
        .mock("GET", "/audio-features")
        .match_query(Matcher::Any)
        .with_body(r#"{"audio_features": [{"id": "t1", "energy": 0.9}]}"#)
        .create_async()
        .await;

    let session = logged_in(&server).await;
    let feats = spotify::fetch_features(&session, "long").await.unwrap();
    assert_eq!(feats.len(), 1);

    tracks.assert_async().await;
}

#[tokio::test]
async fn test_search_album_asks_for_ten_matches() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("limit".into(), "10".into()))
        .with_body(r#"{"albums": {"items": []}}"#)
        .expect(1)
        .create_async()
        .await;

    let session = logged_in(&server).await;
    spotify::search_album(&session, "Graduation").await.unwrap();

    search.assert_async().await;
}
