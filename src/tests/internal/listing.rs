use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::error::WebDavError;
use crate::session::MAX_REDIRECT_HOPS;
use crate::tests::{MULTI_STATUS_XML, assert_operation_failed, received, start_session};

fn multi_status() -> ResponseTemplate {
    ResponseTemplate::new(207)
        .insert_header("Content-Type", "application/xml; charset=utf-8")
        .set_body_string(MULTI_STATUS_XML)
}

#[tokio::test]
async fn lists_with_depth_one() {
    let (server, mut session) = start_session().await;
    Mock::given(method("PROPFIND"))
        .and(path("/docs/"))
        .and(header("Depth", "1"))
        .respond_with(multi_status())
        .expect(1)
        .mount(&server)
        .await;

    session.change_directory("docs");
    let records = session.list_working_directory().await.unwrap();

    assert_eq!(records.len(), 2);
    assert!(records[0].is_directory());
    assert_eq!(records[1].file_size(), 1234);
    assert_eq!(records[1].decoded_name(), "report final.pdf");
}

#[tokio::test]
async fn follows_a_single_redirect() {
    let (server, session) = start_session().await;
    let location = format!("{}/docs/", server.uri());

    Mock::given(method("PROPFIND"))
        .and(path("/docs"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", location.as_str()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PROPFIND"))
        .and(path("/docs/"))
        .respond_with(multi_status())
        .expect(1)
        .mount(&server)
        .await;

    let records = session.list_resources("docs").await.unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn relative_location_is_resolved() {
    let (server, session) = start_session().await;

    Mock::given(method("PROPFIND"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/docs/"))
        .mount(&server)
        .await;
    Mock::given(method("PROPFIND"))
        .and(path("/docs/"))
        .respond_with(multi_status())
        .mount(&server)
        .await;

    assert_eq!(session.list_resources("/old").await.unwrap().len(), 2);
}

#[tokio::test]
async fn redirect_loop_is_capped() {
    let (server, session) = start_session().await;
    Mock::given(method("PROPFIND"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/loop/"))
        .mount(&server)
        .await;

    let err = session.list_resources("/loop/").await.unwrap_err();

    assert!(matches!(err, WebDavError::TooManyRedirects(n) if n == MAX_REDIRECT_HOPS));
    assert_eq!(received(&server).await.len(), MAX_REDIRECT_HOPS + 1);
}

#[tokio::test]
async fn redirect_without_location_fails() {
    let (server, session) = start_session().await;
    Mock::given(method("PROPFIND"))
        .respond_with(ResponseTemplate::new(301))
        .mount(&server)
        .await;

    let err = session.list_resources("/x").await.unwrap_err();
    assert!(matches!(err, WebDavError::MissingLocation));
}

#[tokio::test]
async fn unexpected_listing_status_fails() {
    let (server, session) = start_session().await;
    Mock::given(method("PROPFIND"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = session.list_resources("/private/").await.unwrap_err();
    assert_operation_failed(err, 403);
}

#[tokio::test]
async fn exists_is_false_only_for_404() {
    let (server, session) = start_session().await;
    for (p, status) in [("/ok", 200), ("/moved", 301), ("/missing", 404)] {
        Mock::given(method("HEAD"))
            .and(path(p))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
    }

    assert!(session.resource_exists("ok").await.unwrap());
    assert!(session.resource_exists("moved").await.unwrap());
    assert!(!session.resource_exists("missing").await.unwrap());
}

#[tokio::test]
async fn exists_rejects_other_statuses() {
    let (server, session) = start_session().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = session.resource_exists("/broken").await.unwrap_err();
    assert_operation_failed(err, 500);
}
