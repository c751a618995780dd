#![cfg(feature = "server")]
//! HTTP-level tests against the assembled router.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use medcenter_web::api::{router, AppState};
use medcenter_web::nav::{SiteData, SitePayload};

async fn send(method: Method, uri: &str) -> (StatusCode, String) {
    let app = router(AppState::new(SiteData::default()));
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(uri: &str) -> (StatusCode, String) {
    send(Method::GET, uri).await
}

#[tokio::test]
async fn json_endpoints_are_get_only() {
    for uri in ["/status", "/api/site"] {
        let (status, _) = get(uri).await;
        assert_eq!(status, StatusCode::OK, "GET {uri}");

        let (status, _) = send(Method::POST, uri).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "POST {uri}");
    }

    let (status, body) = get("/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn status_reports_service_and_menu_size() {
    let (status, body) = get("/status").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["service"], "medcenter-web");
    assert_eq!(json["nav_entries"], SiteData::default().navigation.len());
}

#[tokio::test]
async fn site_endpoint_serves_menu_and_contacts() {
    let (status, body) = get("/api/site").await;
    assert_eq!(status, StatusCode::OK);

    let payload: SitePayload = serde_json::from_str(&body).unwrap();
    assert_eq!(SiteData::try_from(payload).unwrap(), SiteData::default());
}

#[tokio::test]
async fn home_page_renders_navbar_and_body() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);

    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("<title>CityCare Hospital</title>"));
    assert!(body.contains("Welcome to CityCare Hospital"));
    assert!(body.contains(r#"data-action="login""#));
}

#[tokio::test]
async fn about_page_uses_menu_label() {
    let (status, body) = get("/about/our-team").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Our Team</h1>"));
}

#[tokio::test]
async fn search_page_lists_matches() {
    let (status, body) = get("/search?query=cardio").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"href="/specialties/cardiology""#));
}

#[tokio::test]
async fn dashboard_asks_guests_to_sign_in() {
    let (status, body) = get("/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Please sign in"));
    assert!(body.contains(r#"href="/login""#));
}

#[tokio::test]
async fn unknown_pages_are_404() {
    let (status, body) = get("/specialties/astrology").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));

    let (status, _) = get("/a/b/c").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get("/about-us").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn pages_exist_only_where_menu_links_point() {
    for uri in ["/about/our-team", "/doctors", "/health-checkup", "/contact-us"] {
        let (status, _) = get(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }

    for uri in [
        "/about/health-checkup",
        "/about/specialties",
        "/about/doctors",
        "/our-team",
        "/cardiology",
        "/home",
    ] {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body.contains("Page not found"), "{uri}");
    }
}

#[tokio::test]
async fn search_query_is_taken_literally() {
    let (status, body) = get("/search?query=c%2B%2B").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No results for"));
    assert!(!body.contains("result(s) for"));
}
