use crate::helpers::{spawn_app, INDEX_HTML};
use hyper::StatusCode;

use static_routes::*;

#[tokio::test]
async fn home_serves_the_app_shell() {
    let app = spawn_app().await;

    let response = app
        .get(routes().root.home)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    assert_eq!(response.text().await.unwrap(), INDEX_HTML);
}

#[tokio::test]
async fn client_side_routes_fall_back_to_the_app_shell() {
    let app = spawn_app().await;

    let response = app
        .get(routes().root.design)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    assert_eq!(response.text().await.unwrap(), INDEX_HTML);
}

#[tokio::test]
async fn static_files_are_served() {
    let app = spawn_app().await;

    let response = app
        .get_path("/tokens.css")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(StatusCode::OK, response.status());
    assert!(response.text().await.unwrap().contains("--space-md"));
}
