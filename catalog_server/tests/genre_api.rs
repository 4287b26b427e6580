mod common;

use axum::http::StatusCode;
use movie_catalog::models::genre::Genre;
use movie_catalog::services::genre_service;

use common::{json, TestCatalog};

#[tokio::test]
async fn create_then_fetch() {
    let catalog = TestCatalog::new().await;

    let (status, body) = catalog.post("/genre/", r#"{"name":"Drama"}"#).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_empty());

    let mut conn = catalog.conn().await;
    assert_eq!(
        genre_service::get_genre(&mut conn, 1).await.unwrap(),
        Some(Genre {
            id: 1,
            name: Some("Drama".to_string())
        })
    );
}

#[tokio::test]
async fn create_rejects_unknown_field() {
    let catalog = TestCatalog::new().await;

    let (status, body) = catalog.post("/genre/", r#"{"title":"Drama"}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json(&body).as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn update_and_delete_lifecycle() {
    let catalog = TestCatalog::new().await;
    catalog.post("/genre/", r#"{"name":"Horor"}"#).await;

    let (status, _) = catalog.put("/genre/1", r#"{"id":1,"name":"Horror"}"#).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    {
        let mut conn = catalog.conn().await;
        let genre = genre_service::get_genre(&mut conn, 1).await.unwrap().unwrap();
        assert_eq!(genre.name.as_deref(), Some("Horror"));
    }

    let (status, _) = catalog.delete("/genre/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = catalog.put("/genre/1", r#"{"id":1,"name":"Horror"}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = catalog.delete("/genre/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let mut conn = catalog.conn().await;
    assert!(genre_service::list_genres(&mut conn).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_with_malformed_body_fails_with_message() {
    let catalog = TestCatalog::new().await;
    catalog.post("/genre/", r#"{"name":"Kept"}"#).await;

    let (status, body) = catalog.put("/genre/1", r#"{"id":"one"}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!json(&body).as_str().unwrap().is_empty());

    let mut conn = catalog.conn().await;
    let genre = genre_service::get_genre(&mut conn, 1).await.unwrap().unwrap();
    assert_eq!(genre.name.as_deref(), Some("Kept"));
}

#[tokio::test]
async fn update_ignores_extra_keys_and_checks_existence_first() {
    let catalog = TestCatalog::new().await;
    catalog.post("/genre/", r#"{"name":"Noir"}"#).await;

    let (status, _) = catalog
        .put("/genre/1", r#"{"name":"Neo-noir","parent":"Crime"}"#)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = catalog.put("/genre/42", "{").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());

    let mut conn = catalog.conn().await;
    assert_eq!(
        genre_service::list_genres(&mut conn).await.unwrap(),
        [Genre {
            id: 1,
            name: Some("Neo-noir".to_string())
        }]
    );
}

#[tokio::test]
async fn non_integer_path_id_is_rejected() {
    let catalog = TestCatalog::new().await;

    let (status, _) = catalog.delete("/genre/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
