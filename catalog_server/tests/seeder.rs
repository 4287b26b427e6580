mod common;

use axum::http::StatusCode;
use movie_catalog::seeder::{self, SeedReport};

use common::{json, titles, TestCatalog};

fn fixture_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/catalog.json")
}

#[tokio::test]
async fn seeds_demo_catalog() {
    let catalog = TestCatalog::new().await;

    let report = {
        let mut conn = catalog.conn().await;
        seeder::seed_from_file(&mut conn, &fixture_path()).await.unwrap()
    };
    assert_eq!(
        report,
        SeedReport {
            directors: 3,
            genres: 3,
            movies: 5
        }
    );

    let (status, body) = catalog.get("/movies/?director_id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["Arrival", "Dune", "Incendies"]);

    let (status, body) = catalog.get("/movies/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["rating"], 8);
}

#[tokio::test]
async fn reseeding_is_idempotent() {
    let catalog = TestCatalog::new().await;
    let mut conn = catalog.conn().await;

    seeder::seed_from_file(&mut conn, &fixture_path()).await.unwrap();
    let again = seeder::seed_from_file(&mut conn, &fixture_path()).await.unwrap();
    assert_eq!(again, SeedReport::default());
}

#[tokio::test]
async fn missing_seed_file_is_an_error() {
    let catalog = TestCatalog::new().await;
    let mut conn = catalog.conn().await;

    let err = seeder::seed_from_file(&mut conn, std::path::Path::new("/nonexistent/seed.json"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("seed file"));
}
