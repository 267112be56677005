use tempfile::TempDir;

use gamescout_core::traits::VectorIndex;
use gamescout_core::types::{DistanceMetric, GameRecord};
use gamescout_vector::{LanceVectorIndex, VectorIndexWriter};

const DIM: usize = 4;

fn record(name: &str) -> GameRecord {
    GameRecord {
        name: name.to_string(),
        description: format!("{name} description"),
        description_translated: None,
        hardware: "any".to_string(),
        image_url: format!("https://img.example/{name}.png"),
    }
}

fn corpus() -> (Vec<GameRecord>, Vec<Vec<f32>>) {
    let records = vec![record("North"), record("East"), record("Up")];
    let embeddings = vec![
        vec![1.0, 0.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0, 0.0],
        vec![0.0, 0.0, 1.0, 0.0],
    ];
    (records, embeddings)
}

#[tokio::test]
async fn knn_returns_nearest_record_first_in_ascending_order() {
    let tmp = TempDir::new().expect("tempdir");
    let (records, embeddings) = corpus();

    let writer = VectorIndexWriter::connect(tmp.path(), "games", DIM).await.expect("connect");
    writer.index_records(&records, &embeddings).await.expect("index");

    let index = LanceVectorIndex::connect(tmp.path(), "games").await.expect("open");
    let query = vec![0.9, 0.1, 0.0, 0.0];
    let hits = index
        .knn_search(&query, 2, DistanceMetric::Euclidean)
        .await
        .expect("search");

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].record.name, "North");
    assert!(hits[0].distance <= hits[1].distance, "ascending distance order");
    assert_eq!(hits[0].record.image_url, "https://img.example/North.png");
}

#[tokio::test]
async fn k_zero_is_empty() {
    let tmp = TempDir::new().expect("tempdir");
    let (records, embeddings) = corpus();

    let writer = VectorIndexWriter::connect(tmp.path(), "games", DIM).await.expect("connect");
    writer.index_records(&records, &embeddings).await.expect("index");

    let index = LanceVectorIndex::connect(tmp.path(), "games").await.expect("open");
    let hits = index
        .knn_search(&[1.0, 0.0, 0.0, 0.0], 0, DistanceMetric::Euclidean)
        .await
        .expect("search");
    assert!(hits.is_empty());
}

#[tokio::test]
async fn mismatched_embedding_dimension_is_rejected_before_writing() {
    let tmp = TempDir::new().expect("tempdir");
    let records = vec![record("North")];
    let embeddings = vec![vec![1.0, 0.0]]; // dim 2, table expects 4

    let writer = VectorIndexWriter::connect(tmp.path(), "games", DIM).await.expect("connect");
    let err = writer.index_records(&records, &embeddings).await.expect_err("must reject");
    assert!(err.to_string().contains("dimension"));
}
