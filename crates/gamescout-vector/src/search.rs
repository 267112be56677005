use std::path::Path;

use anyhow::{Context, Result};
use arrow_array::{Array, Float32Array, RecordBatch, StringArray};
use async_trait::async_trait;
use futures::TryStreamExt;
use lancedb::query::{ExecutableQuery, QueryBase};
use lancedb::{connect, Connection, DistanceType};

use gamescout_core::error::{self, Error};
use gamescout_core::traits::VectorIndex;
use gamescout_core::types::{DistanceMetric, GameRecord, VectorHit};

/// Read-only handle over the vector table. Constructed once and shared by
/// reference across concurrent queries.
pub struct LanceVectorIndex {
    db: Connection,
    table_name: String,
}

impl LanceVectorIndex {
    pub async fn connect(db_path: &Path, table_name: &str) -> Result<Self> {
        let db = connect(db_path.to_string_lossy().as_ref()).execute().await?;
        Ok(Self { db, table_name: table_name.to_string() })
    }

    async fn knn_inner(
        &self,
        query: &[f32],
        k: usize,
        metric: DistanceMetric,
    ) -> Result<Vec<VectorHit>> {
        if k == 0 {
            return Ok(Vec::new());
        }
        let table = self.db.open_table(&self.table_name).execute().await?;
        let mut stream = table
            .vector_search(query.to_vec())?
            .distance_type(distance_type(metric))
            .limit(k)
            .execute()
            .await?;
        let mut hits = Vec::new();
        while let Some(batch) = TryStreamExt::try_next(&mut stream).await? {
            for i in 0..batch.num_rows() {
                hits.push(VectorHit {
                    record: record_from_batch(&batch, i)?,
                    distance: distance_from_batch(&batch, i)?,
                });
            }
        }
        // LanceDB streams hits in ascending _distance order already; the
        // contract here is to pass that order through untouched.
        Ok(hits)
    }
}

fn distance_type(metric: DistanceMetric) -> DistanceType {
    match metric {
        DistanceMetric::Euclidean => DistanceType::L2,
        DistanceMetric::Cosine => DistanceType::Cosine,
        DistanceMetric::Dot => DistanceType::Dot,
    }
}

fn string_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a StringArray> {
    batch
        .column_by_name(name)
        .with_context(|| format!("column '{name}' missing"))?
        .as_any()
        .downcast_ref::<StringArray>()
        .with_context(|| format!("column '{name}' is not a string column"))
}

fn record_from_batch(batch: &RecordBatch, row: usize) -> Result<GameRecord> {
    let translated_column = string_column(batch, "description_translated")?;
    let description_translated = if translated_column.is_null(row) {
        None
    } else {
        Some(translated_column.value(row).to_string())
    };
    Ok(GameRecord {
        name: string_column(batch, "name")?.value(row).to_string(),
        description: string_column(batch, "description")?.value(row).to_string(),
        description_translated,
        hardware: string_column(batch, "hardware")?.value(row).to_string(),
        image_url: string_column(batch, "image_url")?.value(row).to_string(),
    })
}

fn distance_from_batch(batch: &RecordBatch, row: usize) -> Result<f32> {
    let column = batch
        .column_by_name("_distance")
        .context("'_distance' column missing from vector search result")?;
    let distances = column
        .as_any()
        .downcast_ref::<Float32Array>()
        .context("'_distance' column is not f32")?;
    Ok(distances.value(row))
}

#[async_trait]
impl VectorIndex for LanceVectorIndex {
    async fn knn_search(
        &self,
        query: &[f32],
        k: usize,
        metric: DistanceMetric,
    ) -> error::Result<Vec<VectorHit>> {
        self.knn_inner(query, k, metric)
            .await
            .map_err(Error::vector_index)
    }
}
