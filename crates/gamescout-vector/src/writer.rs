use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Result};
use arrow_array::{FixedSizeListArray, RecordBatch, RecordBatchIterator, StringArray};
use lancedb::{connect, Connection};

use gamescout_core::types::GameRecord;

use crate::schema::build_arrow_schema;

/// Offline writer for the vector table. One row per record, keyed by the
/// same name the lexical index uses.
pub struct VectorIndexWriter {
    db: Connection,
    table_name: String,
    dim: usize,
}

impl VectorIndexWriter {
    pub async fn connect(db_path: &Path, table_name: &str, dim: usize) -> Result<Self> {
        let db = connect(db_path.to_string_lossy().as_ref()).execute().await?;
        Ok(Self { db, table_name: table_name.to_string(), dim })
    }

    /// Store records with their precomputed embeddings. Embedding count and
    /// dimensionality are validated before anything is written.
    pub async fn index_records(
        &self,
        records: &[GameRecord],
        embeddings: &[Vec<f32>],
    ) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }
        if records.len() != embeddings.len() {
            bail!(
                "{} records but {} embeddings",
                records.len(),
                embeddings.len()
            );
        }
        for (record, embedding) in records.iter().zip(embeddings) {
            if embedding.len() != self.dim {
                bail!(
                    "embedding for '{}' has dimension {}, expected {}",
                    record.name,
                    embedding.len(),
                    self.dim
                );
            }
        }

        let record_batch = records_to_batch(records, embeddings, self.dim)?;
        let schema = record_batch.schema();
        let reader = Box::new(RecordBatchIterator::new(vec![Ok(record_batch)].into_iter(), schema));
        if self.db.table_names().execute().await?.contains(&self.table_name) {
            self.db
                .open_table(&self.table_name)
                .execute()
                .await?
                .add(reader)
                .execute()
                .await?;
        } else {
            self.db.create_table(&self.table_name, reader).execute().await?;
        }
        Ok(())
    }
}

pub(crate) fn records_to_batch(
    records: &[GameRecord],
    embeddings: &[Vec<f32>],
    dim: usize,
) -> Result<RecordBatch> {
    let schema = build_arrow_schema(dim as i32);
    let mut names = Vec::new();
    let mut descriptions = Vec::new();
    let mut descriptions_translated: Vec<Option<String>> = Vec::new();
    let mut hardware = Vec::new();
    let mut image_urls = Vec::new();
    let mut vectors: Vec<Option<Vec<Option<f32>>>> = Vec::new();
    for (record, embedding) in records.iter().zip(embeddings) {
        names.push(record.name.clone());
        descriptions.push(record.description.clone());
        descriptions_translated.push(record.description_translated.clone());
        hardware.push(record.hardware.clone());
        image_urls.push(record.image_url.clone());
        vectors.push(Some(embedding.iter().map(|&x| Some(x)).collect()));
    }
    let record_batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(names)),
            Arc::new(StringArray::from(descriptions)),
            Arc::new(StringArray::from(descriptions_translated)),
            Arc::new(StringArray::from(hardware)),
            Arc::new(StringArray::from(image_urls)),
            Arc::new(FixedSizeListArray::from_iter_primitive::<
                arrow_array::types::Float32Type,
                _,
                _,
            >(vectors.into_iter(), dim as i32)),
        ],
    )?;
    Ok(record_batch)
}
