use anyhow::Result;
use tantivy::{doc, Index, TantivyDocument};

use gamescout_core::types::GameRecord;

use crate::schema::{build_schema, register_tokenizer};

/// Offline writer for the lexical index. Each ingestion run rebuilds the
/// index directory from scratch; records are never mutated in place.
pub struct LexicalIndexWriter {
    index: Index,
    name_field: tantivy::schema::Field,
    description_field: tantivy::schema::Field,
    description_translated_field: tantivy::schema::Field,
    hardware_field: tantivy::schema::Field,
    image_url_field: tantivy::schema::Field,
}

impl LexicalIndexWriter {
    pub fn create(index_dir: std::path::PathBuf) -> Result<Self> {
        let schema = build_schema();
        if index_dir.exists() {
            std::fs::remove_dir_all(&index_dir)?;
        }
        std::fs::create_dir_all(&index_dir)?;
        let index = Index::create_in_dir(&index_dir, schema.clone())?;
        register_tokenizer(&index);
        let name_field = schema.get_field("name")?;
        let description_field = schema.get_field("description")?;
        let description_translated_field = schema.get_field("description_translated")?;
        let hardware_field = schema.get_field("hardware")?;
        let image_url_field = schema.get_field("image_url")?;
        Ok(Self {
            index,
            name_field,
            description_field,
            description_translated_field,
            hardware_field,
            image_url_field,
        })
    }

    /// Index one document per record, keyed by name. Returns the number of
    /// records written.
    pub fn add_records(&self, records: &[GameRecord]) -> Result<usize> {
        let mut index_writer = self.index.writer(50_000_000)?;
        for r in records {
            let mut document: TantivyDocument = doc!(
                self.name_field => r.name.clone(),
                self.description_field => r.description.clone(),
                self.hardware_field => r.hardware.clone(),
                self.image_url_field => r.image_url.clone(),
            );
            if let Some(translated) = &r.description_translated {
                document.add_text(self.description_translated_field, translated);
            }
            index_writer.add_document(document)?;
        }
        index_writer.commit()?;
        Ok(records.len())
    }
}
