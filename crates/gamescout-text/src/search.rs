use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::Value;
use tantivy::{Index, TantivyDocument};

use gamescout_core::error::{self, Error};
use gamescout_core::traits::LexicalIndex;
use gamescout_core::types::{GameRecord, LexicalHit};

use crate::schema::register_tokenizer;

/// Read-only handle over an existing lexical index. Constructed once and
/// shared by reference across concurrent queries.
pub struct TantivyLexicalIndex {
    index: Index,
    reader: tantivy::IndexReader,
    name_field: tantivy::schema::Field,
    description_field: tantivy::schema::Field,
    description_translated_field: tantivy::schema::Field,
    hardware_field: tantivy::schema::Field,
    image_url_field: tantivy::schema::Field,
}

impl TantivyLexicalIndex {
    pub fn open(index_dir: std::path::PathBuf) -> Result<Self> {
        let index = Index::open_in_dir(&index_dir)?;
        register_tokenizer(&index);
        let reader = index.reader()?;
        let schema = index.schema();
        let name_field = schema.get_field("name")?;
        let description_field = schema.get_field("description")?;
        let description_translated_field = schema.get_field("description_translated")?;
        let hardware_field = schema.get_field("hardware")?;
        let image_url_field = schema.get_field("image_url")?;
        Ok(Self {
            index,
            reader,
            name_field,
            description_field,
            description_translated_field,
            hardware_field,
            image_url_field,
        })
    }

    fn search_inner(&self, query_text: &str, k: usize) -> Result<Vec<LexicalHit>> {
        if k == 0 {
            return Ok(Vec::new());
        }
        let searcher = self.reader.searcher();
        let query_parser = QueryParser::for_index(
            &self.index,
            vec![self.description_field, self.description_translated_field],
        );
        // Translated queries come from an LLM and may contain characters
        // the query grammar treats specially; the lenient parser keeps the
        // well-formed terms.
        let (query, _errors) = query_parser.parse_query_lenient(query_text);
        let top_docs = searcher.search(&query, &TopDocs::with_limit(k))?;
        let mut hits = Vec::new();
        for (score, doc_address) in top_docs {
            let document: TantivyDocument = searcher.doc(doc_address)?;
            hits.push(LexicalHit { record: self.record_from_doc(&document)?, score });
        }
        Ok(hits)
    }

    fn record_from_doc(&self, document: &TantivyDocument) -> Result<GameRecord> {
        let stored = |field: tantivy::schema::Field, label: &str| -> Result<String> {
            document
                .get_first(field)
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .ok_or_else(|| anyhow!("stored field '{label}' missing"))
        };
        Ok(GameRecord {
            name: stored(self.name_field, "name")?,
            description: stored(self.description_field, "description")?,
            description_translated: document
                .get_first(self.description_translated_field)
                .and_then(|v| v.as_str())
                .map(str::to_string),
            hardware: stored(self.hardware_field, "hardware")?,
            image_url: stored(self.image_url_field, "image_url")?,
        })
    }
}

#[async_trait]
impl LexicalIndex for TantivyLexicalIndex {
    async fn text_search(&self, query: &str, k: usize) -> error::Result<Vec<LexicalHit>> {
        self.search_inner(query, k).map_err(Error::lexical_index)
    }
}
