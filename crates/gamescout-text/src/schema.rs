use tantivy::schema::{
    IndexRecordOption, Schema, TextFieldIndexing, TextOptions, STORED, STRING,
};
use tantivy::tokenizer::{LowerCaser, SimpleTokenizer, StopWordFilter, TextAnalyzer};
use tantivy::Index;

pub const DESCRIPTION_TOKENIZER: &str = "description_with_stopwords";

/// Schema for the game corpus. `name` is the identity key and is stored
/// raw; both description variants are tokenized and searchable; hardware
/// and image_url are stored for hit reconstruction only.
pub fn build_schema() -> Schema {
    let mut schema_builder = Schema::builder();
    let _name_field = schema_builder.add_text_field("name", STRING | STORED);
    let description_indexing = TextFieldIndexing::default()
        .set_tokenizer(DESCRIPTION_TOKENIZER)
        .set_index_option(IndexRecordOption::WithFreqsAndPositions);
    let description_options = TextOptions::default()
        .set_indexing_options(description_indexing)
        .set_stored();
    let _description_field = schema_builder.add_text_field("description", description_options.clone());
    let _description_translated_field =
        schema_builder.add_text_field("description_translated", description_options);
    let _hardware_field = schema_builder.add_text_field("hardware", STORED);
    let _image_url_field = schema_builder.add_text_field("image_url", STORED);
    schema_builder.build()
}

pub fn register_tokenizer(index: &Index) {
    let stop_words = vec![
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
        "it", "its", "of", "on", "that", "the", "to", "was", "will", "with", "or", "but", "not",
        "this", "these", "they", "them", "their", "there", "then", "than", "so", "if", "when",
        "where", "how", "what", "which", "who", "can", "could", "should", "would", "may", "might",
        "do", "does", "did", "have", "had", "having", "like",
    ];
    let tokenizer = TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(StopWordFilter::remove(stop_words.into_iter().map(|s| s.to_string())))
        .build();
    index.tokenizers().register(DESCRIPTION_TOKENIZER, tokenizer);
}
