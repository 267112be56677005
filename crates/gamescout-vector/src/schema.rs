use std::sync::Arc;

use arrow_schema::{DataType, Field, Schema};

/// Arrow schema for the game table: the corpus fields plus the precomputed
/// embedding. Dimensionality comes from the configured embedding provider.
pub fn build_arrow_schema(dim: i32) -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("name", DataType::Utf8, false),
        Field::new("description", DataType::Utf8, false),
        Field::new("description_translated", DataType::Utf8, true),
        Field::new("hardware", DataType::Utf8, false),
        Field::new("image_url", DataType::Utf8, false),
        Field::new(
            "vector",
            DataType::FixedSizeList(Arc::new(Field::new("item", DataType::Float32, true)), dim),
            true,
        ),
    ]))
}
