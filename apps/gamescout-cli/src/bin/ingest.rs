use std::collections::HashSet;
use std::path::PathBuf;
use std::{env, fs};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use gamescout_core::config::{expand_path, AppConfig};
use gamescout_core::traits::EmbeddingProvider;
use gamescout_core::types::GameRecord;
use gamescout_providers::{LlmClient, LlmEmbedder};
use gamescout_text::LexicalIndexWriter;
use gamescout_vector::VectorIndexWriter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load().map_err(|e| {
        eprintln!("Error loading config: {e}");
        e
    })?;

    let args: Vec<String> = env::args().skip(1).collect();
    let corpus_file = args
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| expand_path(&config.data.corpus_file));

    println!("gamescout corpus ingestion\n==========================");
    println!("Corpus file: {}", corpus_file.display());

    let raw = fs::read_to_string(&corpus_file)?;
    let records: Vec<GameRecord> = serde_json::from_str(&raw)?;
    println!("Loaded {} corpus records", records.len());

    // The merge step dedups by name, which only works if ingestion writes
    // each name into both indexes exactly once.
    let mut seen_names = HashSet::new();
    let mut unique = Vec::with_capacity(records.len());
    for record in records {
        if seen_names.insert(record.name.clone()) {
            unique.push(record);
        } else {
            warn!(game = %record.name, "duplicate name in corpus, skipping");
        }
    }
    if unique.is_empty() {
        println!("Nothing to ingest.");
        return Ok(());
    }

    let client = LlmClient::new(config.provider.clone())?;
    let embedder = LlmEmbedder::new(client);
    println!(
        "Embedding {} descriptions ({} dimensions)...",
        unique.len(),
        embedder.dim()
    );
    let pb = ProgressBar::new(unique.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games {msg}")?
            .progress_chars("#>-"),
    );
    let mut embeddings = Vec::with_capacity(unique.len());
    for record in &unique {
        embeddings.push(embedder.embed(&record.description).await?);
        pb.inc(1);
    }
    pb.finish_with_message("embeddings done");

    let lexical_dir = expand_path(&config.data.lexical_index_dir);
    let lexical_writer = LexicalIndexWriter::create(lexical_dir.clone())?;
    let written = lexical_writer.add_records(&unique)?;
    println!("Indexed {written} games into tantivy at {}", lexical_dir.display());

    let vector_dir = expand_path(&config.data.vector_index_dir);
    if vector_dir.exists() {
        fs::remove_dir_all(&vector_dir)?;
    }
    fs::create_dir_all(&vector_dir)?;
    let vector_writer =
        VectorIndexWriter::connect(&vector_dir, &config.data.vector_table, embedder.dim()).await?;
    vector_writer.index_records(&unique, &embeddings).await?;
    println!(
        "Indexed {} games into LanceDB table '{}' at {}",
        unique.len(),
        config.data.vector_table,
        vector_dir.display()
    );

    println!("\nIngestion completed.");
    println!("Try: cargo run --bin gamescout-ask -- 'find me games like chess'");
    Ok(())
}
