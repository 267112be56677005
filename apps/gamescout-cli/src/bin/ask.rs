use std::env;

use tracing::warn;

use gamescout_core::config::{expand_path, AppConfig};
use gamescout_core::types::RecallSource;
use gamescout_providers::{fetch_asset, LlmClient, LlmEmbedder, LlmGenerator, LlmTranslator};
use gamescout_recall::{recommend_candidates, HybridRetriever};
use gamescout_text::TantivyLexicalIndex;
use gamescout_vector::LanceVectorIndex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <query>", args[0]);
        eprintln!("Example: {} 'find me games like chess'", args[0]);
        std::process::exit(1);
    }
    let query = args[1..].join(" ");

    let config = AppConfig::load()?;
    let client = LlmClient::new(config.provider.clone())?;
    let lexical = TantivyLexicalIndex::open(expand_path(&config.data.lexical_index_dir))?;
    let vector = LanceVectorIndex::connect(
        &expand_path(&config.data.vector_index_dir),
        &config.data.vector_table,
    )
    .await?;

    let retriever = HybridRetriever::new(
        LlmTranslator::new(client.clone()),
        LlmEmbedder::new(client.clone()),
        lexical,
        vector,
        config.recall.clone(),
    );

    println!("Searching for: \"{query}\"");
    let merged = retriever.retrieve(&query).await?;
    if merged.is_empty() {
        println!("No candidates found.");
        return Ok(());
    }

    let generator = LlmGenerator::new(client.clone());
    let recommendations = recommend_candidates(&generator, &merged).await;

    for (i, recommendation) in recommendations.iter().enumerate() {
        let record = &recommendation.candidate.record;
        let source = match recommendation.candidate.source {
            RecallSource::Lexical => "text match",
            RecallSource::Vector => "similar by embedding",
        };
        println!("\n{}. {} ({source})", i + 1, record.name);
        println!("   Hardware: {}", record.hardware);
        match &recommendation.outcome {
            Ok(text) => println!("   {text}"),
            Err(e) => println!("   (no recommendation: {e})"),
        }
        // Image display is cosmetic; a fetch failure never fails the query.
        match fetch_asset(client.http(), &record.image_url).await {
            Ok(bytes) => println!("   Image: {} ({} bytes)", record.image_url, bytes.len()),
            Err(e) => warn!(game = %record.name, error = %e, "asset fetch failed"),
        }
    }
    Ok(())
}
