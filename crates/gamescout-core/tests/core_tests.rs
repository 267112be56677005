use std::path::PathBuf;

use figment::providers::{Format, Toml};
use figment::Figment;

use gamescout_core::config::{expand_path, AppConfig, BranchFailurePolicy};
use gamescout_core::error::{Error, IndexKind};
use gamescout_core::types::{DistanceMetric, Query};

#[test]
fn query_rejects_empty_input() {
    for raw in ["", "   ", "\n\t"] {
        match Query::new(raw) {
            Err(Error::InvalidQuery(_)) => {}
            other => panic!("expected InvalidQuery for {raw:?}, got {other:?}"),
        }
    }
}

#[test]
fn query_trims_surrounding_whitespace() {
    let q = Query::new("  games like outer wilds \n").expect("valid query");
    assert_eq!(q.as_str(), "games like outer wilds");
}

#[test]
fn config_defaults_match_spec() {
    let cfg = AppConfig::from_figment(Figment::new()).expect("defaults");
    assert_eq!(cfg.recall.cap, 2);
    assert_eq!(cfg.recall.knn_k, 2);
    assert_eq!(cfg.recall.metric, DistanceMetric::Euclidean);
    assert_eq!(cfg.recall.on_branch_failure, BranchFailurePolicy::Fail);
    assert_eq!(cfg.provider.embedding_dim, 1536);
    assert_eq!(cfg.data.vector_table, "games");
}

#[test]
fn config_sections_override_defaults() {
    let toml = r#"
        [recall]
        cap = 5
        metric = "cosine"
        target_language = "ja"
        on_branch_failure = "degrade"

        [provider]
        base_url = "http://localhost:11434"
        embedding_dim = 768
    "#;
    let cfg = AppConfig::from_figment(Figment::from(Toml::string(toml))).expect("parse");
    assert_eq!(cfg.recall.cap, 5);
    assert_eq!(cfg.recall.metric, DistanceMetric::Cosine);
    assert_eq!(cfg.recall.target_language, "ja");
    assert_eq!(cfg.recall.on_branch_failure, BranchFailurePolicy::Degrade);
    assert_eq!(cfg.provider.base_url, "http://localhost:11434");
    assert_eq!(cfg.provider.embedding_dim, 768);
    // untouched section keeps its defaults
    assert_eq!(cfg.data.lexical_index_dir, "data/indexes/tantivy");
}

#[test]
fn unknown_metric_is_a_config_error() {
    let toml = r#"
        [recall]
        metric = "manhattan"
    "#;
    match AppConfig::from_figment(Figment::from(Toml::string(toml))) {
        Err(Error::InvalidConfig(_)) => {}
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn expand_path_expands_env_vars_and_leaves_plain_paths_alone() {
    std::env::set_var("GAMESCOUT_TEST_DATA_ROOT", "/srv/gamescout");
    assert_eq!(
        expand_path("${GAMESCOUT_TEST_DATA_ROOT}/indexes/tantivy"),
        PathBuf::from("/srv/gamescout/indexes/tantivy")
    );
    assert_eq!(expand_path("data/games.json"), PathBuf::from("data/games.json"));
    assert_eq!(expand_path("/absolute/path"), PathBuf::from("/absolute/path"));
}

#[test]
fn index_errors_name_their_side() {
    let lex = Error::lexical_index("connection refused");
    let vec = Error::vector_index("table missing");
    assert_eq!(lex.to_string(), "lexical index unavailable: connection refused");
    assert_eq!(vec.to_string(), "vector index unavailable: table missing");
    match lex {
        Error::IndexUnavailable { index, .. } => assert_eq!(index, IndexKind::Lexical),
        other => panic!("unexpected {other:?}"),
    }
}
