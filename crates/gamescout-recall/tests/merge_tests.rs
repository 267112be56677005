use gamescout_core::types::{GameRecord, LexicalHit, RecallSource, VectorHit};
use gamescout_recall::merge_recall;

fn record(name: &str) -> GameRecord {
    GameRecord {
        name: name.to_string(),
        description: format!("{name} description"),
        description_translated: None,
        hardware: "any".to_string(),
        image_url: format!("https://img.example/{name}.png"),
    }
}

fn lex(name: &str, score: f32) -> LexicalHit {
    LexicalHit { record: record(name), score }
}

fn vec_hit(name: &str, distance: f32) -> VectorHit {
    VectorHit { record: record(name), distance }
}

#[test]
fn lexical_priority_scenario() {
    // lexical [A(0.9), B(0.8), C(0.7)], vector [B(0.1), D(0.2)], cap 2
    let lexical = vec![lex("A", 0.9), lex("B", 0.8), lex("C", 0.7)];
    let vector = vec![vec_hit("B", 0.1), vec_hit("D", 0.2)];

    let merged = merge_recall(&lexical, &vector, 2);

    assert_eq!(merged.names(), vec!["A", "B"]);
    assert!(merged.iter().all(|c| c.source == RecallSource::Lexical));
}

#[test]
fn vector_only_scenario() {
    let vector = vec![vec_hit("E", 0.05), vec_hit("F", 0.2)];

    let merged = merge_recall(&[], &vector, 2);

    assert_eq!(merged.names(), vec!["E", "F"]);
    assert!(merged.iter().all(|c| c.source == RecallSource::Vector));
}

#[test]
fn dedup_across_sources_with_loose_cap() {
    // lexical [G(0.5)], vector [G(0.3), H(0.4)], cap 5 -> [G, H]
    let lexical = vec![lex("G", 0.5)];
    let vector = vec![vec_hit("G", 0.3), vec_hit("H", 0.4)];

    let merged = merge_recall(&lexical, &vector, 5);

    assert_eq!(merged.names(), vec!["G", "H"]);
    assert_eq!(merged.candidates[0].source, RecallSource::Lexical);
    assert_eq!(merged.candidates[1].source, RecallSource::Vector);
}

#[test]
fn both_empty_is_empty_not_an_error() {
    for cap in [0, 1, 2, 100] {
        assert!(merge_recall(&[], &[], cap).is_empty());
    }
}

#[test]
fn cap_zero_emits_nothing() {
    let lexical = vec![lex("A", 1.0)];
    let vector = vec![vec_hit("B", 0.1)];
    assert!(merge_recall(&lexical, &vector, 0).is_empty());
}

#[test]
fn lexical_only_respects_cap_and_order() {
    let lexical = vec![lex("A", 0.9), lex("B", 0.8), lex("C", 0.7)];

    let merged = merge_recall(&lexical, &[], 2);

    assert_eq!(merged.names(), vec!["A", "B"]);
}

#[test]
fn length_bounded_by_cap_and_distinct_names() {
    let lexical = vec![lex("A", 0.9), lex("A", 0.8), lex("B", 0.7)];
    let vector = vec![vec_hit("B", 0.1), vec_hit("A", 0.2), vec_hit("C", 0.3)];

    for cap in 0..6 {
        let merged = merge_recall(&lexical, &vector, cap);
        assert!(merged.len() <= cap);
        // distinct names across both inputs: A, B, C
        assert_eq!(merged.len(), cap.min(3));

        let mut names = merged.names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), merged.len(), "no duplicate names at cap {cap}");
    }
}

#[test]
fn duplicate_keeps_lexical_position() {
    // B appears in both; its merged position must match a lexical-only merge.
    let lexical = vec![lex("A", 0.9), lex("B", 0.8), lex("C", 0.7)];
    let vector = vec![vec_hit("B", 0.01)];

    let with_vector = merge_recall(&lexical, &vector, 3);
    let lexical_only = merge_recall(&lexical, &[], 3);

    let pos = |m: &gamescout_core::types::MergedResult| {
        m.names().iter().position(|n| *n == "B")
    };
    assert_eq!(pos(&with_vector), pos(&lexical_only));
}

#[test]
fn merge_is_idempotent() {
    let lexical = vec![lex("A", 0.9), lex("B", 0.8)];
    let vector = vec![vec_hit("B", 0.1), vec_hit("D", 0.2)];

    let first = merge_recall(&lexical, &vector, 2);
    let second = merge_recall(&lexical, &vector, 2);

    assert_eq!(first.names(), second.names());
    let sources_of = |m: &gamescout_core::types::MergedResult| {
        m.iter().map(|c| c.source).collect::<Vec<_>>()
    };
    assert_eq!(sources_of(&first), sources_of(&second));
}
