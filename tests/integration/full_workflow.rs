//! Integration test: full end-to-end workflow.
//!
//! Tests the complete lifecycle:
//! 1. Build a topic graph for a knowledge domain
//! 2. Validate its integrity
//! 3. Record proficiency scores and aggregate from subtopics
//! 4. Issue transcript entries
//! 5. Round-trip everything through the exchange formats
//! 6. Define proficiency levels over the graph

use openproficiency::aggregate::{aggregate_from_subtopics, MeanAggregation};
use openproficiency::graph::TopicGraph;
use openproficiency::level::{ProficiencyLevel, ProficiencyLevelList};
use openproficiency::scale::ProficiencyScale;
use openproficiency::score::ProficiencyScore;
use openproficiency::topic::Topic;
use openproficiency::transcript::{TranscriptEntry, TranscriptEntryBuilder};

#[test]
fn full_workflow_graph_to_transcript() {
    // ── Step 1: Build a topic graph ─────────────────────────────────────
    let mut graph = TopicGraph::new("example.com", "math")
        .with_description("Mathematics topics")
        .with_version("1.0.0")
        .expect("1.0.0 is a valid version");

    graph
        .add_topic(
            Topic::new("arithmetic")
                .with_description("Basic arithmetic")
                .with_subtopics(["addition", "subtraction", "multiplication", "division"])
                .expect("no self-references")
                .with_pretopics(["counting"])
                .expect("no self-references"),
        )
        .expect("insert should succeed");
    for leaf in ["addition", "subtraction", "multiplication", "division", "counting"] {
        graph.add_topic(Topic::new(leaf)).expect("insert should succeed");
    }

    assert_eq!(graph.full_name(), "example.com/math@1.0.0");
    assert_eq!(graph.len(), 6);

    // ── Step 2: Validate integrity ──────────────────────────────────────
    assert!(
        graph.validate().is_empty(),
        "a well-formed graph should have no integrity issues"
    );

    let effective = graph
        .resolve_effective_subtopics("arithmetic")
        .expect("acyclic graph resolves");
    assert_eq!(effective.len(), 4);
    assert!(effective.contains("division"));

    // ── Step 3: Scores and aggregation ──────────────────────────────────
    let scale = ProficiencyScale::default();
    let measured: Vec<ProficiencyScore> = [
        ("addition", 0.9),
        ("subtraction", 0.8),
        ("multiplication", 0.7),
        ("division", 0.6),
    ]
    .into_iter()
    .map(|(topic, value)| ProficiencyScore::from_numeric(topic, value).unwrap())
    .collect();

    let derived = aggregate_from_subtopics(&graph, "arithmetic", &measured, &MeanAggregation)
        .expect("aggregation should succeed");
    assert_eq!(derived.topic_id(), "arithmetic");
    assert!((derived.score() - 0.75).abs() < 1e-9);
    assert_eq!(derived.bucket_name(&scale).unwrap(), "PROFICIENT");

    // ── Step 4: Issue transcript entries ────────────────────────────────
    let entry = TranscriptEntryBuilder::new("u1", "arithmetic", derived.score(), "example.com")
        .topic_list(graph.full_name())
        .build()
        .expect("valid entry");
    assert_eq!(entry.user_id(), "u1");
    assert_eq!(entry.issuer(), "example.com");
    assert_eq!(entry.topic_list(), Some(graph.full_name().as_str()));
    assert!((entry.proficiency_score().score() - 0.75).abs() < 1e-9);

    // A named-bucket entry mirrors ProficiencyScore's second entry point
    let named = TranscriptEntryBuilder::new("u1", "counting", "EXPERT", "example.com")
        .build()
        .expect("valid entry");
    assert_eq!(named.proficiency_score().bucket_name(&scale).unwrap(), "EXPERT");

    // ── Step 5: Exchange-format round-trips ─────────────────────────────
    let record = entry.to_exchange_format();
    assert_eq!(record.user_id, "u1");
    assert_eq!(record.topic_id, "arithmetic");
    let restored = TranscriptEntry::from_exchange_format(record).expect("round-trip");
    assert_eq!(restored, entry);

    let graph_json = graph.to_json().expect("export");
    let restored_graph = TopicGraph::from_json(&graph_json).expect("import");
    assert_eq!(restored_graph, graph);

    // ── Step 6: Proficiency levels over the graph ───────────────────────
    let mut levels = ProficiencyLevelList::new("example.com", "math-levels", "1.0.0", "cert")
        .expect("valid list metadata");
    levels
        .add_dependency("math", restored_graph)
        .expect("namespace is free");
    levels
        .add_level(
            ProficiencyLevel::new("math-level-1")
                .expect("kebab-case id")
                .with_pretopics(["math.counting", "math.addition"]),
        )
        .expect("pretopics resolve against the dependency");

    assert_eq!(levels.full_name(), "example.com/math-levels@1.0.0");
    let list_record = levels.to_record();
    assert_eq!(list_record.dependencies["math"], "example.com/math@1.0.0");
}
