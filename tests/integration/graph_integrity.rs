//! Integration test: integrity checking over messier graphs.
//!
//! Exercises validate() against graphs that mix unresolved references,
//! composition cycles, and prerequisite cycles, and checks that repair
//! operations bring the graph back to a clean state.

use openproficiency::graph::{IntegrityIssue, Relation, TopicGraph};
use openproficiency::topic::Topic;

fn topic(id: &str, subs: &[&str], pres: &[&str]) -> Topic {
    Topic::new(id)
        .with_subtopics(subs.iter().copied())
        .expect("no self-references")
        .with_pretopics(pres.iter().copied())
        .expect("no self-references")
}

#[test]
fn mixed_issues_are_all_reported() {
    let mut graph = TopicGraph::new("example.com", "messy");
    // Composition cycle a -> b -> a
    graph.add_topic(topic("a", &["b"], &[])).unwrap();
    graph.add_topic(topic("b", &["a"], &[])).unwrap();
    // Prerequisite cycle p -> q -> p
    graph.add_topic(topic("p", &[], &["q"])).unwrap();
    graph.add_topic(topic("q", &[], &["p"])).unwrap();
    // Dangling reference
    graph.add_topic(topic("lonely", &["ghost"], &[])).unwrap();

    let issues = graph.validate();
    assert_eq!(issues.len(), 3);

    let unresolved: Vec<_> = issues
        .iter()
        .filter(|i| matches!(i, IntegrityIssue::UnresolvedReference { .. }))
        .collect();
    assert_eq!(unresolved.len(), 1);

    let subtopic_cycles: Vec<_> = issues
        .iter()
        .filter(|i| {
            matches!(
                i,
                IntegrityIssue::Cycle {
                    relation: Relation::Subtopic,
                    ..
                }
            )
        })
        .collect();
    assert_eq!(subtopic_cycles.len(), 1);

    let pretopic_cycles: Vec<_> = issues
        .iter()
        .filter(|i| {
            matches!(
                i,
                IntegrityIssue::Cycle {
                    relation: Relation::Pretopic,
                    ..
                }
            )
        })
        .collect();
    assert_eq!(pretopic_cycles.len(), 1);
}

#[test]
fn repairing_issues_restores_clean_validation() {
    let mut graph = TopicGraph::new("example.com", "repairable");
    graph.add_topic(topic("a", &["b"], &[])).unwrap();
    graph.add_topic(topic("b", &["a"], &[])).unwrap();
    graph.add_topic(topic("c", &["ghost"], &[])).unwrap();
    assert_eq!(graph.validate().len(), 2);

    // Break the cycle
    assert!(graph.get_topic_mut("b").unwrap().remove_subtopic("a"));
    // Declare the dangling reference external
    graph.allow_external("ghost");

    assert!(graph.validate().is_empty());
    let closure = graph.resolve_effective_subtopics("a").unwrap();
    assert_eq!(closure.len(), 1);
    assert!(closure.contains("b"));
}

#[test]
fn shared_node_between_relations_is_not_a_conflict() {
    // "basics" is a subtopic of one topic and a pretopic of another;
    // the relations are independent graphs and neither has a cycle.
    let mut graph = TopicGraph::new("example.com", "independent");
    graph.add_topic(topic("course", &["basics"], &[])).unwrap();
    graph.add_topic(topic("advanced", &[], &["basics"])).unwrap();
    graph.add_topic(topic("basics", &[], &[])).unwrap();
    assert!(graph.validate().is_empty());
}
