//! Tier 5: Scenario
//!
//! The fixed two-document corpus about superconductors and magnets, with
//! the full query list expected to run against it.

use super::test_utils::*;
use permudex::QueryError;

// ============================================================================
// Indexing
// ============================================================================

#[test]
fn tier5_index_contents() {
    let model = scenario_model();
    let stats = model.stats();
    assert_eq!(stats.documents, 2);
    assert_eq!(stats.terms, 21);

    let terms: Vec<&str> = model.dump_index().into_iter().map(|(t, _)| t).collect();
    for expected in [
        "temperatures",
        "superconductors",
        "superconductor",
        "magnet",
        "magnetic",
        "levitated",
        "repelled",
        "spinning",
    ] {
        assert!(terms.contains(&expected), "missing {}", expected);
    }
    for stop in ["at", "a", "have", "but", "they", "can", "also", "such", "that", "will"] {
        assert!(!terms.contains(&stop), "stop word {} indexed", stop);
    }
}

#[test]
fn tier5_documents_are_stored() {
    let model = scenario_model();
    assert_eq!(model.document("Doc1"), Some(DOC1));
    assert_eq!(model.document("Doc2"), Some(DOC2));
}

// ============================================================================
// Single terms
// ============================================================================

#[test]
fn tier5_single_terms() {
    let model = scenario_model();
    assert_eq!(model.boolean_query("superconductor"), docs(&["Doc2"]));
    assert_eq!(model.boolean_query("superconductors"), docs(&["Doc1"]));
    assert_eq!(model.boolean_query("magnet"), docs(&["Doc1", "Doc2"]));
    assert_eq!(model.boolean_query("temperatures"), docs(&["Doc1"]));
    assert!(model.boolean_query("nonexistentterm").is_empty());
}

#[test]
fn tier5_wildcard_terms() {
    let model = scenario_model();
    assert_eq!(model.boolean_query("super*"), docs(&["Doc1", "Doc2"]));
    assert_eq!(model.boolean_query("temp*"), docs(&["Doc1"]));
    assert_eq!(model.boolean_query("*ed"), docs(&["Doc1", "Doc2"]));
    assert_eq!(model.boolean_query("*ing"), docs(&["Doc1"]));
    assert_eq!(model.boolean_query("repel*"), docs(&["Doc1", "Doc2"]));
    assert_eq!(model.boolean_query("mag*t"), docs(&["Doc1", "Doc2"]));
    assert!(model.boolean_query("*magnet*").is_empty());

    let ed: Vec<String> = model.expand_term("*ed").into_iter().collect();
    assert_eq!(ed, vec!["levitated", "repelled"]);
}

// ============================================================================
// Binary queries
// ============================================================================

#[test]
fn tier5_and_or() {
    let model = scenario_model();
    // Doc1 only has the plural form
    assert_eq!(model.boolean_query("superconductor AND magnet"), docs(&["Doc2"]));
    assert_eq!(
        model.boolean_query("superconductor OR magnet"),
        docs(&["Doc1", "Doc2"])
    );
    assert_eq!(model.boolean_query("temperatures AND field"), docs(&["Doc1"]));
    assert_eq!(
        model.boolean_query("resistance OR repelled"),
        docs(&["Doc1", "Doc2"])
    );
}

#[test]
fn tier5_not_variants() {
    let model = scenario_model();
    assert_eq!(model.boolean_query("magnet NOT superconductor"), docs(&["Doc1"]));
    assert!(model.boolean_query("superconductor NOT magnet").is_empty());
    assert_eq!(model.boolean_query("NOT superconductor"), docs(&["Doc1"]));
    assert!(model.boolean_query("superconductor AND NOT magnet").is_empty());
    assert_eq!(
        model.boolean_query("superconductor OR NOT magnet"),
        docs(&["Doc2"])
    );
    assert_eq!(model.boolean_query("levitated NOT small"), docs(&["Doc1"]));
}

#[test]
fn tier5_xor() {
    let model = scenario_model();
    assert_eq!(model.boolean_query("superconductor XOR magnet"), docs(&["Doc1"]));
    assert_eq!(
        model.boolean_query("superconductor XOR superconductors"),
        docs(&["Doc1", "Doc2"])
    );
}

#[test]
fn tier5_wildcards_inside_binary_queries() {
    let model = scenario_model();
    assert_eq!(model.boolean_query("super* AND magnet"), docs(&["Doc1", "Doc2"]));
    assert_eq!(model.boolean_query("temp* OR field"), docs(&["Doc1"]));
    assert_eq!(model.boolean_query("*ed AND NOT small"), docs(&["Doc1"]));
}

// ============================================================================
// Malformed queries
// ============================================================================

#[test]
fn tier5_malformed_queries() {
    let model = scenario_model();
    assert_eq!(model.try_boolean_query("   "), Err(QueryError::Empty));
    assert_eq!(
        model.try_boolean_query("magnet AND"),
        Err(QueryError::MissingOperand { operator: "AND" })
    );
    assert_eq!(
        model.try_boolean_query("magnet AND field OR held"),
        Err(QueryError::MultipleOperators {
            first: "AND",
            second: "OR"
        })
    );
    assert!(model.boolean_query("magnet AND field OR held").is_empty());
}
