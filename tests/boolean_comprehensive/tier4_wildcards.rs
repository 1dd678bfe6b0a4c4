//! Tier 4: Wildcards
//!
//! Every indexed term must be recoverable through each supported wildcard
//! shape, and wildcard results must agree with a brute-force scan.

use super::test_utils::*;
use permudex::BooleanModel;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn indexed_terms(model: &BooleanModel) -> Vec<String> {
    model
        .dump_index()
        .into_iter()
        .map(|(t, _)| t.to_string())
        .collect()
}

/// Brute-force reference for `head*tail`
fn brute_force(terms: &[String], head: &str, tail: &str) -> BTreeSet<String> {
    terms
        .iter()
        .filter(|t| t.len() >= head.len() + tail.len() && t.starts_with(head) && t.ends_with(tail))
        .cloned()
        .collect()
}

#[test]
fn tier4_scenario_prefixes_round_trip() {
    let model = scenario_model();
    for term in indexed_terms(&model) {
        for k in 1..=term.len() {
            let pattern = format!("{}*", &term[..k]);
            assert!(
                model.expand_term(&pattern).contains(&term),
                "{} should match {}",
                pattern,
                term
            );
        }
    }
}

#[test]
fn tier4_scenario_suffixes_round_trip() {
    let model = scenario_model();
    for term in indexed_terms(&model) {
        for k in 0..term.len() {
            let pattern = format!("*{}", &term[k..]);
            assert!(
                model.expand_term(&pattern).contains(&term),
                "{} should match {}",
                pattern,
                term
            );
        }
    }
}

#[test]
fn tier4_scenario_infixes_round_trip() {
    let model = scenario_model();
    for term in indexed_terms(&model) {
        for i in 1..term.len() {
            for j in i..term.len() {
                let pattern = format!("{}*{}", &term[..i], &term[j..]);
                assert!(
                    model.expand_term(&pattern).contains(&term),
                    "{} should match {}",
                    pattern,
                    term
                );
            }
        }
    }
}

#[test]
fn tier4_star_matches_everything() {
    let model = scenario_model();
    let all: BTreeSet<String> = indexed_terms(&model).into_iter().collect();
    assert_eq!(model.expand_term("*"), all);
    assert_eq!(&model.resolve_term("*"), model.doc_ids());
}

#[test]
fn tier4_prefix_does_not_match_inner_substring() {
    let mut model = BooleanModel::new();
    model.add_document("d1", "xsuper");
    model.add_document("d2", "superb");
    let matched: Vec<String> = model.expand_term("super*").into_iter().collect();
    assert_eq!(matched, vec!["superb"]);
}

#[test]
fn tier4_overlapping_infix_needs_room() {
    let mut model = BooleanModel::new();
    model.add_document("d1", "aba ab");
    // "ab*ba" needs at least four letters
    assert!(model.expand_term("ab*ba").is_empty());
    let matched: Vec<String> = model.expand_term("a*a").into_iter().collect();
    assert_eq!(matched, vec!["aba"]);
}

#[test]
fn tier4_multiple_wildcards_are_unsupported() {
    let model = scenario_model();
    for pattern in ["*magnet*", "s*p*r", "**", "*a*"] {
        assert!(model.expand_term(pattern).is_empty(), "{}", pattern);
        assert!(model.resolve_term(pattern).is_empty(), "{}", pattern);
    }
}

proptest! {
    #[test]
    fn tier4_wildcards_match_brute_force(
        corpus in corpus_strategy(),
        head in "[b-f]{0,2}",
        tail in "[b-f]{0,2}",
    ) {
        let model = model_from(&corpus);
        let terms = indexed_terms(&model);
        let pattern = format!("{}*{}", head, tail);
        prop_assert_eq!(model.expand_term(&pattern), brute_force(&terms, &head, &tail));
    }

    #[test]
    fn tier4_wildcard_postings_are_union_of_matches(
        corpus in corpus_strategy(),
        head in "[b-f]{1,2}",
    ) {
        let model = model_from(&corpus);
        let pattern = format!("{}*", head);
        let mut expected = permudex::DocSet::new();
        for term in model.expand_term(&pattern) {
            expected.extend(model.resolve_term(&term));
        }
        prop_assert_eq!(model.resolve_term(&pattern), expected);
    }
}
