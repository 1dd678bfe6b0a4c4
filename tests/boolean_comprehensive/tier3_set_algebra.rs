//! Tier 3: Set Algebra
//!
//! Operator identities checked through the query surface, so parsing,
//! term resolution and the set operations are exercised together.

use super::test_utils::*;
use permudex::DocSet;
use permudex_search::ops;
use proptest::prelude::*;

fn q(model: &permudex::BooleanModel, a: &str, op: &str, b: &str) -> DocSet {
    model.boolean_query(&format!("{} {} {}", a, op, b))
}

proptest! {
    #[test]
    fn tier3_and_xor_partition_or(
        corpus in corpus_strategy(),
        a in "[b-f]{1,2}",
        b in "[b-f]{1,2}",
    ) {
        let model = model_from(&corpus);
        let and = q(&model, &a, "AND", &b);
        let xor = q(&model, &a, "XOR", &b);
        let or = q(&model, &a, "OR", &b);

        prop_assert!(and.is_disjoint(&xor));
        prop_assert_eq!(ops::union(&and, &xor), or);
    }

    #[test]
    fn tier3_and_not_splits_left_operand(
        corpus in corpus_strategy(),
        a in "[b-f]{1,2}",
        b in "[b-f]{1,2}",
    ) {
        let model = model_from(&corpus);
        let and = q(&model, &a, "AND", &b);
        let and_not = q(&model, &a, "AND NOT", &b);

        prop_assert!(and.is_disjoint(&and_not));
        prop_assert_eq!(ops::union(&and, &and_not), model.resolve_term(&a));
        // Infix NOT is a difference too
        prop_assert_eq!(q(&model, &a, "NOT", &b), and_not);
    }

    #[test]
    fn tier3_not_complements_within_universe(corpus in corpus_strategy(), a in "[b-f]{1,2}") {
        let model = model_from(&corpus);
        let positive = model.resolve_term(&a);
        let negative = model.boolean_query(&format!("NOT {}", a));

        prop_assert!(positive.is_disjoint(&negative));
        prop_assert_eq!(&ops::union(&positive, &negative), model.doc_ids());
        // Trailing NOT means the same thing
        prop_assert_eq!(model.boolean_query(&format!("{} NOT", a)), negative.clone());
        // Double complement restores the operand
        prop_assert_eq!(ops::complement(model.doc_ids(), &negative), positive);
    }

    #[test]
    fn tier3_or_not_is_union_with_complement(
        corpus in corpus_strategy(),
        a in "[b-f]{1,2}",
        b in "[b-f]{1,2}",
    ) {
        let model = model_from(&corpus);
        let expected = ops::union(
            &model.resolve_term(&a),
            &model.boolean_query(&format!("NOT {}", b)),
        );
        prop_assert_eq!(q(&model, &a, "OR NOT", &b), expected);
    }

    #[test]
    fn tier3_symmetric_operators_commute(
        corpus in corpus_strategy(),
        a in "[b-f]{1,2}",
        b in "[b-f]{1,2}",
    ) {
        let model = model_from(&corpus);
        for op in ["AND", "OR", "XOR"] {
            prop_assert_eq!(q(&model, &a, op, &b), q(&model, &b, op, &a), "{}", op);
        }
    }

    #[test]
    fn tier3_de_morgan(
        corpus in corpus_strategy(),
        a in "[b-f]{1,2}",
        b in "[b-f]{1,2}",
    ) {
        let model = model_from(&corpus);
        let universe = model.doc_ids();
        let not_a = model.boolean_query(&format!("NOT {}", a));
        let not_b = model.boolean_query(&format!("NOT {}", b));

        prop_assert_eq!(
            ops::complement(universe, &q(&model, &a, "OR", &b)),
            ops::intersect(&not_a, &not_b)
        );
        prop_assert_eq!(
            ops::complement(universe, &q(&model, &a, "AND", &b)),
            ops::union(&not_a, &not_b)
        );
    }

    #[test]
    fn tier3_results_within_universe(
        corpus in corpus_strategy(),
        a in "[b-f]{1,2}\\*?",
        b in "[b-f]{1,2}",
    ) {
        let model = model_from(&corpus);
        for op in ["AND", "OR", "XOR", "NOT", "AND NOT", "OR NOT"] {
            prop_assert!(q(&model, &a, op, &b).is_subset(model.doc_ids()));
        }
    }
}

#[test]
fn tier3_operator_case_is_ignored() {
    let model = scenario_model();
    let upper = model.boolean_query("magnet AND NOT superconductor");
    assert_eq!(model.boolean_query("magnet and not superconductor"), upper);
    assert_eq!(model.boolean_query("magnet And Not superconductor"), upper);
}
