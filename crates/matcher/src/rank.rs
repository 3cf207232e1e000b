//! Batch ranking over a fully materialized list of scored records.

use std::cmp::Ordering;

use crate::types::MatchRecord;

/// Total preorder used in batch mode, best first:
///
/// 1. perfect records before imperfect ones;
/// 2. between two perfect records, fewer recipe ingredients first;
/// 3. more matched user tokens first;
/// 4. fewer missing ingredients first.
///
/// Records equal on all four keys compare `Equal`.
pub fn batch_order(a: &MatchRecord, b: &MatchRecord) -> Ordering {
    b.perfect
        .cmp(&a.perfect)
        .then_with(|| {
            if a.perfect && b.perfect {
                a.ingredient_count.cmp(&b.ingredient_count)
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| b.match_count.cmp(&a.match_count))
        .then_with(|| a.missing_count.cmp(&b.missing_count))
}

/// Stable sort by [`batch_order`]; ties keep their input order.
pub fn rank(mut records: Vec<MatchRecord>) -> Vec<MatchRecord> {
    records.sort_by(batch_order);
    records
}

#[cfg(test)]
mod tests {
    use ingest::RecipeCandidate;

    use super::*;

    fn record(
        id: &str,
        perfect: bool,
        ingredients: usize,
        matched: usize,
        missing: usize,
    ) -> MatchRecord {
        MatchRecord {
            candidate: RecipeCandidate::new(id, id, Vec::<String>::new()),
            matched_user: Vec::new(),
            extra_user: Vec::new(),
            missing_ingredients: Vec::new(),
            match_count: matched,
            missing_count: missing,
            perfect,
            ingredient_count: ingredients,
        }
    }

    fn ids(records: &[MatchRecord]) -> Vec<&str> {
        records.iter().map(|r| r.candidate.id.as_str()).collect()
    }

    #[test]
    fn perfect_beats_imperfect_regardless_of_counts() {
        let perfect = record("p", true, 2, 1, 0);
        let busy = record("b", false, 10, 8, 2);
        assert_eq!(batch_order(&perfect, &busy), Ordering::Less);
        assert_eq!(batch_order(&busy, &perfect), Ordering::Greater);
    }

    #[test]
    fn fewer_ingredients_wins_among_perfect() {
        let small = record("s", true, 2, 2, 0);
        let large = record("l", true, 5, 5, 0);
        assert_eq!(batch_order(&small, &large), Ordering::Less);
    }

    #[test]
    fn ingredient_count_ignored_for_imperfect() {
        let a = record("a", false, 2, 3, 1);
        let b = record("b", false, 9, 3, 1);
        assert_eq!(batch_order(&a, &b), Ordering::Equal);
    }

    #[test]
    fn more_matches_then_fewer_missing() {
        let more = record("m", false, 6, 4, 2);
        let fewer = record("f", false, 3, 2, 1);
        assert_eq!(batch_order(&more, &fewer), Ordering::Less);

        let less_missing = record("x", false, 4, 3, 1);
        let more_missing = record("y", false, 6, 3, 3);
        assert_eq!(batch_order(&less_missing, &more_missing), Ordering::Less);
    }

    #[test]
    fn comparator_is_reflexive_antisymmetric_and_transitive() {
        let mut samples = Vec::new();
        for perfect in [false, true] {
            for ingredients in 0..3 {
                for matched in 0..3 {
                    for missing in 0..3 {
                        if perfect && missing > 0 {
                            continue;
                        }
                        samples.push(record("s", perfect, ingredients, matched, missing));
                    }
                }
            }
        }

        for a in &samples {
            assert_eq!(batch_order(a, a), Ordering::Equal);
            for b in &samples {
                assert_eq!(batch_order(a, b), batch_order(b, a).reverse());
                for c in &samples {
                    if batch_order(a, b) != Ordering::Greater
                        && batch_order(b, c) != Ordering::Greater
                    {
                        assert_ne!(batch_order(a, c), Ordering::Greater);
                    }
                }
            }
        }
    }

    #[test]
    fn rank_orders_by_priority() {
        let ranked = rank(vec![
            record("imperfect-low", false, 4, 1, 3),
            record("perfect-big", true, 6, 3, 0),
            record("imperfect-high", false, 5, 4, 1),
            record("perfect-small", true, 2, 1, 0),
        ]);
        assert_eq!(
            ids(&ranked),
            vec!["perfect-small", "perfect-big", "imperfect-high", "imperfect-low"]
        );
    }

    #[test]
    fn rank_is_stable_for_equal_keys() {
        let ranked = rank(vec![
            record("first", false, 3, 2, 1),
            record("best", false, 3, 3, 1),
            record("second", false, 7, 2, 1),
            record("third", false, 3, 2, 1),
        ]);
        assert_eq!(ids(&ranked), vec!["best", "first", "second", "third"]);
    }

    #[test]
    fn rank_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
