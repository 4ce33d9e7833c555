//! Property-based tests for the scoring engine
//!
//! - Category scores stay on the 0-10 scale when weights sum to one
//! - Anyone rated on the 0-10 scale against normalized weights lands in a
//!   mapped zone, including a perfect 10 on every hot criterion
//! - Zone classification is total and deterministic
//! - Normalization always produces a valid category

use proptest::prelude::*;
use zonemap::config::{ScoringMode, ScoringPolicy, WeightPolicy};
use zonemap::{
    category_score, classify_zone, is_valid_sum, Category, CriteriaSet, Criterion, CriterionId,
    ScoreMap, Session, Zone,
};

/// Positive raw weights, rescaled to sum to 1.0
fn unit_weights() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01f64..10.0, 1..8).prop_map(|raw| {
        let total: f64 = raw.iter().sum();
        raw.into_iter().map(|w| w / total).collect()
    })
}

fn criteria_for(weights: &[f64]) -> Vec<Criterion> {
    weights
        .iter()
        .enumerate()
        .map(|(i, weight)| Criterion {
            id: CriterionId::new(format!("hot-{i}")),
            name: format!("criterion {i}"),
            weight: *weight,
            category: Category::Hot,
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_category_score_stays_in_range(
        weights in unit_weights(),
        ratings in prop::collection::vec(0.0f64..=10.0, 8),
        weighted in any::<bool>(),
    ) {
        let criteria = criteria_for(&weights);
        let scores: ScoreMap = criteria
            .iter()
            .zip(&ratings)
            .map(|(c, r)| (c.id.clone(), *r))
            .collect();
        let policy = ScoringPolicy {
            mode: if weighted { ScoringMode::Weighted } else { ScoringMode::Normalized },
            ..Default::default()
        };

        let score = category_score(&scores, &criteria, &policy);
        prop_assert!((0.0..=10.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn prop_rated_people_always_land_in_a_zone(
        hot_raw in prop::collection::vec(0.01f64..1.0, 1..6),
        crazy_raw in prop::collection::vec(0.01f64..1.0, 1..6),
        perfect_hot in any::<bool>(),
        ratings in prop::collection::vec(0.0f64..=10.0, 12),
        weighted in any::<bool>(),
    ) {
        let policy = ScoringPolicy {
            mode: if weighted { ScoringMode::Weighted } else { ScoringMode::Normalized },
            ..Default::default()
        };
        let mut session = Session::new(WeightPolicy::default(), policy);
        for (i, weight) in hot_raw.iter().enumerate() {
            session.insert_criterion(None, &format!("hot {i}"), *weight, Category::Hot).unwrap();
        }
        for (i, weight) in crazy_raw.iter().enumerate() {
            session.insert_criterion(None, &format!("crazy {i}"), *weight, Category::Crazy).unwrap();
        }
        session.normalize_all();

        let scores: ScoreMap = session
            .criteria()
            .iter()
            .zip(&ratings)
            .map(|(c, r)| {
                let rating = if perfect_hot && c.category == Category::Hot { 10.0 } else { *r };
                (c.id.clone(), rating)
            })
            .collect();
        let id = session.add_person_with_scores("Alex", scores).unwrap();
        let person = session.person(&id).unwrap();

        prop_assert!((0.0..=10.0).contains(&person.hot_score()), "hot {}", person.hot_score());
        prop_assert!((0.0..=10.0).contains(&person.crazy_score()), "crazy {}", person.crazy_score());
        prop_assert_ne!(person.zone(), Zone::Unknown);
        if perfect_hot {
            prop_assert_eq!(person.hot_score(), 10.0);
        }
    }

    #[test]
    fn prop_classification_is_deterministic(x in -2.0f64..12.0, y in -2.0f64..12.0) {
        let zone = classify_zone(x, y);
        prop_assert_eq!(zone, classify_zone(x, y));

        let inside = (0.0..=10.0).contains(&x) && (0.0..=10.0).contains(&y);
        prop_assert_eq!(zone != Zone::Unknown, inside);
    }

    #[test]
    fn prop_normalize_yields_valid_category(raw in prop::collection::vec(0.01f64..5.0, 1..10)) {
        let mut set = CriteriaSet::default();
        for (i, weight) in raw.iter().enumerate() {
            set.insert(None, &format!("c{i}"), *weight, Category::Crazy).unwrap();
        }
        prop_assert!(set.normalize(Category::Crazy));
        prop_assert!(is_valid_sum(set.total_weight(Category::Crazy)));
    }
}
