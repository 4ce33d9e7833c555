use pretty_assertions::assert_eq;
use zonemap::config::{ScoringMode, ScoringPolicy, WeightPolicy};
use zonemap::{find_template, Category, Error, Session, Step, Zone};

fn rate(session: &mut Session, person: &str, category: Category, score: f64) {
    let id = session.find_person(person).unwrap().id.clone();
    let criteria = session.criteria().criteria(category).to_vec();
    for criterion in criteria {
        session.update_score(&id, &criterion.id, score).unwrap();
    }
}

#[test]
fn test_full_wizard_walkthrough() {
    let mut session = Session::default();
    assert_eq!(session.step(), Step::Intro);
    assert_eq!(session.step().progress(), Some((1, 5)));

    session.advance().unwrap();
    session.apply_template(find_template("Classic Dating").unwrap());
    session.advance().unwrap();
    assert_eq!(session.advance().unwrap(), Step::CrazyCriteria);
    assert_eq!(session.advance().unwrap(), Step::People);

    for name in ["Alex", "Sam", "Jordan"] {
        session.add_person(name).unwrap();
    }
    rate(&mut session, "Alex", Category::Hot, 9.0);
    rate(&mut session, "Alex", Category::Crazy, 3.0);
    rate(&mut session, "Sam", Category::Hot, 2.0);
    rate(&mut session, "Sam", Category::Crazy, 7.0);
    rate(&mut session, "Jordan", Category::Hot, 6.0);
    rate(&mut session, "Jordan", Category::Crazy, 9.0);

    assert_eq!(session.advance().unwrap(), Step::Results);
    assert_eq!(session.step().progress(), None);

    let zones: Vec<_> = session.people().iter().map(|p| p.zone()).collect();
    assert_eq!(zones, vec![Zone::WifeZone, Zone::NoGoZone, Zone::DangerZone]);

    let insights = session.insights();
    assert_eq!(insights.wife_zone, 1);
    assert_eq!(insights.danger_zone, 1);
    assert!(!insights.needs_more_people);

    session.reset();
    assert_eq!(session.step(), Step::Intro);
    assert!(session.people().is_empty());
}

#[test]
fn test_removed_criterion_stops_counting_for_everyone() {
    let mut session = Session::default();
    let looks = session
        .insert_criterion(None, "looks", 0.5, Category::Hot)
        .unwrap();
    session
        .insert_criterion(None, "humor", 0.5, Category::Hot)
        .unwrap();
    session.add_person("Alex").unwrap();
    session.add_person("Sam").unwrap();
    for name in ["Alex", "Sam"] {
        let id = session.find_person(name).unwrap().id.clone();
        session.update_score(&id, &looks, 10.0).unwrap();
    }

    session.remove_criterion(&looks).unwrap();
    for person in session.people() {
        assert_eq!(person.score(&looks), Some(10.0));
        assert!((person.hot_score() - 5.0).abs() < 1e-9);
    }
}

#[test]
fn test_normalized_mode_matches_weighted_mode_on_rescaled_weights() {
    let normalized = ScoringPolicy {
        mode: ScoringMode::Normalized,
        ..Default::default()
    };
    let weighted = ScoringPolicy {
        mode: ScoringMode::Weighted,
        ..Default::default()
    };

    let mut a = Session::new(WeightPolicy::default(), normalized);
    let mut b = Session::new(WeightPolicy::default(), weighted);
    for (session, weight) in [(&mut a, 0.2), (&mut b, 0.5)] {
        let looks = session
            .insert_criterion(None, "looks", weight, Category::Hot)
            .unwrap();
        let humor = session
            .insert_criterion(None, "humor", weight, Category::Hot)
            .unwrap();
        let id = session.add_person("Alex").unwrap();
        session.update_score(&id, &looks, 8.0).unwrap();
        session.update_score(&id, &humor, 4.0).unwrap();
    }

    let hot_a = a.people()[0].hot_score();
    let hot_b = b.people()[0].hot_score();
    assert!((hot_a - 6.0).abs() < 1e-9);
    assert!((hot_a - hot_b).abs() < 1e-9);
}

#[test]
fn test_perfect_hot_ratings_land_on_the_map_after_normalizing() {
    for mode in [ScoringMode::Normalized, ScoringMode::Weighted] {
        let policy = ScoringPolicy {
            mode,
            ..Default::default()
        };
        let mut session = Session::new(WeightPolicy::default(), policy);
        session
            .insert_criterion(None, "looks", 0.2, Category::Hot)
            .unwrap();
        session
            .insert_criterion(None, "humor", 0.09, Category::Hot)
            .unwrap();
        session
            .insert_criterion(None, "drama", 1.0, Category::Crazy)
            .unwrap();
        session.normalize_all();
        session.add_person("Alex").unwrap();
        rate(&mut session, "Alex", Category::Hot, 10.0);
        rate(&mut session, "Alex", Category::Crazy, 3.0);

        let alex = session.find_person("Alex").unwrap();
        assert_eq!(alex.hot_score(), 10.0, "{mode:?}");
        assert_eq!(alex.zone(), Zone::WifeZone, "{mode:?}");
    }
}

#[test]
fn test_weighted_mode_does_not_rescale_partial_weights() {
    let mut session = Session::new(
        WeightPolicy::default(),
        ScoringPolicy {
            mode: ScoringMode::Weighted,
            ..Default::default()
        },
    );
    let looks = session
        .insert_criterion(None, "looks", 0.5, Category::Hot)
        .unwrap();
    let id = session.add_person("Alex").unwrap();
    session.update_score(&id, &looks, 8.0).unwrap();
    assert!((session.person(&id).unwrap().hot_score() - 4.0).abs() < 1e-9);
}

#[test]
fn test_wizard_refuses_invalid_weights() {
    let mut session = Session::default();
    session.advance().unwrap();
    session.advance().unwrap();
    session.add_criterion(Category::Hot, "looks").unwrap();
    let err = session.advance().unwrap_err();
    assert!(matches!(err, Error::InvalidWeights { .. }));
    assert_eq!(
        err.to_string(),
        "Hot criteria weights must sum to 100% (currently 10%)"
    );
    assert_eq!(session.step(), Step::HotCriteria);
}
