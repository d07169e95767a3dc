//! Scoring properties over the public API.

use learner_profile::{
    calculate_average, compute_personality_profile, reverse_score, score_conscientiousness,
    score_emotional_stability, score_self_efficacy, validate_scores, ProfileField, ScoringError,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn reverse_score_is_an_involution(x in 1i32..=7) {
        prop_assert_eq!(reverse_score(reverse_score(x).unwrap()).unwrap(), x);
    }

    #[test]
    fn reverse_score_rejects_below_range(x in i32::MIN..1) {
        prop_assert_eq!(reverse_score(x), Err(ScoringError::InvalidLikert { value: x }));
    }

    #[test]
    fn reverse_score_rejects_above_range(x in 8i32..=i32::MAX) {
        prop_assert_eq!(reverse_score(x), Err(ScoringError::InvalidLikert { value: x }));
    }

    #[test]
    fn average_of_single_value_is_the_value(x in 1i32..=7) {
        prop_assert_eq!(calculate_average(&[f64::from(x)]).unwrap(), f64::from(x));
    }

    #[test]
    fn average_has_at_most_two_decimals(values in prop::collection::vec(1i32..=7, 1..20)) {
        let floats: Vec<f64> = values.iter().map(|&v| f64::from(v)).collect();
        let average = calculate_average(&floats).unwrap();
        let scaled = average * 100.0;

        prop_assert!((scaled - scaled.round()).abs() < 1e-6);
        prop_assert!((1.0..=7.0).contains(&average));
    }

    #[test]
    fn valid_questionnaires_always_score_in_range(
        consc in prop::collection::vec(1i32..=7, 7),
        stability in prop::collection::vec(1i32..=7, 7),
        efficacy in prop::collection::vec(1i32..=7, 3),
        mastery in 1.0f64..=7.0,
        performance in 1.0f64..=7.0,
    ) {
        let profile = compute_personality_profile(&consc, &stability, &efficacy, mastery, performance)
            .unwrap();

        for (_, score) in profile.traits() {
            prop_assert!((1.0..=7.0).contains(&score));
        }
        prop_assert_eq!(profile.conscientiousness, score_conscientiousness(&consc).unwrap());
        prop_assert_eq!(profile.emotional_stability, score_emotional_stability(&stability).unwrap());
        prop_assert_eq!(profile.self_efficacy, score_self_efficacy(&efficacy).unwrap());
    }
}

#[test]
fn average_of_nothing_is_an_error() {
    assert_eq!(calculate_average(&[]), Err(ScoringError::EmptyInput));
}

#[test]
fn documented_reference_scores() {
    assert_eq!(calculate_average(&[3.0, 3.0, 4.0]).unwrap(), 3.33);
    assert_eq!(score_conscientiousness(&[7; 7]).unwrap(), 4.43);
    assert_eq!(score_conscientiousness(&[7, 1, 7, 7, 1, 7, 1]).unwrap(), 7.0);
    assert_eq!(score_emotional_stability(&[7, 1, 7, 1, 7, 1, 7]).unwrap(), 7.0);
    assert_eq!(score_self_efficacy(&[5, 6, 7]).unwrap(), 6.0);
}

#[test]
fn scorers_reject_wrong_lengths() {
    assert!(matches!(
        score_conscientiousness(&[4; 3]),
        Err(ScoringError::Length { expected: 7, actual: 3, .. })
    ));
    assert!(matches!(
        score_emotional_stability(&[]),
        Err(ScoringError::Length { expected: 7, actual: 0, .. })
    ));
    assert!(matches!(
        score_self_efficacy(&[4; 7]),
        Err(ScoringError::Length { expected: 3, actual: 7, .. })
    ));
}

#[test]
fn validate_scores_examples() {
    assert!(validate_scores(&[1, 7, 4]));
    assert!(!validate_scores(&[0, 7]));
    assert!(!validate_scores(&[1, 8]));
}

#[test]
fn invalid_conscientiousness_is_reported_first() {
    let err = compute_personality_profile(&[8, 1, 7, 7, 1, 7, 1], &[9; 7], &[9; 3], 0.0, 0.0)
        .unwrap_err();

    assert_eq!(
        err,
        ScoringError::InvalidProfileInput {
            field: ProfileField::Conscientiousness
        }
    );
    assert!(err.to_string().contains("conscientiousness"));
}
