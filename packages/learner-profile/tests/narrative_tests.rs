//! End-to-end: questionnaire -> profile -> preferences -> narrative.

use learner_profile::{
    construct_user_profile_string, narrative_hash, LearningPreferences, OnboardingResponses,
};

fn stored_preferences() -> LearningPreferences {
    serde_json::from_str(
        r#"{
            "role": "backend developer",
            "learningGoalText": "move into machine learning engineering",
            "learningGoals": ["PyTorch", "linear algebra"],
            "learningChallengesText": "finding time after work",
            "learningChallenges": ["calculus"],
            "preferredMaterialsRanked": ["interactive notebooks", "short videos", "papers"],
            "dailyTimeMinutes": 20
        }"#,
    )
    .unwrap()
}

#[test]
fn onboarding_flow_produces_full_narrative() {
    let responses = OnboardingResponses {
        conscientiousness: vec![7, 1, 7, 7, 1, 7, 1],
        emotional_stability: vec![4, 4, 4, 4, 4, 4, 4],
        self_efficacy: vec![2, 3, 2],
        mastery_orientation: 6.0,
        performance_orientation: 4.0,
    };
    let profile = responses.score().unwrap();
    let prefs = stored_preferences().with_personality_profile(profile);

    let narrative = construct_user_profile_string(&prefs);

    let expected = "I am a backend developer. \
        I am highly disciplined, organized, and prefer structured, step-by-step learning paths. \
        I am not always confident in my abilities and benefit from foundational explanations and reassurance. \
        I am driven by a genuine desire to deeply understand and master the subject. \
        My specific goal is to: move into machine learning engineering. \
        I am actively looking to acquire knowledge in: PyTorch, linear algebra. \
        However, I am currently struggling with: finding time after work. \
        I face specific technical hurdles with: calculus. \
        I learn best when the content is presented as: interactive notebooks, short videos, papers. \
        I prefer concise learning sessions that get to the point within half an hour. \
        Keywords: PyTorch linear algebra calculus.";

    assert_eq!(narrative, expected);
}

#[test]
fn narrative_is_deterministic() {
    let prefs = stored_preferences();

    let first = construct_user_profile_string(&prefs);
    let second = construct_user_profile_string(&prefs);

    assert_eq!(first, second);
    assert_eq!(narrative_hash(&first), narrative_hash(&second));
}

#[test]
fn changed_preferences_change_the_hash() {
    let before = construct_user_profile_string(&stored_preferences());
    let after = construct_user_profile_string(&stored_preferences().with_daily_time_minutes(90));

    assert_ne!(narrative_hash(&before), narrative_hash(&after));
}

#[test]
fn narrative_never_has_padding() {
    let prefs = LearningPreferences::new()
        .with_role("designer")
        .with_daily_time_minutes(45);

    let narrative = construct_user_profile_string(&prefs);

    assert_eq!(narrative, "I am a designer.");
    assert_eq!(narrative, narrative.trim());
    assert!(!narrative.contains("  "));
}

#[test]
fn list_order_is_preserved() {
    let prefs = LearningPreferences::new()
        .with_goals(["zeta", "alpha", "mu"])
        .with_preferred_materials(["podcasts", "books"]);

    let narrative = construct_user_profile_string(&prefs);

    assert!(narrative.contains("knowledge in: zeta, alpha, mu."));
    assert!(narrative.contains("presented as: podcasts, books."));
    assert!(narrative.ends_with("Keywords: zeta alpha mu."));
}
