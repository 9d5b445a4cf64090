//! Loading and behavior of questionnaire variant files.

use std::path::PathBuf;

use sole_source_screener::application::ScreeningWizard;
use sole_source_screener::domain::screening::{
    AmountTier, Questionnaire, RecommendationTier, ScreeningAnswer,
};
use sole_source_screener::ports::WizardEvent;

fn variant_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("questionnaires")
        .join(name)
}

fn answer(index: usize, yes: bool) -> WizardEvent {
    WizardEvent::ScreeningAnswered {
        index,
        answer: if yes {
            ScreeningAnswer::Yes
        } else {
            ScreeningAnswer::No
        },
    }
}

#[test]
fn standard_variant_file_matches_the_builtin() {
    let q = Questionnaire::from_yaml_file(&variant_path("standard.yaml")).unwrap();
    assert_eq!(q.question_count(), 8);
    assert_eq!(q.required_count, 6);
    assert!(q.gating_question.is_none());
    assert_eq!(q.thresholds.len(), 2);
}

#[test]
fn gated_variant_file_loads_with_market_check_gate() {
    let q = Questionnaire::from_yaml_file(&variant_path("gated.yaml")).unwrap();
    assert_eq!(q.question_count(), 10);
    assert_eq!(q.required_count, 6);
    assert_eq!(q.gating_question, Some(4));
}

#[test]
fn gated_variant_caps_the_tier_without_a_market_check() {
    let q = Questionnaire::from_yaml_file(&variant_path("gated.yaml")).unwrap();
    let mut w = ScreeningWizard::new(q).unwrap();
    w.apply(WizardEvent::AmountSelected {
        tier: AmountTier::TenKTo200k,
    })
    .unwrap();
    w.apply(WizardEvent::Next).unwrap();

    // Five affirmatives, but the market-check gate (index 4) answered no.
    for i in 0..6 {
        w.apply(answer(i, i != 4)).unwrap();
    }
    assert_eq!(w.evaluate().tier, RecommendationTier::NotLikely);

    // Flipping the gate restores the strong case.
    w.apply(answer(4, true)).unwrap();
    assert_eq!(w.evaluate().tier, RecommendationTier::StrongCase);
}

#[test]
fn gated_variant_informational_questions_stay_unscored() {
    let q = Questionnaire::from_yaml_file(&variant_path("gated.yaml")).unwrap();
    let mut w = ScreeningWizard::new(q).unwrap();
    w.apply(WizardEvent::AmountSelected {
        tier: AmountTier::TenKTo200k,
    })
    .unwrap();
    w.apply(WizardEvent::Next).unwrap();

    for i in 0..6 {
        w.apply(answer(i, true)).unwrap();
    }
    // Affirmative trailing answers change nothing.
    let before = w.evaluate();
    for i in 6..10 {
        w.apply(answer(i, true)).unwrap();
    }
    assert_eq!(w.evaluate(), before);

    // And navigation was never blocked by them.
    assert!(w.next_enabled());
}

#[test]
fn variant_with_broken_thresholds_is_rejected() {
    let yaml = r#"
name: Broken
questions:
  - text: "Q1?"
  - text: "Q2?"
required_count: 2
thresholds:
  - min_affirmative: 1
    tier: weak_case
  - min_affirmative: 2
    tier: strong_case
"#;
    assert!(Questionnaire::from_yaml_str(yaml).is_err());
}
