//! End-to-end wizard flows through the application layer and the bundled
//! adapters.

use sole_source_screener::adapters::export::{write_document, MarkdownExporter, PlainTextExporter};
use sole_source_screener::adapters::renderer::ScriptedRenderer;
use sole_source_screener::application::ScreeningWizard;
use sole_source_screener::domain::screening::{
    AmountTier, RecommendationTier, ScreeningAnswer, WizardStep, STANDARD_QUESTIONNAIRE,
};
use sole_source_screener::ports::WizardEvent;

fn wizard() -> ScreeningWizard {
    ScreeningWizard::new(STANDARD_QUESTIONNAIRE.clone()).expect("standard variant is valid")
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
fn strong_case_flow_exports_the_expected_summary() {
    let mut w = wizard();
    w.apply(WizardEvent::AmountSelected {
        tier: AmountTier::TenKTo200k,
    })
    .unwrap();
    w.apply(WizardEvent::Next).unwrap();

    for (i, yes) in [true, true, true, true, true, false].iter().enumerate() {
        w.apply(answer(i, *yes)).unwrap();
    }
    w.apply(WizardEvent::Next).unwrap();
    w.apply(WizardEvent::Acknowledged { accepted: true }).unwrap();
    w.apply(WizardEvent::Next).unwrap();

    assert_eq!(w.current_step(), WizardStep::Result);
    let rec = w.evaluate();
    assert_eq!(rec.tier, RecommendationTier::StrongCase);
    assert!(rec.message.contains("strong case"));

    let doc = w.export(&PlainTextExporter::new(), "screening").unwrap();
    let text = doc.content_str().to_string();
    assert!(text
        .lines()
        .any(|l| l == "Final Result: Strong Case for Sole Source"));
    assert!(text.contains("Final determination notice accepted: Yes"));
}

#[test]
fn under_threshold_fast_exit_skips_screening_and_acknowledgment() {
    let mut w = wizard();
    w.apply(WizardEvent::AmountSelected {
        tier: AmountTier::LessThan10k,
    })
    .unwrap();
    w.apply(WizardEvent::Next).unwrap();

    assert_eq!(w.current_step(), WizardStep::Result);
    assert_eq!(
        w.evaluate().tier,
        RecommendationTier::NotSoleSourceDelegated
    );
}

#[test]
fn next_stays_disabled_until_each_step_is_complete() {
    let mut w = wizard();

    // Amount step: nothing selected.
    assert!(!w.apply(WizardEvent::Next).unwrap());
    assert_eq!(w.current_step(), WizardStep::Amount);

    w.apply(WizardEvent::AmountSelected {
        tier: AmountTier::Above200k,
    })
    .unwrap();
    w.apply(WizardEvent::Next).unwrap();
    assert_eq!(w.current_step(), WizardStep::Screening);

    // Screening step: one scored question left unanswered.
    for i in 0..5 {
        w.apply(answer(i, false)).unwrap();
    }
    w.apply(WizardEvent::Next).unwrap();
    assert_eq!(w.current_step(), WizardStep::Screening);

    w.apply(answer(5, false)).unwrap();
    w.apply(WizardEvent::Next).unwrap();
    assert_eq!(w.current_step(), WizardStep::Acknowledge);

    // Acknowledge step: box not ticked.
    w.apply(WizardEvent::Next).unwrap();
    assert_eq!(w.current_step(), WizardStep::Acknowledge);
}

#[test]
fn back_and_forward_round_trip_preserves_all_answers() {
    let mut w = wizard();
    w.apply(WizardEvent::AmountSelected {
        tier: AmountTier::TenKTo200k,
    })
    .unwrap();
    w.apply(WizardEvent::Next).unwrap();
    for (i, yes) in [true, false, true, false, true, true].iter().enumerate() {
        w.apply(answer(i, *yes)).unwrap();
    }
    w.apply(WizardEvent::Next).unwrap();
    assert_eq!(w.current_step(), WizardStep::Acknowledge);

    let session_before = w.session().clone();
    w.apply(WizardEvent::Previous).unwrap();
    w.apply(WizardEvent::Previous).unwrap();
    assert_eq!(w.current_step(), WizardStep::Amount);
    w.apply(WizardEvent::Next).unwrap();
    w.apply(WizardEvent::Next).unwrap();

    assert_eq!(w.current_step(), WizardStep::Acknowledge);
    assert_eq!(w.session(), &session_before);
}

#[test]
fn incomplete_session_exports_with_placeholders() {
    let w = wizard();
    let doc = w.export(&PlainTextExporter::new(), "early").unwrap();
    let text = doc.content_str().to_string();

    assert!(text.contains("Estimated amount: N/A"));
    assert!(text.contains("Final Result: N/A"));
}

#[test]
fn scripted_run_drives_the_wizard_to_completion() {
    let mut events = vec![
        WizardEvent::AmountSelected {
            tier: AmountTier::TenKTo200k,
        },
        WizardEvent::Next,
    ];
    for i in 0..6 {
        events.push(answer(i, i < 5));
    }
    events.push(WizardEvent::Next);
    events.push(WizardEvent::Acknowledged { accepted: true });
    events.push(WizardEvent::Next);

    let mut renderer = ScriptedRenderer::new(events);
    let mut w = wizard();
    w.run(&mut renderer);

    assert_eq!(w.current_step(), WizardStep::Result);
    let last = renderer.shown().last().unwrap();
    assert_eq!(last.step, WizardStep::Result);
    assert!(!last.next_enabled);
}

#[test]
fn exported_document_round_trips_through_the_filesystem() {
    let mut w = wizard();
    w.apply(WizardEvent::AmountSelected {
        tier: AmountTier::LessThan10k,
    })
    .unwrap();
    w.apply(WizardEvent::Next).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let doc = w.export(&MarkdownExporter::new(), "screening").unwrap();
    let path = write_document(&doc, dir.path()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("**Final Result:** Sole Source Not Required"));
    assert_eq!(path.file_name().unwrap(), "screening.md");
}
