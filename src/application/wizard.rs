//! ScreeningWizard - the single entry point for renderer events.
//!
//! Owns the questionnaire, session, and sequencer for one wizard run. Every
//! state change flows through [`ScreeningWizard::apply`], which answers with
//! the derived next-enabled flag the front end binds its button state to.

use tracing::{debug, info};

use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::report::ScreeningReport;
use crate::domain::screening::{
    evaluate, Questionnaire, Recommendation, ScreeningSession, StepSequencer, WizardStep,
};
use crate::ports::{DocumentExporter, ExportError, ExportedDocument, WizardEvent, WizardRenderer};

use super::view::StepView;

/// One interactive screening run.
pub struct ScreeningWizard {
    questionnaire: Questionnaire,
    session: ScreeningSession,
    sequencer: StepSequencer,
}

impl ScreeningWizard {
    /// Creates a wizard for a validated questionnaire variant.
    pub fn new(questionnaire: Questionnaire) -> Result<Self, ValidationError> {
        questionnaire.validate()?;
        let session = ScreeningSession::new(&questionnaire);
        info!(
            variant = %questionnaire.name,
            session = %session.id(),
            "screening session started"
        );
        Ok(Self {
            questionnaire,
            session,
            sequencer: StepSequencer::new(),
        })
    }

    /// The active questionnaire variant.
    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// Read access to the accumulated answers.
    pub fn session(&self) -> &ScreeningSession {
        &self.session
    }

    /// The current wizard step.
    pub fn current_step(&self) -> WizardStep {
        self.sequencer.current()
    }

    /// The derived "next enabled" flag for the current step.
    pub fn next_enabled(&self) -> bool {
        self.sequencer.can_advance(&self.questionnaire, &self.session)
    }

    /// Applies one renderer event.
    ///
    /// Returns the next-enabled flag after the event. Navigation events that
    /// the guard refuses are silent no-ops, matching the disabled-button
    /// behavior of the form front ends.
    ///
    /// # Errors
    ///
    /// Only a `ScreeningAnswered` event with an out-of-range index fails.
    pub fn apply(&mut self, event: WizardEvent) -> Result<bool, DomainError> {
        debug!(?event, step = %self.current_step(), "wizard event");
        match event {
            WizardEvent::AmountSelected { tier } => {
                self.session.set_amount_tier(tier);
            }
            WizardEvent::ScreeningAnswered { index, answer } => {
                self.session.set_screening_answer(index, answer)?;
            }
            WizardEvent::JustificationToggled { tag } => {
                self.session.toggle_justification(tag);
            }
            WizardEvent::Acknowledged { accepted } => {
                self.session.set_acknowledgment(accepted);
            }
            WizardEvent::Next => {
                self.sequencer.advance(&self.questionnaire, &self.session);
            }
            WizardEvent::Previous => {
                self.sequencer.back();
            }
            WizardEvent::Restart => {
                self.restart();
            }
        }
        Ok(self.next_enabled())
    }

    /// Discards all answers and returns to the first step.
    pub fn restart(&mut self) {
        self.session = ScreeningSession::new(&self.questionnaire);
        self.sequencer.reset();
        info!(session = %self.session.id(), "screening session restarted");
    }

    /// The pure view of the current step.
    pub fn view(&self) -> StepView {
        StepView::build(&self.questionnaire, &self.session, &self.sequencer)
    }

    /// Evaluates the session as it stands. Pure and always available.
    pub fn evaluate(&self) -> Recommendation {
        evaluate(&self.questionnaire, &self.session)
    }

    /// Builds the report for the session.
    ///
    /// Before the result step the recommendation is withheld and the result
    /// section degrades to N/A placeholders.
    pub fn report(&self) -> ScreeningReport {
        let recommendation = if self.sequencer.is_finished() {
            Some(self.evaluate())
        } else {
            None
        };
        ScreeningReport::build(&self.questionnaire, &self.session, recommendation.as_ref())
    }

    /// Exports the report through the given exporter.
    pub fn export(
        &self,
        exporter: &dyn DocumentExporter,
        base_filename: &str,
    ) -> Result<ExportedDocument, ExportError> {
        if base_filename.trim().is_empty() {
            return Err(ExportError::invalid_filename("base filename is empty"));
        }
        let document = exporter.export(&self.report(), base_filename)?;
        info!(
            filename = %document.filename,
            format = %document.format,
            bytes = document.content.len(),
            "report exported"
        );
        Ok(document)
    }

    /// Drives a full run against a renderer: show the current step, apply
    /// the next event, repeat until the renderer ends the session.
    ///
    /// Out-of-range answer indexes from a misbehaving renderer are dropped
    /// rather than aborting the run.
    pub fn run(&mut self, renderer: &mut dyn WizardRenderer) {
        loop {
            let view = self.view();
            renderer.show(&view);
            let Some(event) = renderer.next_event() else {
                debug!("renderer ended the session");
                return;
            };
            if let Err(err) = self.apply(event) {
                debug!(%err, "event dropped");
            }
        }
    }
}
