//! Terminal renderer - a line-oriented front end for the wizard.
//!
//! Stands in for the browser page: prints the current step and reads
//! single-line commands from stdin. Unrecognized input re-prompts; end of
//! input ends the run.

use std::io::{BufRead, Write};

use crate::application::{StepBody, StepView};
use crate::domain::screening::{AmountTier, JustificationTag, ScreeningAnswer};
use crate::ports::{WizardEvent, WizardRenderer};

/// Line-oriented renderer over arbitrary reader/writer pairs.
///
/// Commands: `1`-`9` select an option on the amount step, `y<n>`/`x<n>`
/// answer question n yes/no, `j<n>` toggles justification n, `a` toggles the
/// acknowledgment, `n` next, `b` back, `r` restart, `q` quits.
pub struct TerminalRenderer<R, W> {
    input: R,
    output: W,
    current_view: Option<StepView>,
}

impl<R: BufRead, W: Write> TerminalRenderer<R, W> {
    /// Creates a renderer over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            current_view: None,
        }
    }

    fn print_view(&mut self, view: &StepView) -> std::io::Result<()> {
        let out = &mut self.output;
        writeln!(out)?;
        writeln!(
            out,
            "Step {} of {}: {} [{}]",
            view.step_number, view.step_count, view.title, view.progress
        )?;
        match &view.body {
            StepBody::Amount { tiers } => {
                writeln!(out, "What is the estimated dollar amount of your procurement?")?;
                for (i, tier) in tiers.iter().enumerate() {
                    let mark = if tier.selected { "x" } else { " " };
                    writeln!(out, "  [{}] {}. {}", mark, i + 1, tier.label)?;
                    if let Some(hint) = &tier.hint {
                        writeln!(out, "         {}", hint)?;
                    }
                }
            }
            StepBody::Screening {
                questions,
                justifications,
            } => {
                writeln!(out, "Answer each question (y<n> = yes, x<n> = no):")?;
                for (i, q) in questions.iter().enumerate() {
                    let note = if q.scored { "" } else { " (informational)" };
                    writeln!(out, "  {}. [{}] {}{}", i + 1, q.answer, q.text, note)?;
                }
                writeln!(out, "Justification reasons (j<n> toggles):")?;
                for (i, j) in justifications.iter().enumerate() {
                    let mark = if j.selected { "x" } else { " " };
                    writeln!(out, "  [{}] {}. {}", mark, i + 1, j.label)?;
                }
            }
            StepBody::Acknowledge { notice, accepted } => {
                let mark = if *accepted { "x" } else { " " };
                writeln!(out, "  [{}] a. {}", mark, notice)?;
            }
            StepBody::Result { recommendation } => {
                writeln!(out, "Result: {}", recommendation.title())?;
                writeln!(out, "{}", recommendation.message)?;
            }
        }
        let next = if view.next_enabled { "n = next" } else { "(complete this step to continue)" };
        let back = if view.back_enabled { ", b = back" } else { "" };
        writeln!(out, "{}{}  r = restart, q = quit", next, back)?;
        write!(out, "> ")?;
        out.flush()
    }

    fn parse(view: &StepView, line: &str) -> Option<WizardEvent> {
        let line = line.trim().to_lowercase();
        match line.as_str() {
            "n" => return Some(WizardEvent::Next),
            "b" => return Some(WizardEvent::Previous),
            "r" => return Some(WizardEvent::Restart),
            "a" => {
                if let StepBody::Acknowledge { accepted, .. } = &view.body {
                    return Some(WizardEvent::Acknowledged { accepted: !accepted });
                }
                return None;
            }
            _ => {}
        }
        if let StepBody::Amount { .. } = &view.body {
            if let Ok(number) = line.parse::<usize>() {
                let tier = AmountTier::ALL.get(number.checked_sub(1)?).copied()?;
                return Some(WizardEvent::AmountSelected { tier });
            }
        }
        if let StepBody::Screening { questions, .. } = &view.body {
            // Split on the first char, not the first byte; multibyte input
            // must fall through to the re-prompt.
            let mut chars = line.chars();
            let prefix = chars.next()?;
            let number: usize = chars.as_str().parse().ok()?;
            let index = number.checked_sub(1)?;
            match prefix {
                'y' | 'x' if index < questions.len() => {
                    let answer = if prefix == 'y' {
                        ScreeningAnswer::Yes
                    } else {
                        ScreeningAnswer::No
                    };
                    return Some(WizardEvent::ScreeningAnswered { index, answer });
                }
                'j' => {
                    let tag = JustificationTag::ALL.get(index).copied()?;
                    return Some(WizardEvent::JustificationToggled { tag });
                }
                _ => {}
            }
        }
        None
    }

    /// Remembers the last view so `next_event` can parse in context.
    fn last_view(&self) -> Option<&StepView> {
        self.current_view.as_ref()
    }
}

impl<R: BufRead, W: Write> WizardRenderer for TerminalRenderer<R, W> {
    fn show(&mut self, view: &StepView) {
        if self.print_view(view).is_err() {
            // A broken pipe ends the session on the next read.
        }
        self.current_view = Some(view.clone());
    }

    fn next_event(&mut self) -> Option<WizardEvent> {
        loop {
            let mut line = String::new();
            let read = self.input.read_line(&mut line).ok()?;
            if read == 0 || line.trim() == "q" {
                return None;
            }
            let view = self.last_view()?;
            if let Some(event) = Self::parse(view, &line) {
                return Some(event);
            }
            let _ = write!(self.output, "Unrecognized input, try again\n> ");
            let _ = self.output.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ScreeningWizard;
    use crate::domain::screening::{RecommendationTier, WizardStep, STANDARD_QUESTIONNAIRE};
    use std::io::Cursor;

    fn run_script(script: &str) -> (ScreeningWizard, String) {
        let mut wizard = ScreeningWizard::new(STANDARD_QUESTIONNAIRE.clone()).unwrap();
        let mut output = Vec::new();
        {
            let mut renderer = TerminalRenderer::new(Cursor::new(script.to_string()), &mut output);
            wizard.run(&mut renderer);
        }
        (wizard, String::from_utf8(output).unwrap())
    }

    #[test]
    fn full_session_reaches_strong_case() {
        let script = "2\nn\ny1\ny2\ny3\ny4\ny5\nx6\nn\na\nn\nq\n";
        let (wizard, output) = run_script(script);

        assert_eq!(wizard.current_step(), WizardStep::Result);
        assert_eq!(wizard.evaluate().tier, RecommendationTier::StrongCase);
        assert!(output.contains("Result: Strong Case for Sole Source"));
    }

    #[test]
    fn under_threshold_amount_short_circuits() {
        let (wizard, output) = run_script("1\nn\nq\n");
        assert_eq!(wizard.current_step(), WizardStep::Result);
        assert!(output.contains("Sole Source Not Required"));
    }

    #[test]
    fn unrecognized_input_reprompts() {
        let (_, output) = run_script("bogus\n1\nq\n");
        assert!(output.contains("Unrecognized input"));
    }

    #[test]
    fn end_of_input_ends_the_run() {
        let (wizard, _) = run_script("");
        assert_eq!(wizard.current_step(), WizardStep::Amount);
    }

    #[test]
    fn multibyte_input_on_screening_step_reprompts() {
        let (wizard, output) = run_script("2\nn\né1\nÿes\ny1\nq\n");

        assert!(output.contains("Unrecognized input"));
        assert_eq!(wizard.current_step(), WizardStep::Screening);
        assert_eq!(wizard.session().answers()[0], ScreeningAnswer::Yes);
    }
}
