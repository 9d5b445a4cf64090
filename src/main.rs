//! Terminal front end for the sole source pre-screening wizard.

use std::io;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use sole_source_screener::adapters::export::{exporter_for, write_document};
use sole_source_screener::adapters::renderer::TerminalRenderer;
use sole_source_screener::application::ScreeningWizard;
use sole_source_screener::config::AppConfig;
use sole_source_screener::domain::screening::WizardStep;

fn main() -> ExitCode {
    init_tracing();
    if let Err(err) = run() {
        error!(%err, "wizard failed");
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sole_source_screener=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    let questionnaire = config.resolve_questionnaire()?;

    let mut wizard = ScreeningWizard::new(questionnaire)?;
    let stdin = io::stdin();
    let mut renderer = TerminalRenderer::new(stdin.lock(), io::stdout());
    wizard.run(&mut renderer);

    // Only a finished session has a determination worth keeping.
    if wizard.current_step() == WizardStep::Result {
        let exporter = exporter_for(config.export.format);
        let document = wizard.export(exporter.as_ref(), &config.export.filename)?;
        let path = write_document(&document, &config.export.directory)?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}
