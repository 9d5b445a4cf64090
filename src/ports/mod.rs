//! Ports - trait seams between the screening core and its collaborators.
//!
//! The domain depends on these traits; adapters provide implementations.

mod document_exporter;
mod renderer;

pub use document_exporter::{DocumentExporter, ExportError, ExportFormat, ExportedDocument};
pub use renderer::{WizardEvent, WizardRenderer};
