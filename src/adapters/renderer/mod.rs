//! Renderer adapters for the WizardRenderer port.

mod scripted;
mod terminal;

pub use scripted::ScriptedRenderer;
pub use terminal::TerminalRenderer;
