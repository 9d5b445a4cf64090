//! Report module - the exportable screening summary.

mod builder;

pub use builder::{strip_markup, ReportField, ReportSection, ScreeningReport, NOT_AVAILABLE};
