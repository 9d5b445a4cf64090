//! Domain layer - the screening core.
//!
//! Pure business logic with no I/O: the screening session (answer store),
//! wizard step sequencing, the decision engine, and the report model.

pub mod foundation;
pub mod report;
pub mod screening;
