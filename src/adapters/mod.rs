//! Adapters - concrete implementations of the ports.

pub mod export;
pub mod renderer;
