//! Sole Source Screener - Procurement pre-screening wizard.
//!
//! This crate implements the decision core of a multi-step questionnaire that
//! helps a university procurement office pre-screen whether a purchase request
//! may qualify as a sole source (single supplier) justification.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
