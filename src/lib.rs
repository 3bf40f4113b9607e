//! `StudyBank` - Bible-study question bank core.
//!
//! This crate provides the logic behind a question-bank content system:
//! contributors submit questions tied to scripture references and themes,
//! administrators review and approve them, and end users filter the
//! approved set to assemble printable study guides.


// Re-export public modules for use in integration tests and as a library
pub mod bank;
pub mod canon;
pub mod config;
pub mod context;
pub mod error;
pub mod export;
pub mod filter;
pub mod reference;
pub mod services;
pub mod sort;
pub mod study;
pub mod types;
pub mod validation;
