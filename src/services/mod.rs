//! Service layer composing the core modules.
//!
//! `search` finds questions by free-text query; `study` runs the full
//! reference → filter → context → assembly flow.

pub mod search;
pub mod study;
