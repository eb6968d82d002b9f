//! Core library for the kohlrahbi command line application.
//!
//! The typed data model for AHB conditions and the run selectors lives in
//! [`model`], JSON persistence in [`io`], the per-format merge of conditions
//! in [`collect`] and the tracing bootstrap in [`logging`].

pub mod collect;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;

pub use error::{KohlrahbiError, Result};
