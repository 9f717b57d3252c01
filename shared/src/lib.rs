//! Shared types, rule catalog and advisory engine for the Plant Care Advisor
//!
//! This crate contains everything the command-line tool and the WASM module
//! compute with: weather and plant models, the built-in care rule catalog,
//! the advice engine and task scheduling helpers. Nothing here performs I/O
//! apart from loading a catalog file on request.

pub mod advice;
pub mod catalog;
pub mod error;
pub mod models;
pub mod types;
pub mod validation;

pub use advice::*;
pub use catalog::Catalog;
pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
