//! Shared primitives and traits for the rocpr evaluation crates.
//!
//! `rocpr-core` provides the foundation the other rocpr crates build on:
//!
//! - **Error types** — [`RocprError`] and [`Result`] for structured error handling
//! - **Traits** — [`Scored`] and [`Labeled`], the two views of a classified example

pub mod error;
pub mod traits;

pub use error::{RocprError, Result};
pub use traits::*;
