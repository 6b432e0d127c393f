//! # fkgrade
//!
//! Computes the Flesch-Kincaid grade level of a piece of text and serves it
//! through a small web form.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The `score` command of the binary
pub mod cli;
/// Environment-driven runtime configuration
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Tokenization, syllable counting and the Flesch-Kincaid formula
pub mod readability;
/// Shared report types
pub mod types;
/// Preconditions on submitted text
pub mod validation;
/// The web form and results pages
pub mod web;

pub use readability::{Assessment, GradeLevel, ScoreError, Statistics, assess, score};
pub use types::Report;
