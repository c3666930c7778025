//! Score signals
//!
//! Each signal contributes an independent slice of the strength score.
//! The evaluator sums them and maps the total to a level.

mod coverage;
mod length;
mod variety;

pub(crate) use coverage::coverage_signal;
pub(crate) use length::length_signal;
pub(crate) use variety::variety_signal;

pub(crate) use variety::{has_ascii_digit, has_ascii_lowercase, has_ascii_uppercase, has_special};
