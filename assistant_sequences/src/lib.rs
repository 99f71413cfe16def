#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Sequence utilities used by the assistant.
//!
//! - [`Fibonacci`]: a memoizing Fibonacci generator with a private cache
//! - [`extract_numbers`]: a lazy scan of whitespace-delimited numerals in text

mod fibonacci;
mod numbers;

pub use fibonacci::{Fibonacci, MAX_INDEX, SequenceError};
pub use numbers::{NumericTokens, extract_numbers, sum_numeric_stream};
