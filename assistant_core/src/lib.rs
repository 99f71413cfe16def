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

//! Contact book driven by a line-oriented command interpreter.
//!
//! The interpreter owns a [`ContactStore`] and turns every raw input line
//! into exactly one response string. Handler failures are typed as
//! [`CommandError`] and translated into user-facing text at a single
//! dispatch boundary, so nothing but a response string ever leaves
//! [`CommandInterpreter::execute`].

mod command;
mod error;
mod handlers;
mod interpreter;
mod store;

pub use command::{Command, CommandKind};
pub use error::{CommandError, Result};
pub use interpreter::{CommandInterpreter, SessionState};
pub use store::{Contact, ContactStore};
