use thiserror::Error;

pub type Result<T> = std::result::Result<T, CommandError>;

/// Recoverable failures raised by command handlers.
///
/// The `Display` text of each variant is exactly what the user sees.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CommandError {
    /// A command expecting a name and a phone got a different number of arguments.
    #[error("Give me name and phone please.")]
    Arity,

    /// A command needing a name got no arguments at all.
    #[error("Enter user name.")]
    MissingArgument,

    /// The referenced contact is not in the store.
    #[error("Contact not found.")]
    NotFound,
}
