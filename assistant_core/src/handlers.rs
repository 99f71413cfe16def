//! Command handlers.
//!
//! Every handler validates its arguments before touching the store, so a
//! failed command never leaves a partial mutation behind.

use tracing::info;

use crate::error::{CommandError, Result};
use crate::store::ContactStore;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Unpack exactly a name and a phone.
fn name_and_phone(args: &[String]) -> Result<(&str, &str)> {
    match args {
        [name, phone] => Ok((name.as_str(), phone.as_str())),
        _ => Err(CommandError::Arity),
    }
}

pub fn add_contact(args: &[String], store: &mut ContactStore) -> Result<String> {
    let (name, phone) = name_and_phone(args)?;
    store.put(name, phone);
    info!("Contact added: {name}");
    Ok("Contact added.".to_string())
}

pub fn change_contact(args: &[String], store: &mut ContactStore) -> Result<String> {
    let (name, phone) = name_and_phone(args)?;
    if !store.contains(name) {
        return Err(CommandError::NotFound);
    }
    store.put(name, phone);
    info!("Contact updated: {name}");
    Ok("Contact updated.".to_string())
}

/// Look up the first argument; anything after it is ignored.
pub fn show_phone(args: &[String], store: &ContactStore) -> Result<String> {
    let name = args.first().ok_or(CommandError::MissingArgument)?;
    store.get(name).map(ToString::to_string)
}

#[must_use]
pub fn show_all(store: &ContactStore) -> String {
    store
        .all()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
