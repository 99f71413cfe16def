//! The command interpreter state machine.

use tracing::{debug, info};

use crate::command::{Command, CommandKind};
use crate::error::Result;
use crate::handlers::{
    FAREWELL, GREETING, INVALID_COMMAND, add_contact, change_contact, show_all, show_phone,
};
use crate::store::ContactStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Owns the contact book and answers one input line at a time.
#[derive(Debug)]
pub struct CommandInterpreter {
    store: ContactStore,
    state: SessionState,
}

impl CommandInterpreter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(ContactStore::new())
    }

    /// Start a session over an existing store.
    #[must_use]
    pub const fn with_store(store: ContactStore) -> Self {
        Self {
            store,
            state: SessionState::Running,
        }
    }

    /// Process one raw line and produce its response.
    ///
    /// Returns `None` once the session has terminated; a terminated
    /// interpreter ignores all further input.
    pub fn execute(&mut self, line: &str) -> Option<String> {
        if self.state == SessionState::Terminated {
            return None;
        }

        let command = Command::parse(line);
        let kind = command.kind();
        debug!(
            "Dispatching {:?} (name={:?}, args={})",
            kind,
            command.name,
            command.args.len()
        );

        let response = match kind {
            CommandKind::Exit => {
                self.state = SessionState::Terminated;
                info!("Session terminated by '{}'", command.name);
                FAREWELL.to_string()
            }
            CommandKind::Empty | CommandKind::Unknown => INVALID_COMMAND.to_string(),
            CommandKind::Hello => GREETING.to_string(),
            CommandKind::Add => Self::respond(add_contact(&command.args, &mut self.store)),
            CommandKind::Change => Self::respond(change_contact(&command.args, &mut self.store)),
            CommandKind::Phone => Self::respond(show_phone(&command.args, &self.store)),
            CommandKind::All => show_all(&self.store),
        };

        Some(response)
    }

    /// The dispatch boundary: handler errors become their user-facing text.
    fn respond(result: Result<String>) -> String {
        result.unwrap_or_else(|e| {
            debug!("Command failed: {e:?}");
            e.to_string()
        })
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running)
    }

    #[must_use]
    pub const fn store(&self) -> &ContactStore {
        &self.store
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
