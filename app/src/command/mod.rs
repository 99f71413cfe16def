//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is a separate strategy type with its own input type,
//! dispatched statically from `main`.

mod bot;
mod fib;
mod info;
mod init;
mod sum;
mod version;

pub use bot::{BotInput, BotStrategy};
pub use fib::FibStrategy;
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use sum::SumStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
