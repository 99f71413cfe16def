/// Strategy for displaying version information.
///
/// This strategy outputs the current version of the assistant binary.
#[derive(Debug, Clone, Copy)]
pub struct VersionStrategy;

impl super::CommandStrategy for VersionStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        println!("assistant {}", env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}
