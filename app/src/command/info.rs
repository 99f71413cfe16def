use assistant_config::Config;

/// Strategy for displaying the effective configuration.
///
/// Prints the config file location, whether it exists, and every value
/// the session will use (defaults included).
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let path = Config::path()?;
        let config = Config::load_from(&path)?;

        println!("=== assistant Configuration ===\n");

        println!("File:");
        println!("  Path: {}", path.display());
        if path.exists() {
            println!("  Status: Loaded");
        } else {
            println!("  Status: Not found (using defaults)");
        }
        println!();

        println!("Assistant:");
        println!("  Welcome: {}", config.assistant.welcome);
        println!("  Prompt: {:?}", config.assistant.prompt);
        println!();

        println!("Logging:");
        println!("  Level: {}", config.logging.level);

        Ok(())
    }
}
