use assistant_sequences::{extract_numbers, sum_numeric_stream};
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Strategy for totalling the numbers found in a text.
///
/// Reads the text from the argument, or from stdin when none is given.
#[derive(Debug, Clone, Copy)]
pub struct SumStrategy;

impl super::CommandStrategy for SumStrategy {
    type Input = Option<String>;

    async fn execute(&self, text: Self::Input) -> anyhow::Result<()> {
        let text = match text {
            Some(text) => text,
            None => {
                let mut buffer = String::new();
                tokio::io::stdin().read_to_string(&mut buffer).await?;
                buffer
            }
        };

        debug!("Scanning {} bytes for numbers", text.len());
        let total = sum_numeric_stream(&text, extract_numbers);
        println!("Total income: {total:.2}");
        Ok(())
    }
}
