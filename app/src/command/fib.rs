use assistant_sequences::Fibonacci;

/// Strategy for printing a single Fibonacci number.
///
/// Indices at or below zero print 0.
#[derive(Debug, Clone, Copy)]
pub struct FibStrategy;

impl super::CommandStrategy for FibStrategy {
    type Input = i64;

    async fn execute(&self, n: Self::Input) -> anyhow::Result<()> {
        let mut fib = Fibonacci::new();
        let value = fib.get(n)?;
        println!("fib({n}) = {value}");
        Ok(())
    }
}
