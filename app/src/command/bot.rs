//! Contact assistant session.
//!
//! Either replays lines given on the command line or runs an interactive
//! prompt on stdin/stdout until `close`/`exit` or end of input.

use std::io::Write;

use assistant_config::AssistantConfig;
use assistant_core::CommandInterpreter;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;
use uuid::Uuid;

/// Input parameters for the Bot command strategy.
#[derive(Debug, Clone)]
pub struct BotInput {
    /// Lines to run non-interactively; empty means interactive mode
    pub commands: Vec<String>,
    /// Banner and prompt texts
    pub assistant: AssistantConfig,
}

/// Strategy for running the contact assistant.
#[derive(Debug, Clone, Copy)]
pub struct BotStrategy;

impl super::CommandStrategy for BotStrategy {
    type Input = BotInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let session_id = Uuid::now_v7();
        info!("Starting assistant session: {session_id}");

        let mut interpreter = CommandInterpreter::new();
        let mut stdout = std::io::stdout();

        if input.commands.is_empty() {
            let stdin = BufReader::new(tokio::io::stdin());
            run_interactive(&mut interpreter, stdin, &mut stdout, &input.assistant).await?;
        } else {
            run_script(&mut interpreter, &input.commands, &mut stdout)?;
        }

        info!(
            "Session {session_id} ended with {} contacts",
            interpreter.store().len()
        );
        Ok(())
    }
}

/// Run each line in order, stopping once the session terminates.
fn run_script<W: Write>(
    interpreter: &mut CommandInterpreter,
    lines: &[String],
    out: &mut W,
) -> anyhow::Result<()> {
    for line in lines {
        let Some(response) = interpreter.execute(line) else {
            break;
        };
        writeln!(out, "{response}")?;
    }
    Ok(())
}

/// Prompt, read a line, print its response; repeat until the session ends.
///
/// End of input closes the session as if `exit` had been typed.
async fn run_interactive<R, W>(
    interpreter: &mut CommandInterpreter,
    input: R,
    out: &mut W,
    texts: &AssistantConfig,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", texts.welcome)?;
    let mut lines = input.lines();

    while interpreter.is_running() {
        write!(out, "{}", texts.prompt)?;
        out.flush()?;

        let response = match lines.next_line().await? {
            Some(line) => interpreter.execute(&line),
            None => {
                writeln!(out)?;
                interpreter.execute("exit")
            }
        };

        if let Some(response) = response {
            writeln!(out, "{response}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_config::LoggingConfig;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0
                .lock()
                .map_err(|_| std::io::Error::other("log buffer poisoned"))?
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn texts() -> AssistantConfig {
        AssistantConfig {
            welcome: "hi".to_string(),
            prompt: "> ".to_string(),
        }
    }

    #[tokio::test]
    async fn test_interactive_session() -> anyhow::Result<()> {
        let mut interpreter = CommandInterpreter::new();
        let mut out = Vec::new();
        let input: &[u8] = b"add Alice 123\nphone Alice\nexit\nhello\n";

        run_interactive(&mut interpreter, input, &mut out, &texts()).await?;

        let printed = String::from_utf8(out)?;
        assert_eq!(printed, "hi\n> Contact added.\n> 123\n> Good bye!\n");
        assert!(!interpreter.is_running());
        Ok(())
    }

    #[tokio::test]
    async fn test_end_of_input_closes_session() -> anyhow::Result<()> {
        let mut interpreter = CommandInterpreter::new();
        let mut out = Vec::new();
        let input: &[u8] = b"hello\n";

        run_interactive(&mut interpreter, input, &mut out, &texts()).await?;

        let printed = String::from_utf8(out)?;
        assert_eq!(printed, "hi\n> How can I help you?\n> \nGood bye!\n");
        assert!(!interpreter.is_running());
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_command_prints_single_line() -> anyhow::Result<()> {
        let mut interpreter = CommandInterpreter::new();
        let mut out = Vec::new();
        let input: &[u8] = b"phone\nexit\n";

        run_interactive(&mut interpreter, input, &mut out, &texts()).await?;

        let printed = String::from_utf8(out)?;
        assert_eq!(printed, "hi\n> Enter user name.\n> Good bye!\n");
        Ok(())
    }

    #[test]
    fn test_failed_commands_are_silent_at_default_log_level() -> anyhow::Result<()> {
        let logs = LogBuffer::default();
        let sink = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_new(LoggingConfig::default().level)?)
            .with_writer(move || sink.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut interpreter = CommandInterpreter::new();
            for line in ["phone", "add OnlyName", "change Bob 555", "frobnicate"] {
                interpreter.execute(line);
            }
        });

        let captured = logs
            .0
            .lock()
            .map_err(|_| anyhow::anyhow!("log buffer poisoned"))?;
        assert!(
            captured.is_empty(),
            "unexpected log output: {}",
            String::from_utf8_lossy(&captured)
        );
        Ok(())
    }

    #[test]
    fn test_script_stops_at_exit() -> anyhow::Result<()> {
        let mut interpreter = CommandInterpreter::new();
        let mut out = Vec::new();
        let lines: Vec<String> = ["add Bob 1", "all", "close", "add Eve 2"]
            .iter()
            .map(ToString::to_string)
            .collect();

        run_script(&mut interpreter, &lines, &mut out)?;

        assert_eq!(
            String::from_utf8(out)?,
            "Contact added.\nBob: 1\nGood bye!\n"
        );
        assert!(!interpreter.store().contains("Eve"));
        Ok(())
    }
}
