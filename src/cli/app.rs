use super::autocomplete::Autocompleter;
use scriptline::core::{ExitStatus, ScriptError};
use scriptline::facade::ScriptEngine;
use scriptline::parser::TARGET_SEPARATOR;
use scriptline::session::{HostSession, Session};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Line-oriented REPL over stdin/stdout.
pub struct App {
    engine: ScriptEngine,
    session: HostSession,
    autocompleter: Autocompleter,
}

impl App {
    pub fn new(engine: ScriptEngine, session: HostSession) -> Self {
        let autocompleter = Autocompleter::new(engine.registry());
        Self {
            engine,
            session,
            autocompleter,
        }
    }

    /// Runs a single line, printing chunks as they arrive.
    pub async fn execute(&self, line: &str) -> i32 {
        let mut stdout = std::io::stdout();
        let mut sink = |chunk: &str| -> scriptline::Result<()> {
            writeln!(stdout, "{}", chunk).map_err(|e| ScriptError::Sink(e.to_string()))?;
            stdout.flush().map_err(|e| ScriptError::Sink(e.to_string()))
        };

        let code = self.engine.run(&self.session, line, &mut sink).await;

        if code == ExitStatus::UnknownCommand.code() {
            self.suggest(line);
        }
        code
    }

    fn banner(&self) -> String {
        format!(
            "scriptline: acting as '{}'{}. Type 'help{}self' or 'exit'.",
            self.session.author(),
            if self.session.is_admin() { " (admin)" } else { "" },
            TARGET_SEPARATOR
        )
    }

    pub async fn run(&self) -> std::io::Result<()> {
        println!("{}", self.banner());

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "exit" || line == "quit" {
                break;
            }

            let code = self.execute(line).await;
            println!("[exit {}]", code);
        }

        Ok(())
    }

    fn suggest(&self, line: &str) {
        let name_portion = line.split(TARGET_SEPARATOR).next().unwrap_or_default();
        let Some(word) = name_portion.split_whitespace().last() else {
            return;
        };

        let suggestions = self.autocompleter.get_suggestions(word);
        if !suggestions.is_empty() {
            println!("Did you mean: {}?", suggestions.join(", "));
        }
    }
}
