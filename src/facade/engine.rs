use crate::config::EngineConfig;
use crate::core::{ExitStatus, Result, ScriptError};
use crate::executor::{ExecutionContext, OutputSink, Registry, StreamingExecutor};
use crate::format;
use crate::parser;
use crate::result::RunReport;
use crate::session::Session;
use crate::storage::Stores;

use std::sync::Arc;
use tracing::{Instrument, Level, event, info_span};

/// Parses script lines and runs them against the registry.
///
/// Every call is independent; the engine itself holds only read-only state.
pub struct ScriptEngine {
    registry: Arc<Registry>,
    stores: Stores,
    config: EngineConfig,
}

impl ScriptEngine {
    /// Engine over the built-in commands with default configuration
    pub fn new(stores: Stores) -> Self {
        Self {
            registry: Arc::clone(Registry::global()),
            stores,
            config: EngineConfig::default(),
        }
    }

    /// Engine with a custom registry and configuration
    pub fn with_config(stores: Stores, registry: Arc<Registry>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry,
            stores,
            config,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs one line and returns its exit code.
    pub async fn run<S>(&self, session: &dyn Session, command: &str, sink: &mut S) -> i32
    where
        S: OutputSink + ?Sized,
    {
        self.run_report(session, command, sink).await.code
    }

    /// Runs one line and returns the code, the accumulated output and any
    /// dispatcher diagnostic.
    pub async fn run_report<S>(&self, session: &dyn Session, command: &str, sink: &mut S) -> RunReport
    where
        S: OutputSink + ?Sized,
    {
        let span = info_span!("script.run", author = %session.author(), command = %command);
        self.dispatch(session, command, sink).instrument(span).await
    }

    async fn dispatch<S>(&self, session: &dyn Session, command: &str, sink: &mut S) -> RunReport
    where
        S: OutputSink + ?Sized,
    {
        let name = match parser::parse_name(command) {
            Ok(name) => name,
            Err(err) => return self.fail(err, String::new(), sink).await,
        };

        let handler = match self.registry.command(&name.command) {
            Ok(handler) => handler,
            Err(_) => {
                event!(Level::DEBUG, command = %name.command, "unknown command");
                let line = format::unknown_command(&name.command);
                return self.reject(ExitStatus::UnknownCommand, line, sink).await;
            }
        };

        let modifier = match name.modifier.as_deref() {
            Some(modifier_name) => match self.registry.modifier(modifier_name) {
                Ok(modifier) => Some(modifier),
                Err(_) => {
                    event!(Level::DEBUG, modifier = %modifier_name, "unknown modifier");
                    let line = format::unknown_modifier(modifier_name);
                    return self.reject(ExitStatus::UnknownCommand, line, sink).await;
                }
            },
            None => None,
        };

        let invocation = match parser::parse(command, session.author(), &self.config.self_keyword) {
            Ok(invocation) => invocation,
            Err(err) => return self.fail(err, String::new(), sink).await,
        };

        let mut ctx = ExecutionContext::build(
            session,
            invocation,
            &self.stores,
            &self.config,
            &self.registry,
        );

        if let Some(modifier) = modifier {
            if let Err(err) = modifier.apply(&mut ctx).await {
                return self.fail(err, String::new(), sink).await;
            }
        }

        let mut executor = StreamingExecutor::new();
        let outcome = executor.drive(handler.execute(&ctx), sink).await;

        match outcome {
            Ok(code) => {
                event!(Level::DEBUG, code, chunks = executor.chunk_count(), "script finished");
                RunReport::completed(code, executor.into_output())
            }
            Err(err) => self.fail(err, executor.into_output(), sink).await,
        }
    }

    /// Reports a name that did not resolve; nothing has run yet.
    async fn reject<S>(&self, status: ExitStatus, line: String, sink: &mut S) -> RunReport
    where
        S: OutputSink + ?Sized,
    {
        self.emit(&line, sink).await;
        RunReport::failed(status, String::new(), line)
    }

    /// Single recovery boundary for failures during parse, modifier or command.
    async fn fail<S>(&self, err: ScriptError, output: String, sink: &mut S) -> RunReport
    where
        S: OutputSink + ?Sized,
    {
        event!(Level::ERROR, error = %err, detail = err.detail().unwrap_or(""), "script failed");
        let line = format::error_line(&err);
        self.emit(&line, sink).await;
        RunReport::failed(ExitStatus::InternalError, output, line)
    }

    async fn emit<S>(&self, line: &str, sink: &mut S)
    where
        S: OutputSink + ?Sized,
    {
        if !self.config.forward_diagnostics {
            return;
        }
        if let Err(err) = sink.send(line).await {
            event!(Level::WARN, error = %err, "output sink rejected diagnostic");
        }
    }
}
