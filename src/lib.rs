// ============================================================================
// scriptline Library
// ============================================================================

pub mod config;
pub mod core;
pub mod executor;
pub mod facade;
pub mod format;
pub mod parser;
pub mod result;
pub mod session;
pub mod storage;

// Re-export main types for convenience
pub use config::EngineConfig;
pub use core::{ExitStatus, Result, ScriptError};
pub use executor::{BufferSink, Command, CommandStream, Modifier, OutputSink, Registry, Step};
pub use facade::ScriptEngine;
pub use result::RunReport;
pub use session::{HostSession, Session, roster::AdminRoster};
pub use storage::{MemoryStore, RecordStore, Stores};

/// Runs one script line with the built-in commands and default settings.
///
/// This is the shortest path for hosts that do not need a custom registry
/// or configuration.
///
/// # Examples
///
/// ```
/// use scriptline::{run, AdminRoster, BufferSink, HostSession, Stores};
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let session = HostSession::open("ada", Arc::new(AdminRoster::new()))?;
/// let mut sink = BufferSink::new();
///
/// let code = run(&Stores::in_memory(), &session, "whoami::self", &mut sink).await;
/// assert_eq!(code, 0);
/// assert_eq!(sink.chunks()[0], "author: ada\n");
/// # Ok(())
/// # }
/// ```
pub async fn run<S>(stores: &Stores, session: &dyn Session, command: &str, sink: &mut S) -> i32
where
    S: OutputSink + ?Sized,
{
    ScriptEngine::new(stores.clone())
        .run(session, command, sink)
        .await
}
