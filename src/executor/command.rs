use super::ExecutionContext;
use crate::core::Result;

use async_trait::async_trait;
use futures::stream::BoxStream;

/// One item of a command's output sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Text forwarded to the sink
    Chunk(String),
    /// Terminal status; nothing after it is read
    Exit(i32),
}

impl Step {
    pub fn chunk(text: impl Into<String>) -> Self {
        Self::Chunk(text.into())
    }
}

/// Lazy, non-restartable output of one command run.
pub type CommandStream<'a> = BoxStream<'a, Result<Step>>;

pub trait Command: Send + Sync {
    /// Name the command is registered under
    fn name(&self) -> &'static str;

    /// One-line summary shown by `help`
    fn summary(&self) -> &'static str;

    /// Starts the command. A stream that ends without `Step::Exit` exits with 0.
    fn execute<'a>(&'a self, ctx: &'a ExecutionContext<'_>) -> CommandStream<'a>;
}

/// Pre-step run before a command; may raise the permission scope.
#[async_trait]
pub trait Modifier: Send + Sync {
    fn name(&self) -> &'static str;

    fn summary(&self) -> &'static str;

    async fn apply(&self, ctx: &mut ExecutionContext<'_>) -> Result<()>;
}
