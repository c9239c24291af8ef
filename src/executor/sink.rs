use crate::core::Result;
use async_trait::async_trait;

/// Receiver of command output, one chunk at a time.
///
/// A failing `send` is logged by the caller and never aborts the command.
#[async_trait]
pub trait OutputSink: Send {
    async fn send(&mut self, chunk: &str) -> Result<()>;
}

#[async_trait]
impl<F> OutputSink for F
where
    F: FnMut(&str) -> Result<()> + Send,
{
    async fn send(&mut self, chunk: &str) -> Result<()> {
        (self)(chunk)
    }
}

/// Sink that keeps every chunk it receives.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    chunks: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    pub fn joined(&self) -> String {
        self.chunks.concat()
    }
}

#[async_trait]
impl OutputSink for BufferSink {
    async fn send(&mut self, chunk: &str) -> Result<()> {
        self.chunks.push(chunk.to_string());
        Ok(())
    }
}
