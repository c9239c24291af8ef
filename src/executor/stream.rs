use super::command::{CommandStream, Step};
use super::sink::OutputSink;
use crate::core::{ExitStatus, Result};

use futures::StreamExt;
use tracing::{Level, event};

/// Drives a command's output sequence into a sink.
///
/// Chunks reach the sink in production order, exactly once each, and are
/// accumulated in the same order. Output produced before a failure stays
/// available through [`StreamingExecutor::output`].
#[derive(Debug, Default)]
pub struct StreamingExecutor {
    output: String,
    chunks: usize,
    sink_failures: usize,
}

impl StreamingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the stream to completion and returns the command's exit code.
    pub async fn drive<S>(&mut self, mut stream: CommandStream<'_>, sink: &mut S) -> Result<i32>
    where
        S: OutputSink + ?Sized,
    {
        while let Some(step) = stream.next().await {
            match step? {
                Step::Chunk(chunk) => {
                    self.output.push_str(&chunk);
                    self.chunks += 1;
                    if let Err(err) = sink.send(&chunk).await {
                        self.sink_failures += 1;
                        event!(Level::WARN, error = %err, chunk = self.chunks, "output sink rejected chunk");
                    }
                }
                Step::Exit(code) => return Ok(code),
            }
        }

        Ok(ExitStatus::Success.code())
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks
    }

    pub fn sink_failures(&self) -> usize {
        self.sink_failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptError;
    use crate::executor::sink::BufferSink;
    use futures::stream;

    fn steps(items: Vec<Result<Step>>) -> CommandStream<'static> {
        Box::pin(stream::iter(items))
    }

    #[tokio::test]
    async fn test_chunks_forwarded_in_order() {
        let mut sink = BufferSink::new();
        let mut executor = StreamingExecutor::new();

        let code = executor
            .drive(
                steps(vec![
                    Ok(Step::chunk("a")),
                    Ok(Step::chunk("b")),
                    Ok(Step::chunk("c")),
                    Ok(Step::Exit(7)),
                ]),
                &mut sink,
            )
            .await
            .unwrap();

        assert_eq!(code, 7);
        assert_eq!(sink.chunks(), ["a", "b", "c"]);
        assert_eq!(executor.output(), "abc");
        assert_eq!(executor.chunk_count(), 3);
    }

    #[tokio::test]
    async fn test_missing_exit_means_success() {
        let mut sink = BufferSink::new();
        let mut executor = StreamingExecutor::new();

        let code = executor
            .drive(steps(vec![Ok(Step::chunk("only"))]), &mut sink)
            .await
            .unwrap();

        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_steps_after_exit_are_not_read() {
        let mut sink = BufferSink::new();
        let mut executor = StreamingExecutor::new();

        let code = executor
            .drive(
                steps(vec![Ok(Step::Exit(4)), Ok(Step::chunk("late"))]),
                &mut sink,
            )
            .await
            .unwrap();

        assert_eq!(code, 4);
        assert!(sink.chunks().is_empty());
    }

    #[tokio::test]
    async fn test_sink_failure_does_not_abort() {
        let mut seen = Vec::new();
        let mut sink = |chunk: &str| -> Result<()> {
            seen.push(chunk.to_string());
            if chunk == "b" {
                return Err(ScriptError::Sink("closed".into()));
            }
            Ok(())
        };
        let mut executor = StreamingExecutor::new();

        let code = executor
            .drive(
                steps(vec![Ok(Step::chunk("a")), Ok(Step::chunk("b")), Ok(Step::chunk("c"))]),
                &mut sink,
            )
            .await
            .unwrap();

        assert_eq!(code, 0);
        assert_eq!(executor.output(), "abc");
        assert_eq!(executor.sink_failures(), 1);
        assert_eq!(seen, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_stream_error_keeps_partial_output() {
        let mut sink = BufferSink::new();
        let mut executor = StreamingExecutor::new();

        let result = executor
            .drive(
                steps(vec![
                    Ok(Step::chunk("partial")),
                    Err(ScriptError::Execution("boom".into())),
                ]),
                &mut sink,
            )
            .await;

        assert!(result.is_err());
        assert_eq!(executor.output(), "partial");
    }
}
