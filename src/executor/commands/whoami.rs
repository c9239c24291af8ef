use crate::core::ScriptError;
use crate::executor::ExecutionContext;
use crate::executor::command::{Command, CommandStream, Step};

use futures::stream;

/// Reports the identities and permission state of the invocation.
pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn summary(&self) -> &'static str {
        "show author, target and the active permission scope"
    }

    fn execute<'a>(&'a self, ctx: &'a ExecutionContext<'_>) -> CommandStream<'a> {
        let lines = vec![
            format!("author: {}\n", ctx.author()),
            format!("target: {}\n", ctx.target()),
            format!("author admin: {}\n", ctx.is_author_admin()),
            format!("target admin: {}\n", ctx.is_target_admin()),
            format!("scope: {}\n", ctx.permissions().scope().as_str()),
        ];

        Box::pin(stream::iter(lines.into_iter().map(|line| Ok::<_, ScriptError>(Step::Chunk(line)))))
    }
}
