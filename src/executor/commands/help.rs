use crate::core::ScriptError;
use crate::executor::ExecutionContext;
use crate::executor::command::{Command, CommandStream, Step};
use crate::parser::TARGET_SEPARATOR;

use futures::stream;

/// Lists registered commands and modifiers.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn summary(&self) -> &'static str {
        "list commands and modifiers"
    }

    fn execute<'a>(&'a self, ctx: &'a ExecutionContext<'_>) -> CommandStream<'a> {
        let registry = ctx.registry();

        let mut text = format!(
            "Usage: [modifier ]command{}target [args] [--flag [value]]\n\nCommands:\n",
            TARGET_SEPARATOR
        );
        for command in registry.commands() {
            text.push_str(&format!("  {:<10} {}\n", command.name(), command.summary()));
        }

        text.push_str("\nModifiers:\n");
        for modifier in registry.modifiers() {
            text.push_str(&format!("  {:<10} {}\n", modifier.name(), modifier.summary()));
        }

        Box::pin(stream::once(async move { Ok::<_, ScriptError>(Step::Chunk(text)) }))
    }
}
