use crate::core::ExitStatus;
use crate::executor::ExecutionContext;
use crate::executor::command::{Command, CommandStream, Step};
use crate::format;
use crate::storage::StoreKind;

use async_stream::stream;

pub const KEYS_REQUIRED: &str =
    "A nested keys (shallowest to deepest, separated by spaces.) is required.";

/// Key that selects the whole record instead of a nested property
const WHOLE_RECORD: &str = "all";

/// Reads a property path from one record store for the target.
///
/// `<name>::<target> <key>... [--json] [--depth N]`
pub struct RecordGet {
    name: &'static str,
    store: StoreKind,
}

impl RecordGet {
    pub const fn new(name: &'static str, store: StoreKind) -> Self {
        Self { name, store }
    }

    /// `uget`, reading the users store
    pub const fn users() -> Self {
        Self::new("uget", StoreKind::Users)
    }

    /// `tget`, reading the threads store
    pub const fn threads() -> Self {
        Self::new("tget", StoreKind::Threads)
    }
}

impl Command for RecordGet {
    fn name(&self) -> &'static str {
        self.name
    }

    fn summary(&self) -> &'static str {
        match self.store {
            StoreKind::Users => "read a property of a user record",
            StoreKind::Threads => "read a property of a thread record",
        }
    }

    fn execute<'a>(&'a self, ctx: &'a ExecutionContext<'_>) -> CommandStream<'a> {
        Box::pin(stream! {
            let args = ctx.args();
            let keys = args.positional();
            if keys.is_empty() {
                yield Ok(Step::chunk(KEYS_REQUIRED));
                yield Ok(Step::Exit(ExitStatus::MissingArguments.code()));
                return;
            }

            if !ctx.permissions().is_allowed_between(ctx.author(), ctx.target()) {
                yield Ok(Step::chunk(format::not_allowed()));
                yield Ok(Step::Exit(ExitStatus::PermissionDenied.code()));
                return;
            }

            let record = match ctx.stores().get(self.store).get_item(ctx.target()).await {
                Ok(record) => record,
                Err(err) => {
                    yield Err(err);
                    return;
                }
            };

            let item = if keys[0] == WHOLE_RECORD {
                record
            } else {
                format::nested_property(&record, keys)
            };

            let body = if args.has_flag("json") {
                match format::json(&item, ctx.config().json_indent) {
                    Ok(body) => body,
                    Err(err) => {
                        yield Err(err);
                        return;
                    }
                }
            } else {
                let depth = args.flag_usize("depth").unwrap_or(ctx.config().inspect_depth);
                format::inspect(&item, depth)
            };

            yield Ok(Step::Chunk(format!("Property => {}\n\n{}", keys.join("."), body)));
            yield Ok(Step::Exit(ExitStatus::Success.code()));
        })
    }
}
