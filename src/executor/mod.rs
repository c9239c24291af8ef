pub mod command;
pub mod commands;
pub mod context;
pub mod modifiers;
pub mod permission;
pub mod registry;
pub mod sink;
pub mod stream;

pub use command::{Command, CommandStream, Modifier, Step};
pub use context::ExecutionContext;
pub use permission::{PermissionScope, Permissions};
pub use registry::Registry;
pub use sink::{BufferSink, OutputSink};
pub use stream::StreamingExecutor;
