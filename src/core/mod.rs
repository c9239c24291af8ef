pub mod error;
pub mod status;

pub use error::{Result, ScriptError};
pub use status::ExitStatus;
