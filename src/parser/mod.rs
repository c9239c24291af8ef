pub mod grammar;
pub mod tokenizer;

pub use grammar::{CommandName, Invocation, TARGET_SEPARATOR, parse, parse_name};
pub use tokenizer::{Arguments, FLAG_PREFIX, FlagValue, flatten, split_tokens};
