pub mod engine;

pub use engine::ScriptEngine;
