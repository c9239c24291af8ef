use crate::core::{Result, ScriptError};

/// Script engine configuration
///
/// Controls how command output is rendered and how the grammar
/// resolves the author placeholder target.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Default nesting depth for the inspect dump (overridable with `--depth`)
    pub inspect_depth: usize,

    /// Indent width used by `--json` output
    pub json_indent: usize,

    /// Target literal that resolves to the acting identity (case-insensitive)
    pub self_keyword: String,

    /// Send diagnostic lines to the output sink (they are always logged)
    pub forward_diagnostics: bool,
}

impl EngineConfig {
    pub const MAX_JSON_INDENT: usize = 10;

    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self {
            inspect_depth: 2,
            json_indent: 2,
            self_keyword: "self".to_string(),
            forward_diagnostics: true,
        }
    }

    /// Set the default inspect depth
    pub fn inspect_depth(mut self, depth: usize) -> Self {
        self.inspect_depth = depth;
        self
    }

    /// Set the JSON indent width
    pub fn json_indent(mut self, indent: usize) -> Self {
        self.json_indent = indent;
        self
    }

    /// Set the self-target keyword
    pub fn self_keyword(mut self, keyword: &str) -> Self {
        self.self_keyword = keyword.to_string();
        self
    }

    /// Enable or disable diagnostic forwarding to the sink
    pub fn forward_diagnostics(mut self, forward: bool) -> Self {
        self.forward_diagnostics = forward;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let keyword = self.self_keyword.trim();
        if keyword.is_empty() {
            return Err(ScriptError::Config("self_keyword cannot be empty".into()));
        }

        if keyword.contains(char::is_whitespace) || keyword.contains("::") {
            return Err(ScriptError::Config(format!(
                "self_keyword '{}' must be a single token",
                self.self_keyword
            )));
        }

        if self.json_indent > Self::MAX_JSON_INDENT {
            return Err(ScriptError::Config(format!(
                "json_indent must be <= {}",
                Self::MAX_JSON_INDENT
            )));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
