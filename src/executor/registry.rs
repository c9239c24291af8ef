use super::command::{Command, Modifier};
use super::commands::{HelpCommand, RecordGet, WhoamiCommand};
use super::modifiers::Rise;
use crate::core::{Result, ScriptError};

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::Arc;

/// Named commands and modifiers.
///
/// Filled once at startup and only read afterwards.
pub struct Registry {
    commands: HashMap<&'static str, Box<dyn Command>>,
    modifiers: HashMap<&'static str, Box<dyn Modifier>>,
}

// Process-wide registry with the built-in commands
lazy_static! {
    static ref GLOBAL_REGISTRY: Arc<Registry> = Arc::new(Registry::with_default_commands());
}

impl Registry {
    /// Get the global registry instance
    pub fn global() -> &'static Arc<Registry> {
        &GLOBAL_REGISTRY
    }

    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            modifiers: HashMap::new(),
        }
    }

    /// Registry with every built-in command and modifier
    pub fn with_default_commands() -> Self {
        let mut registry = Self::new();

        registry.insert_command(Box::new(RecordGet::users()));
        registry.insert_command(Box::new(RecordGet::threads()));
        registry.insert_command(Box::new(WhoamiCommand));
        registry.insert_command(Box::new(HelpCommand));

        registry.insert_modifier(Box::new(Rise));

        registry
    }

    /// Register a command; names must be unique
    pub fn register_command(&mut self, command: Box<dyn Command>) -> Result<()> {
        Self::validate_name(command.name())?;
        if self.commands.contains_key(command.name()) {
            return Err(ScriptError::Execution(format!(
                "Command '{}' is already registered",
                command.name()
            )));
        }
        self.insert_command(command);
        Ok(())
    }

    /// Register a modifier; names must be unique
    pub fn register_modifier(&mut self, modifier: Box<dyn Modifier>) -> Result<()> {
        Self::validate_name(modifier.name())?;
        if self.modifiers.contains_key(modifier.name()) {
            return Err(ScriptError::Execution(format!(
                "Modifier '{}' is already registered",
                modifier.name()
            )));
        }
        self.insert_modifier(modifier);
        Ok(())
    }

    pub fn command(&self, name: &str) -> Result<&dyn Command> {
        self.commands
            .get(name)
            .map(|boxed| &**boxed)
            .ok_or_else(|| ScriptError::UnknownCommand(name.to_string()))
    }

    pub fn modifier(&self, name: &str) -> Result<&dyn Modifier> {
        self.modifiers
            .get(name)
            .map(|boxed| &**boxed)
            .ok_or_else(|| ScriptError::UnknownModifier(name.to_string()))
    }

    /// Registered commands, sorted by name
    pub fn commands(&self) -> Vec<&dyn Command> {
        let mut list: Vec<&dyn Command> = self.commands.values().map(|boxed| &**boxed).collect();
        list.sort_by_key(|command| command.name());
        list
    }

    /// Registered modifiers, sorted by name
    pub fn modifiers(&self) -> Vec<&dyn Modifier> {
        let mut list: Vec<&dyn Modifier> = self.modifiers.values().map(|boxed| &**boxed).collect();
        list.sort_by_key(|modifier| modifier.name());
        list
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.commands().into_iter().map(|command| command.name()).collect()
    }

    pub fn modifier_names(&self) -> Vec<&'static str> {
        self.modifiers().into_iter().map(|modifier| modifier.name()).collect()
    }

    fn insert_command(&mut self, command: Box<dyn Command>) {
        self.commands.insert(command.name(), command);
    }

    fn insert_modifier(&mut self, modifier: Box<dyn Modifier>) {
        self.modifiers.insert(modifier.name(), modifier);
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() || name.contains(char::is_whitespace) || name.contains("::") {
            return Err(ScriptError::Execution(format!(
                "'{}' is not a valid command or modifier name",
                name
            )));
        }
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_default_commands()
    }
}
