//! Registry - Command registration and name resolution
//!
//! Names and aliases share a single case-insensitive namespace. Resolution
//! is two-level: a direct name map, then an alias map pointing back at the
//! canonical name. Both maps are checked before anything is inserted, so a
//! rejected registration leaves the registry untouched.

use crate::actor::Actor;
use crate::command::{Command, CommandSpec, CommandState};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Registry for managing commands
pub struct CommandRegistry<A> {
    commands: HashMap<String, Arc<Command<A>>>,
    aliases: HashMap<String, String>,
    /// Canonical names in registration order
    names: Vec<String>,
    /// Aliases in registration order
    alias_order: Vec<String>,
}

impl<A: Actor> Default for CommandRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Actor> CommandRegistry<A> {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            aliases: HashMap::new(),
            names: Vec::new(),
            alias_order: Vec::new(),
        }
    }

    /// Register a command
    ///
    /// Fails with [`Error::Validation`] if the name is empty or no execute
    /// handler was set, and with [`Error::Conflict`] if the name or any
    /// alias is already taken. Nothing is inserted on failure.
    pub fn register(&mut self, spec: CommandSpec<A>) -> Result<Arc<Command<A>>> {
        let CommandSpec {
            name,
            aliases,
            guard,
            execute,
            extra,
        } = spec;

        if name.is_empty() {
            return Err(Error::validation("cannot register commands without a name"));
        }
        let Some(execute) = execute else {
            return Err(Error::validation(format!(
                "cannot register command \"{}\" without an execute handler",
                name
            )));
        };

        let name = name.to_lowercase();
        if self.is_taken(&name) {
            warn!(command = %name, "Command name already registered");
            return Err(Error::Conflict(name));
        }

        let mut canonical_aliases: Vec<String> = Vec::with_capacity(aliases.len());
        for alias in aliases.into_iter().filter(|a| !a.is_empty()) {
            let alias = alias.to_lowercase();
            if canonical_aliases.contains(&alias) {
                continue;
            }
            if alias == name || self.is_taken(&alias) {
                warn!(command = %name, alias = %alias, "Alias already registered");
                return Err(Error::Conflict(alias));
            }
            canonical_aliases.push(alias);
        }

        debug!(command = %name, aliases = ?canonical_aliases, "Registering command");

        let command = Arc::new(Command {
            name: name.clone(),
            aliases: canonical_aliases,
            guard,
            execute,
            state: CommandState::new(extra),
        });

        for alias in &command.aliases {
            self.aliases.insert(alias.clone(), name.clone());
            self.alias_order.push(alias.clone());
        }
        self.names.push(name.clone());
        self.commands.insert(name, Arc::clone(&command));

        Ok(command)
    }

    /// Find a command by name or alias, case-insensitively
    ///
    /// An unknown identifier is `Ok(None)`; only an empty identifier is an
    /// error.
    pub fn find(&self, identifier: &str) -> Result<Option<Arc<Command<A>>>> {
        if identifier.is_empty() {
            return Err(Error::validation("command name cannot be empty"));
        }

        let identifier = identifier.to_lowercase();
        if let Some(command) = self.commands.get(&identifier) {
            return Ok(Some(Arc::clone(command)));
        }

        Ok(self
            .aliases
            .get(&identifier)
            .and_then(|name| self.commands.get(name))
            .cloned())
    }

    /// Canonical names in registration order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    /// Canonical names followed by aliases, each in registration order
    #[must_use]
    pub fn identifiers(&self) -> Vec<&str> {
        self.names
            .iter()
            .chain(self.alias_order.iter())
            .map(String::as_str)
            .collect()
    }

    /// Check if a name or alias is registered
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.is_taken(&identifier.to_lowercase())
    }

    /// Get command count (aliases excluded)
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn is_taken(&self, canonical: &str) -> bool {
        self.commands.contains_key(canonical) || self.aliases.contains_key(canonical)
    }
}
