//! Debug shell command registration.
//!
//! Components register diagnostic commands with the switch's debug shell.
//! The shell itself belongs to the vendor SAI; [`CommandShell`] is its
//! registration surface and [`HalShell`] forwards to whichever shell the
//! platform provides. Member-based SAI builds ship without one, so
//! [`HalShell::for_variant`] leaves them unbound and every registration
//! reports `false`.
//!
//! [`CommandTable`] is an in-process [`CommandShell`] for platforms that
//! want the dispatch without a vendor shell, and for tests.

use crate::db::SaiVariant;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Handler for a named command. Receives the words after the command name.
pub type ShellFunction = Arc<dyn Fn(&[&str]) + Send + Sync>;

/// Handler that inspects the whole command line and returns true if it
/// consumed it.
pub type CheckRunFunction = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Registration surface of a debug command shell.
pub trait CommandShell: Send + Sync {
    /// Registers a named command. Returns false if it was not registered.
    fn add_command(&self, name: &str, func: ShellFunction, description: &str) -> bool;

    /// Registers a handler offered every command line before named dispatch.
    fn add_flexible(&self, func: CheckRunFunction) -> bool;

    /// Runs one command line.
    fn run_command(&self, line: &str);
}

/// Forwards registrations to the platform shell, if there is one.
#[derive(Clone, Default)]
pub struct HalShell {
    backend: Option<Arc<dyn CommandShell>>,
}

impl HalShell {
    pub fn new(backend: Arc<dyn CommandShell>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// A shell for platforms without a vendor command shell.
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    /// Binds `backend` only if the SAI generation ships a command shell.
    pub fn for_variant(variant: SaiVariant, backend: Arc<dyn CommandShell>) -> Self {
        if variant.has_command_shell() {
            Self::new(backend)
        } else {
            debug!(%variant, "SAI has no command shell");
            Self::unavailable()
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn add_command(&self, name: &str, func: ShellFunction, description: &str) -> bool {
        match &self.backend {
            Some(shell) => shell.add_command(name, func, description),
            None => {
                debug!(name, "no command shell, command not registered");
                false
            }
        }
    }

    pub fn add_flexible(&self, func: CheckRunFunction) -> bool {
        match &self.backend {
            Some(shell) => shell.add_flexible(func),
            None => false,
        }
    }

    pub fn run_command(&self, line: &str) {
        if let Some(shell) = &self.backend {
            shell.run_command(line);
        }
    }
}

impl fmt::Debug for HalShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HalShell")
            .field("available", &self.is_available())
            .finish()
    }
}

struct Command {
    func: ShellFunction,
    description: String,
}

#[derive(Default)]
struct Commands {
    named: BTreeMap<String, Command>,
    flexible: Vec<CheckRunFunction>,
}

/// In-process command dispatcher.
///
/// Handlers run without the table lock held, so a handler may register
/// further commands.
#[derive(Default)]
pub struct CommandTable {
    inner: RwLock<Commands>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered command names with their descriptions, sorted by name.
    pub fn commands(&self) -> Vec<(String, String)> {
        self.inner
            .read()
            .named
            .iter()
            .map(|(name, cmd)| (name.clone(), cmd.description.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().named.is_empty()
    }
}

impl CommandShell for CommandTable {
    fn add_command(&self, name: &str, func: ShellFunction, description: &str) -> bool {
        if name.is_empty() || name.contains(char::is_whitespace) {
            warn!(name, "invalid shell command name");
            return false;
        }

        let mut inner = self.inner.write();
        if inner.named.contains_key(name) {
            warn!(name, "shell command already registered");
            return false;
        }
        inner.named.insert(
            name.to_string(),
            Command {
                func,
                description: description.to_string(),
            },
        );
        true
    }

    fn add_flexible(&self, func: CheckRunFunction) -> bool {
        self.inner.write().flexible.push(func);
        true
    }

    fn run_command(&self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        let flexible = self.inner.read().flexible.clone();
        if flexible.iter().any(|handler| handler(line)) {
            return;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        let func = self
            .inner
            .read()
            .named
            .get(words[0])
            .map(|cmd| Arc::clone(&cmd.func));

        match func {
            Some(func) => func(&words[1..]),
            None => debug!(command = words[0], "unknown shell command"),
        }
    }
}
