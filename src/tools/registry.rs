//! Tool registry for Orrery
//!
//! The registry maps action names to tool implementations and dispatches
//! parsed action requests. Unknown names are not an error: the dispatch
//! result is always observation text, and an unknown-action notice stays
//! in-loop so the model can correct itself.

use std::collections::HashMap;

use tracing::info;

use super::{CalculateTool, PlanetMassTool, Tool};

/// A registry that holds and dispatches tools.
///
/// # Example
///
/// ```
/// use orrery::tools::{CalculateTool, ToolRegistry};
///
/// let mut registry = ToolRegistry::new();
/// registry.register(Box::new(CalculateTool));
///
/// assert!(registry.has("calculate"));
/// assert_eq!(registry.dispatch("calculate", "2 + 2"), "4");
/// ```
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry with the built-in tools registered.
    ///
    /// # Example
    /// ```
    /// use orrery::tools::ToolRegistry;
    ///
    /// let registry = ToolRegistry::with_defaults();
    /// assert!(registry.has("calculate"));
    /// assert!(registry.has("planet_mass"));
    /// ```
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CalculateTool));
        registry.register(Box::new(PlanetMassTool));
        registry
    }

    /// Register a tool. A tool with the same name is replaced.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let name = tool.name().to_string();
        info!(tool = %name, "Registering tool");
        self.tools.insert(name, tool);
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// Whether a tool with this name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// The names of all registered tools, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Dispatch an action request to its tool.
    ///
    /// Returns the tool's observation text. An unregistered name yields
    /// `Unknown action: {name}: {argument}` without invoking anything.
    pub fn dispatch(&self, name: &str, argument: &str) -> String {
        match self.tools.get(name) {
            Some(tool) => {
                info!(tool = %name, argument = %argument, "Dispatching action");
                tool.run(argument)
            }
            None => format!("Unknown action: {}: {}", name, argument),
        }
    }
}
