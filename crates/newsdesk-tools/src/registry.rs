//! Tool registry for managing available tools

use crate::Tool;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Default)]
struct Entries {
    /// Tools in registration order
    ordered: Vec<Arc<dyn Tool>>,
    /// Name -> position in `ordered`
    by_name: HashMap<String, usize>,
}

/// Registry for managing tools
///
/// Listing preserves registration order so that `tools/list` responses are
/// stable across runs.
#[derive(Default)]
pub struct ToolRegistry {
    tools: RwLock<Entries>,
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool
    ///
    /// A tool registered under an existing name replaces the previous one in place.
    pub fn register(&self, tool: Arc<dyn Tool>) {
        let mut entries = self.tools.write().unwrap_or_else(PoisonError::into_inner);
        let name = tool.name().to_string();
        if let Some(&idx) = entries.by_name.get(&name) {
            tracing::debug!(tool = %name, "replacing registered tool");
            entries.ordered[idx] = tool;
        } else {
            let idx = entries.ordered.len();
            entries.ordered.push(tool);
            entries.by_name.insert(name, idx);
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let entries = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .by_name
            .get(name)
            .map(|&idx| Arc::clone(&entries.ordered[idx]))
    }

    /// List all registered tools in registration order
    pub fn list_tools(&self) -> Vec<Arc<dyn Tool>> {
        let entries = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        entries.ordered.clone()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        let entries = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        entries.ordered.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
