//! Module loading capability interface
//!
//! The host environment that embeds the lexer resolves component modules by
//! path and hands back their default export. The core never performs that
//! resolution itself; it only defines the seam a host implements.

use std::fmt;

/// Errors a host can report while resolving a module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No module could be located at the given path
    ModuleNotFound(String),
    /// The module loaded but exposes no default export
    NoDefaultExport(String),
}

impl std::error::Error for ResolveError {}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::ModuleNotFound(path) => write!(f, "Module not found: {}", path),
            ResolveError::NoDefaultExport(path) => {
                write!(f, "Module has no default export: {}", path)
            }
        }
    }
}

/// Capability for resolving a module's default export by path.
///
/// Supplied by the host environment; nothing in this crate depends on a
/// concrete implementation.
pub trait ModuleLoader {
    /// The host's representation of a loaded module export
    type Module;

    fn resolve_default(&self, path: &str) -> Result<Self::Module, ResolveError>;
}
