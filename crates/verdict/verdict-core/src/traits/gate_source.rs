//! GateSource trait — gate discovery by name.

use crate::types::Gate;

/// Supplier of gate definitions.
///
/// Which gate applies to which component is decided outside the engine;
/// the config-backed `GateRegistry` is the in-process implementation.
pub trait GateSource {
    /// Find a gate definition by name.
    fn find_gate(&self, name: &str) -> Option<&Gate>;
}
