//! Capability traits at the storage seam.
//!
//! The engine holds no persistent handle to storage: measure snapshots and
//! gate definitions are supplied by the caller through these traits.

pub mod gate_source;
pub mod measure_source;

pub use gate_source::GateSource;
pub use measure_source::MeasureSource;
