//! Data model for gates, conditions, measures, and levels.

pub mod collections;
pub mod condition;
pub mod gate;
pub mod level;
pub mod measure;
pub mod metric;

pub use condition::{Condition, Operator};
pub use gate::Gate;
pub use level::Level;
pub use measure::Measure;
pub use metric::{Metric, ValueType};
