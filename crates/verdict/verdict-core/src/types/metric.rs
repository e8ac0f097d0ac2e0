//! Metric definitions.

use serde::{Deserialize, Serialize};

/// Declared value type of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueType {
    Int,
    Float,
    Percent,
    Bool,
    String,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Percent => "PERCENT",
            Self::Bool => "BOOL",
            Self::String => "STRING",
        }
    }

    /// Whether values of this type take part in numeric threshold
    /// comparisons. Bool counts as numeric (1/0).
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::String)
    }
}

/// A metric definition: unique key plus declared value type.
///
/// Immutable; metrics are registered outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Metric {
    pub key: String,
    pub value_type: ValueType,
}

impl Metric {
    pub fn new(key: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            key: key.into(),
            value_type,
        }
    }
}
