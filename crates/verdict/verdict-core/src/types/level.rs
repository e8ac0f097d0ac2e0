//! Gate status levels.

use std::fmt;
use std::str::FromStr;

use crate::errors::GateError;

/// Outcome severity of a condition or a whole gate.
///
/// Total order `Ok < Warn < Error`; gate aggregation takes the maximum, so
/// the overall level reads as "worst severity across conditions".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    /// Wire name, used verbatim in the persisted details document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OK" => Ok(Self::Ok),
            "WARN" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            other => Err(GateError::UnknownLevel {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_totally_ordered_by_severity() {
        assert!(Level::Ok < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert_eq!(Level::Ok.max(Level::Warn), Level::Warn);
        assert_eq!(Level::Error.max(Level::Warn), Level::Error);
    }

    #[test]
    fn test_wire_names_round_trip() {
        for level in [Level::Ok, Level::Warn, Level::Error] {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        }
        assert!("ok".parse::<Level>().is_err());
        assert!("FAILED".parse::<Level>().is_err());
    }
}
