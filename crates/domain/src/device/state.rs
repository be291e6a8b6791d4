//! Device state: the operational status of an inventory item.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Operational status of a device.
///
/// Any state may transition to any other. Only [`InUse`](Self::InUse)
/// restricts what can be done to a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceState {
    Available,
    InUse,
    Inactive,
    Maintenance,
}

impl DeviceState {
    /// Every accepted wire/storage literal, in declaration order.
    pub const LITERALS: [&'static str; 4] = ["AVAILABLE", "IN_USE", "INACTIVE", "MAINTENANCE"];

    /// The literal used on the wire and in storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::InUse => "IN_USE",
            Self::Inactive => "INACTIVE",
            Self::Maintenance => "MAINTENANCE",
        }
    }

    /// Whether the device is currently in use.
    #[must_use]
    pub fn is_in_use(self) -> bool {
        matches!(self, Self::InUse)
    }
}

impl std::fmt::Display for DeviceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(Self::Available),
            "IN_USE" => Ok(Self::InUse),
            "INACTIVE" => Ok(Self::Inactive),
            "MAINTENANCE" => Ok(Self::Maintenance),
            other => Err(ValidationError::UnknownState(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_in_use_only_for_in_use() {
        assert!(DeviceState::InUse.is_in_use());
        assert!(!DeviceState::Available.is_in_use());
        assert!(!DeviceState::Inactive.is_in_use());
        assert!(!DeviceState::Maintenance.is_in_use());
    }

    #[test]
    fn should_parse_every_literal() {
        for literal in DeviceState::LITERALS {
            let state: DeviceState = literal.parse().unwrap();
            assert_eq!(state.as_str(), literal);
        }
    }

    #[test]
    fn should_reject_lowercase_literal() {
        let result = DeviceState::from_str("in_use");
        assert_eq!(
            result,
            Err(ValidationError::UnknownState("in_use".to_string()))
        );
    }

    #[test]
    fn should_serialize_as_screaming_snake_case() {
        let json = serde_json::to_string(&DeviceState::InUse).unwrap();
        assert_eq!(json, "\"IN_USE\"");
        let parsed: DeviceState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DeviceState::InUse);
    }
}
