//! Sale status enum.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a sale.
///
/// The only legal transition is `Pending` -> `Completed`; a completed sale
/// never moves back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    #[default]
    Pending,
    Completed,
}

impl SaleStatus {
    /// Whether `self` may transition to `next`.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!((self, next), (Self::Pending, Self::Completed))
    }
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for SaleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("invalid sale status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SaleStatus::Completed).expect("serialize");
        assert_eq!(json, "\"completed\"");
        let parsed: SaleStatus = serde_json::from_str("\"pending\"").expect("deserialize");
        assert_eq!(parsed, SaleStatus::Pending);
    }

    #[test]
    fn test_transition_rules() {
        assert!(SaleStatus::Pending.can_transition_to(SaleStatus::Completed));
        assert!(!SaleStatus::Completed.can_transition_to(SaleStatus::Pending));
        assert!(!SaleStatus::Pending.can_transition_to(SaleStatus::Pending));
    }
}
