// ============================================================================
// Operation Kind
// The built-in operations the factory is seeded with
// ============================================================================

use crate::interfaces::OperationError;
use std::fmt;
use std::str::FromStr;

/// Built-in arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperationKind {
    /// Every built-in kind, in registration order
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Divide,
    ];

    /// Registry key (always lowercase)
    pub const fn key(self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Subtract => "subtract",
            OperationKind::Multiply => "multiply",
            OperationKind::Divide => "divide",
        }
    }

    /// Name reported by the operation instance
    pub const fn display_name(self) -> &'static str {
        match self {
            OperationKind::Add => "Addition",
            OperationKind::Subtract => "Subtraction",
            OperationKind::Multiply => "Multiplication",
            OperationKind::Divide => "Division",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OperationKind {
    type Err = OperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_lowercase();
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| OperationError::UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_lowercase() {
        for kind in OperationKind::ALL {
            assert_eq!(kind.key(), kind.key().to_lowercase());
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("add".parse::<OperationKind>(), Ok(OperationKind::Add));
        assert_eq!("DIVIDE".parse::<OperationKind>(), Ok(OperationKind::Divide));
        assert_eq!("MuLtIpLy".parse::<OperationKind>(), Ok(OperationKind::Multiply));
    }

    #[test]
    fn test_from_str_unknown_keeps_original_name() {
        let err = "Modulo".parse::<OperationKind>().unwrap_err();
        assert_eq!(err, OperationError::UnknownOperation("Modulo".to_string()));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(OperationKind::Subtract.display_name(), "Subtraction");
        assert_eq!(OperationKind::Divide.to_string(), "divide");
    }
}
