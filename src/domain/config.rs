// ============================================================================
// Factory Configuration
// Which operations a factory starts with and how results are rounded
// ============================================================================

use crate::numeric::RoundingMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest scale a `Decimal` can carry
pub const MAX_RESULT_SCALE: u32 = 28;

/// Configuration for building an operation factory
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FactoryConfig {
    /// Seed the registry with add/subtract/multiply/divide
    pub include_builtins: bool,

    /// Optional: Number of decimal places every result is rounded to
    /// None means results are returned exactly as computed
    pub result_scale: Option<u32>,

    /// Rounding used when `result_scale` is set
    pub rounding: RoundingMode,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            include_builtins: true,
            result_scale: None,
            rounding: RoundingMode::HalfEven,
        }
    }
}

impl FactoryConfig {
    /// Create a new configuration
    pub fn new(include_builtins: bool) -> Self {
        Self {
            include_builtins,
            ..Self::default()
        }
    }

    /// Builder method: Round every result to `scale` decimal places
    pub fn with_result_scale(mut self, scale: u32) -> Self {
        self.result_scale = Some(scale);
        self
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(scale) = self.result_scale {
            if scale > MAX_RESULT_SCALE {
                return Err(format!(
                    "Result scale {} exceeds maximum of {}",
                    scale, MAX_RESULT_SCALE
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl FactoryConfig {
    /// Built-in operations, exact results
    pub fn standard() -> Self {
        Self::default()
    }

    /// Monetary configuration
    /// - Built-in operations
    /// - Results rounded to cents, half away from zero
    pub fn monetary() -> Self {
        Self::default()
            .with_result_scale(2)
            .with_rounding(RoundingMode::HalfUp)
    }

    /// Empty registry, for callers that register everything themselves
    pub fn bare() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = FactoryConfig::default();
        assert!(config.include_builtins);
        assert_eq!(config.result_scale, None);
        assert_eq!(config.rounding, RoundingMode::HalfEven);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = FactoryConfig::bare()
            .with_result_scale(4)
            .with_rounding(RoundingMode::Down);

        assert!(!config.include_builtins);
        assert_eq!(config.result_scale, Some(4));
        assert_eq!(config.rounding, RoundingMode::Down);
    }

    #[test]
    fn test_validation() {
        assert!(FactoryConfig::standard().with_result_scale(28).validate().is_ok());
        assert!(FactoryConfig::standard().with_result_scale(29).validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        let monetary = FactoryConfig::monetary();
        assert_eq!(monetary.result_scale, Some(2));
        assert_eq!(monetary.rounding, RoundingMode::HalfUp);

        assert!(FactoryConfig::standard().include_builtins);
        assert!(!FactoryConfig::bare().include_builtins);
    }
}
