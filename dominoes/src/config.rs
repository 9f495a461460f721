use serde::{Deserialize, Serialize};

use crate::types::{ChainError, ChainResult};

/// Width of the used-piece bitmask.
pub const MAX_PIECES: usize = u64::BITS as usize;

pub const DEFAULT_MAX_PIECES: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Largest input the solver accepts. The search is exponential in this.
    pub max_pieces: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_pieces: DEFAULT_MAX_PIECES,
        }
    }
}

impl SolverConfig {
    pub fn with_max_pieces(mut self, max_pieces: usize) -> Self {
        self.max_pieces = max_pieces;
        self
    }

    pub fn validate(&self) -> ChainResult<()> {
        if self.max_pieces > MAX_PIECES {
            return Err(ChainError::InvalidConfig(format!(
                "max_pieces must be at most {MAX_PIECES}, got {}",
                self.max_pieces
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SolverConfig::default();

        assert_eq!(config.max_pieces, DEFAULT_MAX_PIECES);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_limit_wider_than_mask() {
        let config = SolverConfig::default().with_max_pieces(MAX_PIECES + 1);

        assert!(matches!(
            config.validate(),
            Err(ChainError::InvalidConfig(_))
        ));
        assert_eq!(
            SolverConfig::default().with_max_pieces(MAX_PIECES).validate(),
            Ok(())
        );
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let config: SolverConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SolverConfig::default());

        let config: SolverConfig = serde_json::from_str(r#"{"max_pieces": 12}"#).unwrap();
        assert_eq!(config.max_pieces, 12);
    }
}
