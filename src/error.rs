// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the theory core.

use thiserror::Error;

/// Errors raised by the pitch engine and the generators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Note or root outside the accepted vocabulary
    #[error("invalid note '{0}'")]
    InvalidNote(String),
    /// Formula symbol other than W, H or T
    #[error("invalid formula step '{0}' (expected W, H or T)")]
    InvalidFormulaStep(char),
    /// Chord type name or suffix not in the chord table
    #[error("unrecognized chord type '{0}'")]
    UnrecognizedChordType(String),
    /// Custom scale definition without any steps
    #[error("scale '{0}' has an empty formula")]
    EmptyFormula(String),
}

/// Result alias for theory operations
pub type Result<T> = std::result::Result<T, TheoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TheoryError::InvalidNote("H".to_string()).to_string(),
            "invalid note 'H'"
        );
        assert_eq!(
            TheoryError::InvalidFormulaStep('X').to_string(),
            "invalid formula step 'X' (expected W, H or T)"
        );
        assert_eq!(
            TheoryError::UnrecognizedChordType("dim".to_string()).to_string(),
            "unrecognized chord type 'dim'"
        );
    }
}
